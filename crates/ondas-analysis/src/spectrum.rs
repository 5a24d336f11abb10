//! Calibrated single-sided magnitude spectra.

use ondas_core::{EngineError, SignalConfig};

use crate::fft::Fft;
use crate::window::{self, WindowMetrics};

/// A single-sided magnitude spectrum with its frequency axis.
///
/// The DC bin is removed: `frequency_bins[i] = (i + 1) · binSize`, aligned
/// 1:1 with `magnitude_db`. Both sequences have length `N/2 - 1` for an
/// N-sample input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    /// Bin center frequencies in Hz, starting one bin above DC.
    pub frequency_bins: Vec<f64>,
    /// Calibrated magnitudes in dB (`20·log10`). A bin with exactly zero
    /// magnitude maps to `-inf`.
    pub magnitude_db: Vec<f64>,
}

/// Compute the calibrated single-sided spectrum of a time-domain signal.
///
/// When windowing is enabled in `config`, the signal is multiplied by the
/// configured analysis window and the magnitudes scaled by
/// `sqrt(ENBW)/CPG` to compensate the window's coherent gain; the computed
/// [`WindowMetrics`] are returned alongside. Without a window the plain
/// FFT magnitude over `N` is used.
///
/// The two-sided FFT is folded to one side by keeping the first `N/2` bins
/// and doubling them, then the DC bin is dropped.
pub fn analyze(
    signal: &[f64],
    config: &SignalConfig,
) -> Result<(Spectrum, Option<WindowMetrics>), EngineError> {
    let n = signal.len();
    // Keeping n/2 bins and dropping DC needs n >= 4 to leave anything.
    if n < 4 {
        return Err(EngineError::invalid_config(format!(
            "signal of {n} samples yields an empty one-sided spectrum (need at least 4)"
        )));
    }
    if !(config.sample_frequency_hz > 0.0) {
        return Err(EngineError::invalid_config(format!(
            "sample frequency must be positive, got {}",
            config.sample_frequency_hz
        )));
    }

    let bin_size_hz = config.sample_frequency_hz / n as f64;
    let fft = Fft::new(n);

    let (magnitudes, metrics): (Vec<f64>, Option<WindowMetrics>) = if config.window_enabled {
        let window = window::generate(config.window_kind, n);
        let metrics = WindowMetrics::from_window(&window);
        let scale = metrics.scaling_factor();
        let windowed: Vec<f64> = signal.iter().zip(&window).map(|(s, w)| s * w).collect();
        let spectrum = fft.forward(&windowed);
        (
            spectrum.iter().map(|c| c.norm() / n as f64 * scale).collect(),
            Some(metrics),
        )
    } else {
        let spectrum = fft.forward(signal);
        (spectrum.iter().map(|c| c.norm() / n as f64).collect(), None)
    };

    let half = n / 2;
    let magnitude_db: Vec<f64> = magnitudes[1..half]
        .iter()
        .map(|&m| 20.0 * (2.0 * m).log10())
        .collect();
    let frequency_bins: Vec<f64> = (1..half).map(|i| i as f64 * bin_size_hz).collect();

    Ok((
        Spectrum {
            frequency_bins,
            magnitude_db,
        },
        metrics,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Config whose time axis lands tones almost exactly on FFT bins.
    fn test_config() -> SignalConfig {
        SignalConfig {
            signal_frequency_hz: 1e3,
            sample_frequency_hz: 1e5,
            start_time: 0.0,
            end_time: 0.1,
            ..SignalConfig::default()
        }
    }

    fn bin_aligned_sine(config: &SignalConfig, amplitude: f64) -> Vec<f64> {
        config
            .time_axis()
            .iter()
            .map(|&t| amplitude * (2.0 * PI * config.signal_frequency_hz * t).sin())
            .collect()
    }

    fn peak_index(spectrum: &Spectrum) -> usize {
        spectrum
            .magnitude_db
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .map(|(i, _)| i)
            .unwrap()
    }

    #[test]
    fn spectrum_length_is_half_minus_one() {
        let config = test_config();
        let signal = bin_aligned_sine(&config, 1.0);
        let (spectrum, metrics) = analyze(&signal, &config).unwrap();

        let n = signal.len();
        assert_eq!(spectrum.magnitude_db.len(), n / 2 - 1);
        assert_eq!(spectrum.frequency_bins.len(), n / 2 - 1);
        assert!(metrics.is_none());
    }

    #[test]
    fn dc_bin_is_removed() {
        let config = test_config();
        let signal = bin_aligned_sine(&config, 1.0);
        let (spectrum, _) = analyze(&signal, &config).unwrap();

        let bin_size = config.sample_frequency_hz / signal.len() as f64;
        assert!(spectrum.frequency_bins[0] > 0.0);
        assert!((spectrum.frequency_bins[0] - bin_size).abs() < 1e-9);
    }

    #[test]
    fn unwindowed_tone_reads_its_amplitude_in_db() {
        let config = test_config();
        let signal = bin_aligned_sine(&config, 1.0);
        let (spectrum, _) = analyze(&signal, &config).unwrap();

        // 1 kHz at a 10 Hz bin size: peak near bin index 99 (1000 Hz).
        let peak = peak_index(&spectrum);
        assert!((spectrum.frequency_bins[peak] - 1000.0).abs() < 2.0);
        // Unit amplitude is 0 dB after single-sided calibration.
        assert!(
            spectrum.magnitude_db[peak].abs() < 0.05,
            "peak {} dB",
            spectrum.magnitude_db[peak]
        );
    }

    #[test]
    fn tone_energy_is_concentrated_at_the_peak() {
        let config = test_config();
        let signal = bin_aligned_sine(&config, 1.0);
        let (spectrum, _) = analyze(&signal, &config).unwrap();

        let peak = peak_index(&spectrum);
        // Bins far from the tone sit far below the peak.
        let floor = spectrum.magnitude_db[peak + 500];
        assert!(spectrum.magnitude_db[peak] - floor > 60.0);
    }

    #[test]
    fn windowed_tone_scales_by_sqrt_enbw() {
        let config = SignalConfig {
            window_enabled: true,
            window_kind: ondas_core::WindowKind::Hann,
            ..test_config()
        };
        let signal = bin_aligned_sine(&config, 1.0);
        let (spectrum, metrics) = analyze(&signal, &config).unwrap();
        let metrics = metrics.expect("windowed analysis returns metrics");

        // The calibration multiplies a coherent tone by sqrt(ENBW):
        // |X|/N = A/2 · CPG, doubled and scaled by sqrt(ENBW)/CPG.
        let expected_db = 20.0 * metrics.enbw.sqrt().log10();
        let peak = peak_index(&spectrum);
        assert!(
            (spectrum.magnitude_db[peak] - expected_db).abs() < 0.1,
            "peak {} dB, expected {expected_db} dB",
            spectrum.magnitude_db[peak]
        );
    }

    #[test]
    fn pure_dc_leaves_only_the_noise_floor() {
        let config = SignalConfig {
            sample_frequency_hz: 16.0,
            start_time: 0.0,
            end_time: 1.0,
            ..SignalConfig::default()
        };
        let signal = vec![2.5; 16];
        let (spectrum, _) = analyze(&signal, &config).unwrap();
        // All DC energy lives in the dropped bin.
        for &db in &spectrum.magnitude_db {
            assert!(db < -100.0, "got {db} dB");
        }
    }

    #[test]
    fn too_short_signal_is_invalid() {
        let config = test_config();
        for n in 0..4 {
            let signal = vec![1.0; n];
            assert!(matches!(
                analyze(&signal, &config),
                Err(EngineError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn four_samples_is_the_smallest_valid_input() {
        let config = SignalConfig {
            sample_frequency_hz: 4.0,
            start_time: 0.0,
            end_time: 1.0,
            ..SignalConfig::default()
        };
        let (spectrum, _) = analyze(&[0.0, 1.0, 0.0, -1.0], &config).unwrap();
        assert_eq!(spectrum.magnitude_db.len(), 1);
        assert_eq!(spectrum.frequency_bins.len(), 1);
    }
}
