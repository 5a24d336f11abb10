//! Time-domain waveform synthesis.
//!
//! Direct closed-form waveforms (sine, pulse, sawtooth family) and
//! harmonic-series constructions that build square and triangle waves by
//! explicitly summing a finite Fourier sine series.

use std::f64::consts::PI;

use ondas_core::{EngineError, SignalConfig, Waveform};

use crate::noise::NoiseSource;

/// A synthesized signal paired 1:1 with its time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Sample instants in seconds, linearly spaced over the configured span.
    pub time: Vec<f64>,
    /// Signal values at those instants.
    pub samples: Vec<f64>,
}

/// Produces time-domain samples for a waveform under a [`SignalConfig`].
///
/// Owns the [`NoiseSource`] used when noise injection is enabled, so a
/// seeded synthesizer yields reproducible noisy signals.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    noise: NoiseSource,
}

impl Synthesizer {
    /// Create a synthesizer with an entropy-seeded noise source.
    pub fn new() -> Self {
        Synthesizer {
            noise: NoiseSource::new(),
        }
    }

    /// Create a synthesizer whose noise source is deterministic.
    pub fn with_seed(seed: u64) -> Self {
        Synthesizer {
            noise: NoiseSource::with_seed(seed),
        }
    }

    /// Synthesize `waveform` over the configured time span.
    ///
    /// Recomputes the derived timing and time axis first, evaluates the
    /// waveform at every sample instant, then adds a freshly generated
    /// noise sequence elementwise when noise is enabled.
    pub fn synthesize(
        &mut self,
        config: &SignalConfig,
        waveform: Waveform,
    ) -> Result<TimeSeries, EngineError> {
        config.validate()?;

        let time = config.time_axis();
        let f = config.signal_frequency_hz;
        let amp = config.amplitude;
        let offset = config.dc_offset;

        let mut samples: Vec<f64> = match waveform {
            Waveform::Sine => time
                .iter()
                .map(|&t| amp * (2.0 * PI * f * t).sin() + offset)
                .collect(),
            Waveform::Square => time
                .iter()
                .map(|&t| amp * pulse(cycle_fraction(f, t), config.duty_cycle) + offset)
                .collect(),
            Waveform::Sawtooth => {
                let width = match config.slant {
                    ondas_core::SawtoothSlant::Left => 1.0,
                    ondas_core::SawtoothSlant::Right => 0.0,
                };
                time.iter()
                    .map(|&t| amp * sawtooth(cycle_fraction(f, t), width) + offset)
                    .collect()
            }
            Waveform::Triangle => time
                .iter()
                .map(|&t| amp * sawtooth(cycle_fraction(f, t), 0.5) + offset)
                .collect(),
            Waveform::HarmonicSquare => {
                harmonic_square(&time, f, amp, offset, config.harmonic_count)
            }
            Waveform::HarmonicTriangle => {
                harmonic_triangle(&time, f, amp, offset, config.harmonic_count)
            }
        };

        if config.noise_enabled {
            let noise =
                self.noise
                    .generate(config.noise_kind, config.noise_magnitude, samples.len())?;
            for (s, n) in samples.iter_mut().zip(noise) {
                *s += n;
            }
        }

        Ok(TimeSeries { time, samples })
    }
}

/// Position inside the current cycle, in `[0, 1)`.
#[inline]
fn cycle_fraction(frequency_hz: f64, t: f64) -> f64 {
    (frequency_hz * t).rem_euclid(1.0)
}

/// Bipolar pulse: +1 for the first `duty` fraction of the cycle, -1 after.
#[inline]
fn pulse(frac: f64, duty: f64) -> f64 {
    if frac < duty { 1.0 } else { -1.0 }
}

/// Generalized sawtooth rising over the first `width` fraction of the cycle
/// and falling over the rest. `width = 1` is the standard left-slant ramp,
/// `width = 0` its mirror, `width = 0.5` a symmetric triangle.
#[inline]
fn sawtooth(frac: f64, width: f64) -> f64 {
    if frac < width {
        2.0 * frac / width - 1.0
    } else {
        1.0 - 2.0 * (frac - width) / (1.0 - width)
    }
}

/// Square wave built from `harmonics` odd sine terms:
/// `amp * (4/π) Σ_{n odd} sin(2πnft)/n + offset`.
fn harmonic_square(time: &[f64], f: f64, amp: f64, offset: f64, harmonics: usize) -> Vec<f64> {
    let four_over_pi = 4.0 / PI;
    time.iter()
        .map(|&t| {
            let mut acc = 0.0;
            for n in (1..=2 * harmonics - 1).step_by(2) {
                let n_f = n as f64;
                acc += four_over_pi / n_f * (2.0 * PI * n_f * f * t).sin();
            }
            amp * acc + offset
        })
        .collect()
}

/// Triangle wave built from `harmonics` odd sine terms with alternating
/// signs: `(8/π²) amp Σ_{n odd} (-1)^{(n-1)/2} sin(2πnft)/n² + offset`.
fn harmonic_triangle(time: &[f64], f: f64, amp: f64, offset: f64, harmonics: usize) -> Vec<f64> {
    let scale = 8.0 / (PI * PI) * amp;
    time.iter()
        .map(|&t| {
            let mut acc = 0.0;
            for n in (1..=2 * harmonics - 1).step_by(2) {
                let n_f = n as f64;
                let sign = if ((n - 1) / 2) % 2 == 0 { 1.0 } else { -1.0 };
                acc += sign / (n_f * n_f) * (2.0 * PI * n_f * f * t).sin();
            }
            scale * acc + offset
        })
        .collect()
}
