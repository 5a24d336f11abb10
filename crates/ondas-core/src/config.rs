//! Signal configuration and derived timing.

use crate::error::EngineError;
use crate::kinds::{NoiseKind, SawtoothSlant, WindowKind};

/// The mutable parameter set driving synthesis and analysis.
///
/// There is exactly one live `SignalConfig` per session; it is owned by the
/// session and mutated only through its setters. Derived quantities (sample
/// period, sample count, time axis) are recomputed from the fields here
/// before every synthesis call rather than cached.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalConfig {
    /// Signal fundamental frequency in Hz. Always strictly positive.
    pub signal_frequency_hz: f64,
    /// Sampling frequency in Hz. Always strictly positive.
    pub sample_frequency_hz: f64,
    /// Peak amplitude (unitless).
    pub amplitude: f64,
    /// DC offset added to every sample.
    pub dc_offset: f64,
    /// Pulse duty cycle in `[0, 1]`.
    pub duty_cycle: f64,
    /// Sawtooth slant direction.
    pub slant: SawtoothSlant,
    /// Start of the synthesized time span, in seconds.
    pub start_time: f64,
    /// End of the synthesized time span, in seconds. Must exceed `start_time`.
    pub end_time: f64,
    /// Whether synthesized signals get a fresh noise sequence added.
    pub noise_enabled: bool,
    /// Active noise model.
    pub noise_kind: NoiseKind,
    /// Noise magnitude, non-negative.
    pub noise_magnitude: f64,
    /// Whether spectra are computed through an analysis window.
    pub window_enabled: bool,
    /// Active analysis window.
    pub window_kind: WindowKind,
    /// Number of odd harmonics summed by harmonic-constructed waveforms.
    pub harmonic_count: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        SignalConfig {
            signal_frequency_hz: 1e3,
            sample_frequency_hz: 1e6,
            amplitude: 1.0,
            dc_offset: 0.0,
            duty_cycle: 0.5,
            slant: SawtoothSlant::Left,
            start_time: 0.0,
            end_time: 0.1,
            noise_enabled: false,
            noise_kind: NoiseKind::White,
            noise_magnitude: 0.1,
            window_enabled: false,
            window_kind: WindowKind::Boxcar,
            harmonic_count: 7,
        }
    }
}

impl SignalConfig {
    /// Sample period in seconds, `1 / sample_frequency_hz`.
    pub fn sample_period(&self) -> f64 {
        1.0 / self.sample_frequency_hz
    }

    /// Number of samples over the configured time span:
    /// `floor(|end - start| / sample_period)`.
    pub fn sample_count(&self) -> usize {
        ((self.end_time - self.start_time).abs() / self.sample_period()).floor() as usize
    }

    /// Time axis: `sample_count()` points linearly spaced over
    /// `[start_time, end_time]`, inclusive of both endpoints.
    pub fn time_axis(&self) -> Vec<f64> {
        let n = self.sample_count();
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![self.start_time];
        }
        let step = (self.end_time - self.start_time) / (n - 1) as f64;
        let mut axis: Vec<f64> = (0..n).map(|i| self.start_time + i as f64 * step).collect();
        // Pin the last point to the exact endpoint.
        axis[n - 1] = self.end_time;
        axis
    }

    /// Check the domain invariants a `generate()` run depends on.
    ///
    /// Fails fast with [`EngineError::InvalidConfiguration`] on a
    /// non-positive sample rate, a non-positive duration, an out-of-range
    /// duty cycle, a zero harmonic count, a negative noise magnitude, or a
    /// time span too short to yield a usable sample count.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.sample_frequency_hz > 0.0) || !self.sample_frequency_hz.is_finite() {
            return Err(EngineError::invalid_config(format!(
                "sample frequency must be positive and finite, got {}",
                self.sample_frequency_hz
            )));
        }
        if !(self.end_time > self.start_time) {
            return Err(EngineError::invalid_config(format!(
                "end time {} must be greater than start time {}",
                self.end_time, self.start_time
            )));
        }
        if !(0.0..=1.0).contains(&self.duty_cycle) {
            return Err(EngineError::invalid_config(format!(
                "duty cycle must be in [0, 1], got {}",
                self.duty_cycle
            )));
        }
        if self.harmonic_count == 0 {
            return Err(EngineError::invalid_config(
                "harmonic count must be at least 1",
            ));
        }
        if self.noise_magnitude < 0.0 {
            return Err(EngineError::invalid_config(format!(
                "noise magnitude must be non-negative, got {}",
                self.noise_magnitude
            )));
        }
        // The one-sided spectrum keeps sample_count/2 bins and then drops
        // DC; anything below 4 samples leaves it empty.
        let n = self.sample_count();
        if n < 4 {
            return Err(EngineError::invalid_config(format!(
                "sample count {n} too small for a one-sided spectrum (need at least 4)"
            )));
        }
        Ok(())
    }
}
