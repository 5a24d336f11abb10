//! The signal session: one parameter set, one pair of result snapshots.

use ondas_analysis::{Spectrum, WindowMetrics, analyze};
use ondas_core::{EngineError, NoiseKind, SawtoothSlant, SignalConfig, Waveform, WindowKind};
use ondas_synth::Synthesizer;

/// Owns the live [`SignalConfig`] and sequences synthesis and analysis.
///
/// The host UI mutates parameters through the named setters, calls
/// [`generate`](SignalSession::generate), then pulls results through the
/// read-only accessors. Before the first successful `generate()` every
/// sequence accessor returns an empty slice; nothing is undefined.
///
/// A session is single-threaded and self-contained. Hosts wanting several
/// concurrent plots should create one session per plot; no state is shared
/// between instances.
#[derive(Debug)]
pub struct SignalSession {
    config: SignalConfig,
    waveform: Waveform,
    synth: Synthesizer,
    time_axis: Vec<f64>,
    signal: Vec<f64>,
    spectrum: Spectrum,
    metrics: Option<WindowMetrics>,
}

impl Default for SignalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSession {
    /// Create a session with default parameters (1 kHz sine at 1 MHz
    /// sampling over 0.1 s) and an entropy-seeded noise source.
    pub fn new() -> Self {
        Self::with_synthesizer(Synthesizer::new())
    }

    /// Create a session whose noise source is deterministic.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_synthesizer(Synthesizer::with_seed(seed))
    }

    fn with_synthesizer(synth: Synthesizer) -> Self {
        SignalSession {
            config: SignalConfig::default(),
            waveform: Waveform::Sine,
            synth,
            time_axis: Vec::new(),
            signal: Vec::new(),
            spectrum: Spectrum::default(),
            metrics: None,
        }
    }

    // --- parameter setters ---

    /// Set the peak amplitude.
    ///
    /// Existing signal data is rescaled in place around the DC offset
    /// instead of being resynthesized, so harmonics and noise are kept.
    /// When the previous amplitude is zero the rescale is skipped (nothing
    /// to divide out) and the new value takes effect on the next
    /// `generate()`.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        let old = self.config.amplitude;
        if !self.signal.is_empty() && old != 0.0 {
            let ratio = amplitude / old;
            let offset = self.config.dc_offset;
            for s in &mut self.signal {
                *s = (*s - offset) * ratio + offset;
            }
        }
        self.config.amplitude = amplitude;
    }

    /// Set the DC offset, shifting existing signal data in place.
    pub fn set_offset(&mut self, offset: f64) {
        let delta = offset - self.config.dc_offset;
        for s in &mut self.signal {
            *s += delta;
        }
        self.config.dc_offset = offset;
    }

    /// Set the signal frequency in Hz.
    ///
    /// A non-positive value is rejected: no state changes and the caller
    /// gets [`EngineError::RejectedUpdate`] to branch on.
    pub fn set_frequency(&mut self, frequency_hz: f64) -> Result<(), EngineError> {
        if frequency_hz > 0.0 {
            self.config.signal_frequency_hz = frequency_hz;
            Ok(())
        } else {
            tracing::warn!(frequency_hz, "rejected non-positive frequency update");
            Err(EngineError::rejected_update("signal frequency", frequency_hz))
        }
    }

    /// Set the sampling frequency in Hz.
    pub fn set_sample_frequency(&mut self, sample_frequency_hz: f64) -> Result<(), EngineError> {
        if !(sample_frequency_hz > 0.0) || !sample_frequency_hz.is_finite() {
            return Err(EngineError::invalid_config(format!(
                "sample frequency must be positive and finite, got {sample_frequency_hz}"
            )));
        }
        self.config.sample_frequency_hz = sample_frequency_hz;
        Ok(())
    }

    /// Set the synthesized time span in seconds.
    pub fn set_time(&mut self, start_time: f64, end_time: f64) -> Result<(), EngineError> {
        if !(end_time > start_time) {
            return Err(EngineError::invalid_config(format!(
                "end time {end_time} must be greater than start time {start_time}"
            )));
        }
        self.config.start_time = start_time;
        self.config.end_time = end_time;
        Ok(())
    }

    /// Select the waveform to synthesize.
    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
    }

    /// Select the sawtooth slant direction.
    pub fn set_slant(&mut self, slant: SawtoothSlant) {
        self.config.slant = slant;
    }

    /// Set the pulse duty cycle, in `[0, 1]`.
    pub fn set_duty_cycle(&mut self, duty_cycle: f64) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(EngineError::invalid_config(format!(
                "duty cycle must be in [0, 1], got {duty_cycle}"
            )));
        }
        self.config.duty_cycle = duty_cycle;
        Ok(())
    }

    /// Configure noise injection.
    pub fn set_noise(
        &mut self,
        kind: NoiseKind,
        magnitude: f64,
        enabled: bool,
    ) -> Result<(), EngineError> {
        if magnitude < 0.0 {
            return Err(EngineError::invalid_config(format!(
                "noise magnitude must be non-negative, got {magnitude}"
            )));
        }
        self.config.noise_kind = kind;
        self.config.noise_magnitude = magnitude;
        self.config.noise_enabled = enabled;
        Ok(())
    }

    /// Configure the analysis window.
    pub fn set_window(&mut self, kind: WindowKind, enabled: bool) {
        self.config.window_kind = kind;
        self.config.window_enabled = enabled;
    }

    /// Set the number of odd harmonics for harmonic-constructed waveforms.
    pub fn set_harmonics(&mut self, count: usize) -> Result<(), EngineError> {
        if count == 0 {
            return Err(EngineError::invalid_config(
                "harmonic count must be at least 1",
            ));
        }
        self.config.harmonic_count = count;
        Ok(())
    }

    // --- orchestration ---

    /// Run synthesis and analysis under the current parameters.
    ///
    /// The single entry point a host calls before reading results. Both
    /// stages run to completion before any stored state is replaced, so a
    /// failure leaves the previous results intact.
    pub fn generate(&mut self) -> Result<(), EngineError> {
        tracing::debug!(
            waveform = %self.waveform,
            sample_count = self.config.sample_count(),
            window_enabled = self.config.window_enabled,
            window = %self.config.window_kind,
            noise_enabled = self.config.noise_enabled,
            noise = %self.config.noise_kind,
            "generate"
        );

        let series = self.synth.synthesize(&self.config, self.waveform)?;
        let (spectrum, metrics) = analyze(&series.samples, &self.config)?;

        self.time_axis = series.time;
        self.signal = series.samples;
        self.spectrum = spectrum;
        self.metrics = metrics;
        Ok(())
    }

    // --- result accessors ---

    /// Time axis of the last generated signal; empty before `generate()`.
    pub fn time_axis(&self) -> &[f64] {
        &self.time_axis
    }

    /// Samples of the last generated signal; empty before `generate()`.
    pub fn signal_data(&self) -> &[f64] {
        &self.signal
    }

    /// Frequency bins of the last spectrum; empty before `generate()`.
    pub fn frequency_bins(&self) -> &[f64] {
        &self.spectrum.frequency_bins
    }

    /// Magnitudes (dB) of the last spectrum; empty before `generate()`.
    pub fn magnitude_db(&self) -> &[f64] {
        &self.spectrum.magnitude_db
    }

    /// Metrics of the window used by the last windowed analysis, if any.
    pub fn window_metrics(&self) -> Option<WindowMetrics> {
        self.metrics
    }

    // --- display accessors ---

    /// Current signal frequency in Hz.
    pub fn signal_frequency_hz(&self) -> f64 {
        self.config.signal_frequency_hz
    }

    /// Current sampling frequency in Hz.
    pub fn sample_frequency_hz(&self) -> f64 {
        self.config.sample_frequency_hz
    }

    /// Current peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.config.amplitude
    }

    /// Current DC offset.
    pub fn dc_offset(&self) -> f64 {
        self.config.dc_offset
    }

    /// Current waveform selection.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Current noise magnitude.
    pub fn noise_magnitude(&self) -> f64 {
        self.config.noise_magnitude
    }

    /// Whether noise injection is enabled.
    pub fn noise_enabled(&self) -> bool {
        self.config.noise_enabled
    }

    /// Current analysis window selection.
    pub fn window_kind(&self) -> WindowKind {
        self.config.window_kind
    }

    /// Whether windowed analysis is enabled.
    pub fn window_enabled(&self) -> bool {
        self.config.window_enabled
    }

    /// Current harmonic count for harmonic-constructed waveforms.
    pub fn harmonic_count(&self) -> usize {
        self.config.harmonic_count
    }
}
