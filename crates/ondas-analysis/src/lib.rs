//! Ondas Analysis - windowed, calibrated spectral analysis
//!
//! Turns a synthesized time-domain signal into a single-sided magnitude
//! spectrum an external front end can plot directly:
//!
//! - [`window`] - the 11 named analysis windows in periodic form,
//!   including the custom 7-term Blackman-Harris, plus [`WindowMetrics`]
//!   (ENBW and CPG) for window compensation
//! - [`fft`] - forward FFT wrapper over rustfft
//! - [`spectrum`] - single-sided, DC-removed, dB-scaled spectra with
//!   window-compensation scaling
//!
//! ```rust
//! use ondas_core::SignalConfig;
//! use ondas_analysis::spectrum::analyze;
//!
//! let config = SignalConfig {
//!     sample_frequency_hz: 8.0,
//!     start_time: 0.0,
//!     end_time: 1.0,
//!     ..SignalConfig::default()
//! };
//! let signal = vec![0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
//! let (spectrum, _) = analyze(&signal, &config).unwrap();
//! assert_eq!(spectrum.magnitude_db.len(), 3); // N/2 - 1, DC removed
//! ```

pub mod fft;
pub mod spectrum;
pub mod window;

pub use fft::Fft;
pub use spectrum::{Spectrum, analyze};
pub use window::WindowMetrics;
