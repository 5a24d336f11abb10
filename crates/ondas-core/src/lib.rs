//! Ondas Core - shared vocabulary for the ondas signal engine
//!
//! This crate holds the types every other ondas crate speaks in:
//!
//! - [`SignalConfig`] - the mutable parameter set (frequencies, amplitude,
//!   offset, duty cycle, time span, noise and window selection, harmonic
//!   count) plus the derived timing formulas and time-axis generation
//! - [`Waveform`], [`NoiseKind`], [`WindowKind`], [`SawtoothSlant`] - closed
//!   kind enumerations with case-insensitive `FromStr` parsing at the host
//!   boundary
//! - [`EngineError`] - the single error taxonomy for the whole engine
//!
//! ```rust
//! use ondas_core::{SignalConfig, Waveform};
//!
//! let config = SignalConfig::default();
//! assert_eq!(config.sample_count(), 100_000);
//!
//! let waveform: Waveform = "harmonic-square".parse().unwrap();
//! assert_eq!(waveform, Waveform::HarmonicSquare);
//! ```

pub mod config;
pub mod error;
pub mod kinds;

pub use config::SignalConfig;
pub use error::EngineError;
pub use kinds::{NoiseKind, SawtoothSlant, Waveform, WindowKind};
