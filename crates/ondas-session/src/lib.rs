//! Ondas Session - orchestration of the ondas signal engine
//!
//! This crate is the programmatic boundary a visualization front end talks
//! to. It owns the one live parameter set and sequences the pipeline:
//!
//! 1. parameter updates arrive through named setters on [`SignalSession`]
//! 2. [`SignalSession::generate`] synthesizes the time-domain signal
//!    (ondas-synth) and computes its calibrated single-sided spectrum
//!    (ondas-analysis)
//! 3. the front end pulls immutable result snapshots through read-only
//!    accessors
//!
//! ```rust
//! use ondas_core::{Waveform, WindowKind};
//! use ondas_session::SignalSession;
//!
//! let mut session = SignalSession::with_seed(42);
//! session.set_waveform(Waveform::HarmonicSquare);
//! session.set_harmonics(9).unwrap();
//! session.set_window(WindowKind::BlackmanHarris7, true);
//! session.generate().unwrap();
//!
//! assert_eq!(session.signal_data().len(), session.time_axis().len());
//! assert!(!session.magnitude_db().is_empty());
//! ```
//!
//! Sessions are single-threaded; a host wanting several concurrent plots
//! creates one independent session per plot.

pub mod session;

pub use session::SignalSession;

// Re-export the vocabulary types callers need alongside the session.
pub use ondas_analysis::{Spectrum, WindowMetrics};
pub use ondas_core::{
    EngineError, NoiseKind, SawtoothSlant, SignalConfig, Waveform, WindowKind,
};
