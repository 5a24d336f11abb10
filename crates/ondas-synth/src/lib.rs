//! Ondas Synth - time-domain signal synthesis
//!
//! Produces the periodic test signals the ondas engine analyzes:
//!
//! - [`Synthesizer`] - evaluates a [`Waveform`](ondas_core::Waveform) over
//!   the time span described by a [`SignalConfig`](ondas_core::SignalConfig),
//!   either from a closed form (sine, duty-cycle pulse, sawtooth family) or
//!   by summing a finite Fourier sine series (harmonic-constructed square
//!   and triangle)
//! - [`NoiseSource`] - white and brown noise sequences, seedable for
//!   deterministic tests; pink noise is declared but fails loudly
//! - [`TimeSeries`] - a synthesized signal paired 1:1 with its time axis
//!
//! ```rust
//! use ondas_core::{SignalConfig, Waveform};
//! use ondas_synth::Synthesizer;
//!
//! let config = SignalConfig::default();
//! let mut synth = Synthesizer::with_seed(42);
//! let series = synth.synthesize(&config, Waveform::Sine).unwrap();
//! assert_eq!(series.samples.len(), config.sample_count());
//! ```

pub mod noise;
pub mod waveform;

pub use noise::NoiseSource;
pub use waveform::{Synthesizer, TimeSeries};
