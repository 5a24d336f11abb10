//! Closed enumerations for waveform, noise, and window selection.
//!
//! Names arriving from a host UI are parsed exactly once at this boundary
//! (case-insensitive `FromStr`); everything past it dispatches on the enum.
//! An unknown name fails with [`EngineError::UnsupportedKind`] naming both
//! the rejected input and the full supported set - there is no silent
//! fallback to a default.

use core::fmt;
use core::str::FromStr;

use crate::error::EngineError;

fn supported_list(names: &[&'static str]) -> String {
    names.join(", ")
}

/// Base waveform families the synthesizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// Pure sine tone.
    #[default]
    Sine,
    /// Duty-cycle pulse wave.
    Square,
    /// Ramp wave, slant controlled by [`SawtoothSlant`].
    Sawtooth,
    /// Symmetric triangle (sawtooth family at width 0.5).
    Triangle,
    /// Square approximated by a finite odd-harmonic sine series.
    HarmonicSquare,
    /// Triangle approximated by a finite odd-harmonic sine series.
    HarmonicTriangle,
}

impl Waveform {
    /// All supported waveforms.
    pub const ALL: [Waveform; 6] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
        Waveform::HarmonicSquare,
        Waveform::HarmonicTriangle,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
            Waveform::HarmonicSquare => "harmonic-square",
            Waveform::HarmonicTriangle => "harmonic-triangle",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Waveform::ALL
            .into_iter()
            .find(|w| w.name() == lower)
            .ok_or_else(|| {
                EngineError::unsupported_kind(
                    "waveform",
                    s,
                    supported_list(&Waveform::ALL.map(Waveform::name)),
                )
            })
    }
}

/// Slant direction for the sawtooth waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SawtoothSlant {
    /// Ramp up, then drop (the standard sawtooth).
    #[default]
    Left,
    /// Mirror image: drop, then ramp up.
    Right,
}

impl SawtoothSlant {
    /// Both slants.
    pub const ALL: [SawtoothSlant; 2] = [SawtoothSlant::Left, SawtoothSlant::Right];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            SawtoothSlant::Left => "left",
            SawtoothSlant::Right => "right",
        }
    }
}

impl fmt::Display for SawtoothSlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SawtoothSlant {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        SawtoothSlant::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| {
                EngineError::unsupported_kind(
                    "sawtooth slant",
                    s,
                    supported_list(&SawtoothSlant::ALL.map(SawtoothSlant::name)),
                )
            })
    }
}

/// Noise models the noise source can inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseKind {
    /// Uniform samples in `[0, magnitude)`.
    #[default]
    White,
    /// 1/f noise. Declared but not implemented; generation fails loudly.
    Pink,
    /// Running sum of uniform samples (random walk).
    Brown,
}

impl NoiseKind {
    /// All supported noise kinds.
    pub const ALL: [NoiseKind; 3] = [NoiseKind::White, NoiseKind::Pink, NoiseKind::Brown];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            NoiseKind::White => "white",
            NoiseKind::Pink => "pink",
            NoiseKind::Brown => "brown",
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoiseKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        NoiseKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| {
                EngineError::unsupported_kind(
                    "noise",
                    s,
                    supported_list(&NoiseKind::ALL.map(NoiseKind::name)),
                )
            })
    }
}

/// Analysis windows the window library can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowKind {
    /// Triangular window with zero endpoints.
    Bartlett,
    /// Classic 3-term Blackman.
    Blackman,
    /// 4-term Blackman-Harris.
    BlackmanHarris4,
    /// Custom 7-term Blackman-Harris (fixed coefficient vector).
    BlackmanHarris7,
    /// Rectangular window (all ones).
    #[default]
    Boxcar,
    /// Flat-top window for accurate amplitude readout.
    FlatTop,
    /// Hamming window.
    Hamming,
    /// Hann (raised cosine) window.
    Hann,
    /// Parzen (piecewise cubic) window.
    Parzen,
    /// Triangular window with non-zero endpoints.
    Triangular,
    /// Tukey (tapered cosine) window, taper fraction 0.5.
    Tukey,
}

impl WindowKind {
    /// All supported windows.
    pub const ALL: [WindowKind; 11] = [
        WindowKind::Bartlett,
        WindowKind::Blackman,
        WindowKind::BlackmanHarris4,
        WindowKind::BlackmanHarris7,
        WindowKind::Boxcar,
        WindowKind::FlatTop,
        WindowKind::Hamming,
        WindowKind::Hann,
        WindowKind::Parzen,
        WindowKind::Triangular,
        WindowKind::Tukey,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            WindowKind::Bartlett => "bartlett",
            WindowKind::Blackman => "blackman",
            WindowKind::BlackmanHarris4 => "blackmanharris4",
            WindowKind::BlackmanHarris7 => "blackmanharris7",
            WindowKind::Boxcar => "boxcar",
            WindowKind::FlatTop => "flattop",
            WindowKind::Hamming => "hamming",
            WindowKind::Hann => "hann",
            WindowKind::Parzen => "parzen",
            WindowKind::Triangular => "triangular",
            WindowKind::Tukey => "tukey",
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        // "hanning" survives as an alias for callers migrating from scipy
        // naming; everything else must match a canonical name.
        if lower == "hanning" {
            return Ok(WindowKind::Hann);
        }
        WindowKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| {
                EngineError::unsupported_kind(
                    "window",
                    s,
                    supported_list(&WindowKind::ALL.map(WindowKind::name)),
                )
            })
    }
}
