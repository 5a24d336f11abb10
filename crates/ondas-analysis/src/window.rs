//! Analysis window generation and window compensation metrics.
//!
//! All windows are generated in their periodic (DFT-even) form: the
//! symmetric window of length `N + 1` with the last sample dropped, which
//! is the right shape for spectral analysis of an N-point frame.

use std::f64::consts::PI;

use ondas_core::WindowKind;

/// Coefficients of the custom 7-term Blackman-Harris window,
/// `w[n] = Σ_k a_k · cos(2πkn/N)`. This exact vector defines the window;
/// it is not an approximation of anything else.
const BLACKMAN_HARRIS_7: [f64; 7] = [
    0.27105140069342,
    -0.43329793923448,
    0.21812299954311,
    -0.06592544638803,
    0.01081174209837,
    -0.00077658482522,
    0.00001388721735,
];

/// 4-term Blackman-Harris coefficients (signs folded in).
const BLACKMAN_HARRIS_4: [f64; 4] = [0.35875, -0.48829, 0.14128, -0.01168];

/// Flat-top coefficients (signs folded in).
const FLAT_TOP: [f64; 5] = [
    0.21557895,
    -0.41663158,
    0.277263158,
    -0.083578947,
    0.006947368,
];

/// Taper fraction of the Tukey window.
const TUKEY_ALPHA: f64 = 0.5;

/// Generate `len` samples of the named window.
pub fn generate(kind: WindowKind, len: usize) -> Vec<f64> {
    match kind {
        WindowKind::Boxcar => vec![1.0; len],
        WindowKind::Hann => cosine_sum(len, &[0.5, -0.5]),
        WindowKind::Hamming => cosine_sum(len, &[0.54, -0.46]),
        WindowKind::Blackman => cosine_sum(len, &[0.42, -0.5, 0.08]),
        WindowKind::BlackmanHarris4 => cosine_sum(len, &BLACKMAN_HARRIS_4),
        WindowKind::BlackmanHarris7 => cosine_sum(len, &BLACKMAN_HARRIS_7),
        WindowKind::FlatTop => cosine_sum(len, &FLAT_TOP),
        WindowKind::Bartlett => bartlett(len),
        WindowKind::Triangular => truncated(triang_symmetric(len + 1)),
        WindowKind::Parzen => truncated(parzen_symmetric(len + 1)),
        WindowKind::Tukey => truncated(tukey_symmetric(len + 1, TUKEY_ALPHA)),
    }
}

/// Generalized cosine window: `w[n] = Σ_k a_k · cos(2πkn/len)`.
///
/// With the denominator `len` (not `len - 1`) this is already the periodic
/// form.
fn cosine_sum(len: usize, coeffs: &[f64]) -> Vec<f64> {
    (0..len)
        .map(|n| {
            coeffs
                .iter()
                .enumerate()
                .map(|(k, &a)| a * (2.0 * PI * k as f64 * n as f64 / len as f64).cos())
                .sum()
        })
        .collect()
}

/// Periodic Bartlett window: zero at the left endpoint, unity at `len/2`.
fn bartlett(len: usize) -> Vec<f64> {
    (0..len)
        .map(|n| 1.0 - (2.0 * n as f64 / len as f64 - 1.0).abs())
        .collect()
}

/// Symmetric triangular window with non-zero endpoints, length `m`.
fn triang_symmetric(m: usize) -> Vec<f64> {
    let half = (m + 1) / 2;
    let mut w: Vec<f64> = if m % 2 == 0 {
        (1..=half).map(|n| (2 * n - 1) as f64 / m as f64).collect()
    } else {
        (1..=half).map(|n| 2.0 * n as f64 / (m + 1) as f64).collect()
    };
    let mirror_from = if m % 2 == 0 { half } else { half - 1 };
    for i in (0..mirror_from).rev() {
        let v = w[i];
        w.push(v);
    }
    w
}

/// Symmetric Parzen window (piecewise cubic), length `m`.
fn parzen_symmetric(m: usize) -> Vec<f64> {
    let center = (m - 1) as f64 / 2.0;
    let half = m as f64 / 2.0;
    (0..m)
        .map(|n| {
            let x = (n as f64 - center).abs();
            let r = x / half;
            if x <= m as f64 / 4.0 {
                1.0 - 6.0 * r * r * (1.0 - r)
            } else {
                2.0 * (1.0 - r).powi(3)
            }
        })
        .collect()
}

/// Symmetric Tukey (tapered cosine) window, length `m`.
fn tukey_symmetric(m: usize, alpha: f64) -> Vec<f64> {
    let span = (m - 1) as f64;
    let taper = alpha * span / 2.0;
    (0..m)
        .map(|n| {
            let n = n as f64;
            if n < taper {
                0.5 * (1.0 + (PI * (n / taper - 1.0)).cos())
            } else if n <= span - taper {
                1.0
            } else {
                0.5 * (1.0 + (PI * ((n - span + taper) / taper)).cos())
            }
        })
        .collect()
}

/// Drop the duplicated last sample of a symmetric window, making it
/// periodic.
fn truncated(mut symmetric: Vec<f64>) -> Vec<f64> {
    symmetric.pop();
    symmetric
}

/// Window compensation scalars derived from a window sequence.
///
/// Used to calibrate windowed spectra so tone amplitudes remain readable
/// after the window soaks up signal energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    /// Equivalent Noise Bandwidth: `N · Σw² / (Σw)²`.
    pub enbw: f64,
    /// Coherent Power Gain: `Σw / N`.
    pub cpg: f64,
}

impl WindowMetrics {
    /// Compute both metrics from a window sequence.
    pub fn from_window(window: &[f64]) -> Self {
        let n = window.len() as f64;
        let sum: f64 = window.iter().sum();
        let sum_sq: f64 = window.iter().map(|w| w * w).sum();
        WindowMetrics {
            enbw: n * sum_sq / (sum * sum),
            cpg: sum / n,
        }
    }

    /// Spectral scaling factor `1 / (CPG / sqrt(ENBW))` applied to windowed
    /// magnitudes.
    pub fn scaling_factor(&self) -> f64 {
        1.0 / (self.cpg / self.enbw.sqrt())
    }

    /// ENBW in dB: `10·log10(ENBW)`.
    pub fn enbw_db(&self) -> f64 {
        10.0 * self.enbw.log10()
    }

    /// CPG in dB: `20·log10(CPG)`.
    pub fn cpg_db(&self) -> f64 {
        20.0 * self.cpg.log10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxcar_metrics_are_exactly_unity() {
        for len in [4_usize, 33, 1024] {
            let metrics = WindowMetrics::from_window(&generate(WindowKind::Boxcar, len));
            assert_eq!(metrics.cpg, 1.0);
            assert_eq!(metrics.enbw, 1.0);
            assert_eq!(metrics.scaling_factor(), 1.0);
        }
    }

    #[test]
    fn hann_enbw_is_three_halves() {
        let metrics = WindowMetrics::from_window(&generate(WindowKind::Hann, 2048));
        assert!((metrics.enbw - 1.5).abs() < 1e-9);
        assert!((metrics.cpg - 0.5).abs() < 1e-9);
    }

    #[test]
    fn blackman_harris_7_shape() {
        let w = generate(WindowKind::BlackmanHarris7, 4096);
        // Coefficients sum to ~0 at the edges and ~1 at the center.
        assert!(w[0].abs() < 1e-6, "edge value {}", w[0]);
        assert!((w[2048] - 1.0).abs() < 1e-9, "center value {}", w[2048]);
        // First cosine term dominates: strictly positive away from edges.
        assert!(w[100] > 0.0);
    }

    #[test]
    fn blackman_harris_7_matches_the_coefficient_formula() {
        let len = 128;
        let w = generate(WindowKind::BlackmanHarris7, len);
        for (n, &sample) in w.iter().enumerate() {
            let expected: f64 = BLACKMAN_HARRIS_7
                .iter()
                .enumerate()
                .map(|(k, &a)| a * (2.0 * PI * k as f64 * n as f64 / len as f64).cos())
                .sum();
            assert_eq!(sample, expected);
        }
    }

    #[test]
    fn bartlett_touches_zero_triangular_does_not() {
        let bartlett = generate(WindowKind::Bartlett, 64);
        let triangular = generate(WindowKind::Triangular, 64);
        assert_eq!(bartlett[0], 0.0);
        assert!(triangular[0] > 0.0);
        assert!((bartlett[32] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tukey_has_a_flat_middle() {
        let w = generate(WindowKind::Tukey, 256);
        // With alpha = 0.5 the middle half of the window is exactly 1.
        for &x in &w[80..176] {
            assert_eq!(x, 1.0);
        }
        assert!(w[0] < 1e-12);
    }

    #[test]
    fn parzen_is_unity_at_center_and_small_at_edges() {
        let w = generate(WindowKind::Parzen, 512);
        assert!((w[256] - 1.0).abs() < 1e-9);
        assert!(w[0] < 1e-6);
    }

    #[test]
    fn all_windows_have_requested_length() {
        for kind in WindowKind::ALL {
            for len in [8_usize, 63, 64, 1000] {
                let w = generate(kind, len);
                assert_eq!(w.len(), len, "{kind} at len {len}");
                assert!(w.iter().all(|x| x.is_finite()), "{kind}");
            }
        }
    }

    #[test]
    fn flat_top_dips_negative_but_peaks_near_unity() {
        let w = generate(WindowKind::FlatTop, 1024);
        let min = w.iter().copied().fold(f64::MAX, f64::min);
        let max = w.iter().copied().fold(f64::MIN, f64::max);
        assert!(min < 0.0, "flat-top should dip negative, min {min}");
        assert!((max - 1.0).abs() < 1e-6, "peak {max}");
    }
}
