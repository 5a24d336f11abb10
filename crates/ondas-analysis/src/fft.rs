//! Thin wrapper over rustfft for real-input forward transforms.

use std::sync::Arc;

use rustfft::{FftPlanner, num_complex::Complex};

/// Forward FFT processor for a fixed transform size.
pub struct Fft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl Fft {
    /// Plan a forward FFT of the given size.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Self { fft, size }
    }

    /// Transform size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward FFT of a real signal, returning the full two-sided complex
    /// spectrum. Input shorter than the transform size is zero-padded;
    /// longer input is truncated.
    pub fn forward(&self, input: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> =
            input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));
        self.fft.process(&mut buffer);
        buffer
    }
}
