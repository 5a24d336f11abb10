//! End-to-end session demo: synthesize a noisy harmonic square wave and
//! print the strongest spectral peaks.
//!
//! Run with: cargo run -p ondas-session --example session_demo
//! Set RUST_LOG=debug to see the session's tracing output.

use ondas_session::{NoiseKind, SignalSession, Waveform, WindowKind};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = SignalSession::with_seed(42);
    session.set_frequency(1_000.0)?;
    session.set_waveform(Waveform::HarmonicSquare);
    session.set_harmonics(9)?;
    session.set_noise(NoiseKind::White, 0.05, true)?;
    session.set_window(WindowKind::BlackmanHarris7, true);
    session.generate()?;

    println!(
        "generated {} samples at {} Hz ({} spectral bins)",
        session.signal_data().len(),
        session.sample_frequency_hz(),
        session.frequency_bins().len(),
    );
    if let Some(metrics) = session.window_metrics() {
        println!(
            "window: {} (ENBW {:.4}, CPG {:.4})",
            session.window_kind(),
            metrics.enbw,
            metrics.cpg,
        );
    }

    // Report the harmonics the series actually contains.
    let mut peaks: Vec<(f64, f64)> = session
        .frequency_bins()
        .iter()
        .zip(session.magnitude_db())
        .map(|(&f, &db)| (f, db))
        .collect();
    peaks.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    println!("strongest bins:");
    for (freq, db) in peaks.iter().take(9) {
        println!("  {freq:>8.1} Hz  {db:>7.2} dB");
    }

    Ok(())
}
