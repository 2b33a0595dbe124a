//! Precision and distortion report
//!
//! For each table resolution, sweeps the phase and compares against the
//! f64 reference, then renders a bin-centred tone and measures everything
//! that isn't the fundamental with an FFT.

use std::sync::Arc;

use color_eyre::eyre::Result as EyreResult;
use rustfft::{num_complex::Complex, Fft, FftPlanner};

use quarterwave_dsp::graph::{GraphNode, RenderCtx, SineOsc};
use quarterwave_dsp::{FastTrig, QuarterSineTable, QUARTER_SINE_STEP_SHIFT};

const SWEEP_POINTS: usize = 100_000;
const FFT_LEN: usize = 1 << 16;
const SAMPLE_RATE: f32 = 48_000.0;
/// Fundamental lands exactly on this bin, so no window is needed
const FUNDAMENTAL_BIN: usize = 1365; // ~1 kHz

pub fn run(max_shift: u32) -> EyreResult<()> {
    println!("=== Quarter-wave sin/cos ===");
    println!("Phase sweep: {} points, FFT: {} samples", SWEEP_POINTS, FFT_LEN);
    println!();
    println!(
        "{:>6} {:>8} {:>12} {:>8} {:>10}",
        "steps", "entries", "max error", "digits", "THD+N dB"
    );

    let mut planner = FftPlanner::new();
    for shift in 2..=max_shift {
        let trig = FastTrig::with_table(QuarterSineTable::generate(shift)?);
        let error = max_error(&trig);
        let thd = thd_db(trig, &mut planner);

        let marker = if shift == QUARTER_SINE_STEP_SHIFT { "  (default)" } else { "" };
        println!(
            "{:>6} {:>8} {:>12.3e} {:>8.2} {:>10.1}{}",
            1usize << shift,
            (1usize << shift) + 1,
            error,
            -error.log10(),
            thd,
            marker
        );
    }

    Ok(())
}

/// Worst absolute error of sin and cos over one cycle.
fn max_error(trig: &FastTrig) -> f64 {
    (0..SWEEP_POINTS)
        .map(|i| {
            let phase = i as f32 / SWEEP_POINTS as f32;
            let (sin, cos) = (phase as f64 * std::f64::consts::TAU).sin_cos();
            let out = trig.evaluate(phase);
            (out.sin as f64 - sin).abs().max((out.cos as f64 - cos).abs())
        })
        .fold(0.0, f64::max)
}

/// Power outside the fundamental relative to the fundamental, in dB.
fn thd_db(trig: FastTrig, planner: &mut FftPlanner<f32>) -> f64 {
    let frequency = FUNDAMENTAL_BIN as f32 * SAMPLE_RATE / FFT_LEN as f32;
    let ctx = RenderCtx::from_freq(SAMPLE_RATE, frequency, 100.0);

    let mut osc = SineOsc::with_trig(trig);
    let mut samples = vec![0.0f32; FFT_LEN];
    osc.render_block(&mut samples, &ctx);

    let mut spectrum: Vec<Complex<f32>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    let fft: Arc<dyn Fft<f32>> = planner.plan_fft_forward(FFT_LEN);
    fft.process(&mut spectrum);

    let mut fundamental = 0.0f64;
    let mut rest = 0.0f64;
    for (bin, c) in spectrum.iter().enumerate().take(FFT_LEN / 2).skip(1) {
        let power = (c.re as f64).powi(2) + (c.im as f64).powi(2);
        if bin == FUNDAMENTAL_BIN {
            fundamental = power;
        } else {
            rest += power;
        }
    }

    10.0 * (rest.max(1e-30) / fundamental.max(1e-30)).log10()
}
