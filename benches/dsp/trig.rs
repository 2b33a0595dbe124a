//! Fast table sin/cos against the std transcendental functions.

use std::f32::consts::TAU;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use quarterwave_dsp::dsp::trig::FastTrig;

use crate::BLOCK_SIZES;

pub fn bench_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/trig");
    let trig = FastTrig::new();

    for &size in BLOCK_SIZES {
        let phases: Vec<f32> = (0..size).map(|i| i as f32 / size as f32).collect();

        // Table lookup, both outputs
        group.bench_with_input(BenchmarkId::new("fast_sincos", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &phase in &phases {
                    let sc = trig.evaluate(black_box(phase));
                    acc += sc.sin + sc.cos;
                }
                acc
            })
        });

        // Baseline: std sin_cos
        group.bench_with_input(BenchmarkId::new("std_sin_cos", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for &phase in &phases {
                    let (s, c) = (black_box(phase) * TAU).sin_cos();
                    acc += s + c;
                }
                acc
            })
        });
    }

    group.finish();
}
