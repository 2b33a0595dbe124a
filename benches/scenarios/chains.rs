//! Benchmarks for oscillator → effect chains.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use quarterwave_dsp::graph::{ChorusNode, EchoNode, GraphNode, NodeExt, RenderCtx, SineOsc};

use crate::BLOCK_SIZES;

pub fn bench_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/chains");
    let ctx = RenderCtx::from_freq(48_000.0, 1000.0, 100.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut osc = SineOsc::new();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                osc.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Chorus: one fast sin per sample plus a fractional read
        let mut chorused = SineOsc::new().through(ChorusNode::new(0.8, 2.0, 0.4));
        group.bench_with_input(BenchmarkId::new("sine_chorus", size), &size, |b, _| {
            b.iter(|| {
                chorused.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        let mut full = SineOsc::new()
            .through(ChorusNode::new(0.8, 2.0, 0.4))
            .through(EchoNode::new(250.0, 0.6, 0.35));
        full.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("sine_chorus_echo", size), &size, |b, _| {
            b.iter(|| {
                full.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
