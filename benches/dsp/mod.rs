//! Benchmarks for low-level DSP primitives.

mod delay;
mod trig;

pub use delay::bench_delay;
pub use trig::bench_trig;
