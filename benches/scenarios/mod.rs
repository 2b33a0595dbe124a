//! Effect chains as an instrument would run them.

mod chains;

pub use chains::bench_chains;
