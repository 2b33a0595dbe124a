//! Low-level per-sample DSP primitives.
//!
//! Everything here is allocation-free after construction and realtime-safe,
//! so these can be called once per sample from the audio callback. The graph
//! layer wraps them into block-rendering effects and sources.

/// Normalized float <-> 32-bit fixed-point conversion.
pub mod convert;
/// Circular sample buffer with fractional-delay reads.
pub mod delay;
/// Interpolation, pot range mapping and soft limiting.
pub mod shape;
/// Quarter-wave sine table generation and validation.
pub mod table;
/// Fast table-based sine/cosine.
pub mod trig;
