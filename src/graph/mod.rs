//! Block-rendering effects and sources built on the per-sample primitives.
//!
//! Graph nodes wrap the delay line and fast trig with what an instrument
//! needs around them: note events, parameter modulation and block-based
//! rendering. `extensions` adds `.through()` for chaining.

/// Swept fractional-delay chorus.
pub mod chorus;
/// Feedback echo on the interpolated delay line.
pub mod echo;
/// Fluent combinators (`.through()`).
pub mod extensions;
/// Core traits shared by all graph nodes.
pub mod node;
/// Quadrature sine oscillator on the quarter-wave table.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use chorus::{ChorusNode, ChorusParam};
pub use echo::{EchoNode, EchoParam};
pub use extensions::NodeExt;
pub use node::{GraphNode, Modulatable, RenderCtx};
pub use oscillator::{OscParam, SineOsc};
