use crate::dsp::trig::{FastTrig, SinCos};
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Quadrature Sine Oscillator
==========================

A phase accumulator driving the quarter-wave table. Each sample:

    (sin, cos) = trig.evaluate(phase)
    phase     += frequency / sample_rate      (wrapped into [0, 1))

The table hands back sine and cosine together, so the oscillator gets a
quadrature pair for free. `render_block` writes the sine; callers that
need both (frequency shifters, stereo rotation, single-sideband tricks)
use `render_quadrature`.

Keeping phase in [0, 1) matters: the table lookup loses fraction bits as
phase grows, so an unbounded accumulator would slowly detune.

Example usage:
  let osc = SineOsc::new();                     // Tracks note pitch
  let lfo = SineOsc::new().with_frequency(0.5); // Fixed 0.5 Hz
*/

/// Parameters that can be modulated on an oscillator
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub enum OscParam {
    /// Oscillator frequency in Hz
    Frequency,
}

pub struct SineOsc {
    trig: FastTrig,
    /// Phase in cycles, always in [0, 1)
    phase: f32,
    /// Fixed frequency (Hz). If Some, ignores ctx.frequency.
    base_frequency: Option<f32>,
    /// Current frequency after modulation (only used when base_frequency is Some)
    current_frequency: f32,
    last: SinCos,
}

impl SineOsc {
    pub fn new() -> Self {
        Self::with_trig(FastTrig::new())
    }

    /// Use a specific evaluator, e.g. one built from an external table.
    pub fn with_trig(trig: FastTrig) -> Self {
        Self {
            trig,
            phase: 0.0,
            base_frequency: None,
            current_frequency: 440.0,
            last: SinCos { sin: 0.0, cos: 1.0 },
        }
    }

    /// Set a fixed frequency, ignoring the note pitch from RenderCtx.
    pub fn with_frequency(mut self, freq: f32) -> Self {
        self.base_frequency = Some(freq);
        self.current_frequency = freq;
        self
    }

    /// Start at `phase` cycles instead of 0.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase.rem_euclid(1.0);
        self
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// The most recently rendered (sin, cos) pair.
    pub fn last(&self) -> SinCos {
        self.last
    }

    #[inline]
    fn frequency(&self, ctx: &RenderCtx) -> f32 {
        if self.base_frequency.is_some() {
            self.current_frequency
        } else {
            ctx.frequency
        }
    }

    #[inline]
    fn tick(&mut self, increment: f32) -> SinCos {
        self.last = self.trig.evaluate(self.phase);
        self.phase += increment;
        if self.phase >= 1.0 {
            self.phase -= self.phase.floor();
        }
        self.last
    }

    /// Render sine into `sin_out` and cosine into `cos_out`.
    pub fn render_quadrature(&mut self, sin_out: &mut [f32], cos_out: &mut [f32], ctx: &RenderCtx) {
        debug_assert_eq!(sin_out.len(), cos_out.len());

        let increment = self.frequency(ctx) / ctx.sample_rate;
        for (s, c) in sin_out.iter_mut().zip(cos_out.iter_mut()) {
            let SinCos { sin, cos } = self.tick(increment);
            *s = sin;
            *c = cos;
        }
    }
}

impl Default for SineOsc {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphNode for SineOsc {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let increment = self.frequency(ctx) / ctx.sample_rate;
        for sample in out.iter_mut() {
            *sample = self.tick(increment).sin;
        }
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.phase = 0.0;
        if let Some(base) = self.base_frequency {
            self.current_frequency = base;
        }
    }
}

impl Modulatable for SineOsc {
    type Param = OscParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            OscParam::Frequency => self.base_frequency.unwrap_or(440.0),
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        match param {
            OscParam::Frequency => {
                // LFO rates go well below audio range, so only guard against zero/negative
                self.current_frequency = (base + modulation).clamp(0.01, 20_000.0);
            }
        }
    }
}
