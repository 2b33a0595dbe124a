use crate::dsp::delay::DelayLine;
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Feedback Echo
=============

Classic tape-style echo: the delayed signal is fed back into the line so
each repeat is a quieter copy of the last.

    delayed = line.read(time - 1)
    line.write(input + delayed * feedback)
    output  = input * (1 - mix) + delayed * mix

The read happens before this sample's write, so it looks one sample less
far back to land exactly `time` samples behind the input.

Time is fractional and read through the interpolated delay line, so
sweeping it bends the pitch of the repeats like a tape machine instead of
clicking between whole samples.

Parameters
----------

Time (ms):      distance between repeats, capped at the line capacity
Feedback:       0.0 = single repeat, 0.95 = long decaying tail
Mix:            dry/wet blend

Example usage:
  let slapback = SineOsc::new().through(EchoNode::new(120.0, 0.2, 0.4));
*/

/// Feedback is capped below 1.0 so repeats always decay.
pub const MAX_FEEDBACK: f32 = 0.95;

/// Parameters that can be modulated
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub enum EchoParam {
    /// Delay time in ms
    Time,
    /// Feedback amount
    Feedback,
    /// Dry/wet mix
    Mix,
}

pub struct EchoNode {
    delay_line: DelayLine,
    time_ms: f32,
    feedback: f32,
    mix: f32,
}

impl EchoNode {
    /// Create a new echo.
    ///
    /// - `time_ms`: distance between repeats in milliseconds
    /// - `feedback`: 0.0 - 0.95
    /// - `mix`: 0.0 = dry, 1.0 = wet
    pub fn new(time_ms: f32, feedback: f32, mix: f32) -> Self {
        Self {
            delay_line: DelayLine::new(),
            time_ms: time_ms.max(0.0),
            feedback: feedback.clamp(0.0, MAX_FEEDBACK),
            mix: mix.clamp(0.0, 1.0),
        }
    }

    #[inline]
    fn delay_samples(&self, ctx: &RenderCtx) -> f32 {
        let max = (self.delay_line.capacity() - 1) as f32;
        (ctx.ms_to_samples(self.time_ms) - 1.0).clamp(0.0, max)
    }
}

impl GraphNode for EchoNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let delay = self.delay_samples(ctx);

        for sample in out.iter_mut() {
            let dry = *sample;
            let delayed = self.delay_line.read(delay);
            self.delay_line.write(dry + delayed * self.feedback);
            *sample = dry * (1.0 - self.mix) + delayed * self.mix;
        }
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        // Clear buffer here to avoid stale repeats from the previous note
        self.delay_line.reset();
    }
}

impl Modulatable for EchoNode {
    type Param = EchoParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            EchoParam::Time => self.time_ms,
            EchoParam::Feedback => self.feedback,
            EchoParam::Mix => self.mix,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        match param {
            EchoParam::Time => {
                self.time_ms = (base + modulation).max(0.0);
            }
            EchoParam::Feedback => {
                self.feedback = (base + modulation).clamp(0.0, MAX_FEEDBACK);
            }
            EchoParam::Mix => {
                self.mix = (base + modulation).clamp(0.0, 1.0);
            }
        }
    }
}
