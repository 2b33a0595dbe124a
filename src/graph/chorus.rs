use crate::dsp::delay::DelayLine;
use crate::dsp::trig::FastTrig;
use crate::graph::node::{GraphNode, Modulatable, RenderCtx};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Chorus
======

A short delay whose length is swept by a slow sine. As the delay stretches
and shrinks the copy is pitched slightly flat and sharp; mixed with the dry
signal it sounds like several detuned voices.

    lfo    = sin(lfo_phase)                  fast table lookup
    delay  = base + lfo * depth              ms, converted to samples
    wet    = line.read(delay)                fractional, interpolated
    output = dry * (1 - mix) + wet * mix

The delay is almost never a whole number of samples, which is exactly what
the interpolated read exists for.

The LFO phase runs in cycles and wraps at 1.0 so the table lookup always
sees a small, non-negative phase.

Parameters
----------

Rate:        LFO speed, 0.1 - 10 Hz. 0.5 - 1.5 Hz is the classic shimmer.
Depth:       sweep in ms either side of the base delay, 0.5 - 10.
Mix:         dry/wet blend.
Base delay:  centre of the sweep, 5 - 50 ms (default 20).

Example usage:
  let wide = SineOsc::new().through(ChorusNode::new(0.8, 2.0, 0.4));
*/

const DEFAULT_BASE_DELAY_MS: f32 = 20.0;

/// Parameters that can be modulated
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub enum ChorusParam {
    /// LFO rate in Hz
    Rate,
    /// Modulation depth in ms
    Depth,
    /// Dry/wet mix
    Mix,
}

/// Chorus effect - thickens sound with a swept fractional delay
pub struct ChorusNode {
    delay_line: DelayLine,
    trig: FastTrig,
    lfo_phase: f32, // cycles, [0, 1)
    rate: f32,
    depth_ms: f32,
    mix: f32,
    base_delay_ms: f32,
}

impl ChorusNode {
    /// Create a new chorus effect.
    ///
    /// - `rate`: LFO speed in Hz
    /// - `depth_ms`: sweep either side of the base delay
    /// - `mix`: 0.0 = dry, 1.0 = wet
    pub fn new(rate: f32, depth_ms: f32, mix: f32) -> Self {
        Self {
            delay_line: DelayLine::new(),
            trig: FastTrig::new(),
            lfo_phase: 0.0,
            rate: rate.clamp(0.1, 10.0),
            depth_ms: depth_ms.clamp(0.5, 10.0),
            mix: mix.clamp(0.0, 1.0),
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
        }
    }

    /// Set the centre of the sweep (default 20ms).
    pub fn with_base_delay(mut self, ms: f32) -> Self {
        self.base_delay_ms = ms.clamp(5.0, 50.0);
        self
    }
}

impl GraphNode for ChorusNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        let phase_inc = self.rate / ctx.sample_rate;

        for sample in out.iter_mut() {
            let lfo = self.trig.sin(self.lfo_phase);
            let delay_ms = self.base_delay_ms + lfo * self.depth_ms;
            let delay = ctx.ms_to_samples(delay_ms).max(1.0);

            let wet = self.delay_line.read(delay);
            self.delay_line.write(*sample);

            *sample = *sample * (1.0 - self.mix) + wet * self.mix;

            self.lfo_phase += phase_inc;
            if self.lfo_phase >= 1.0 {
                self.lfo_phase -= 1.0;
            }
        }
    }
}

impl Modulatable for ChorusNode {
    type Param = ChorusParam;

    fn get_param(&self, param: Self::Param) -> f32 {
        match param {
            ChorusParam::Rate => self.rate,
            ChorusParam::Depth => self.depth_ms,
            ChorusParam::Mix => self.mix,
        }
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f32, modulation: f32) {
        match param {
            ChorusParam::Rate => {
                self.rate = (base + modulation).clamp(0.1, 10.0);
            }
            ChorusParam::Depth => {
                self.depth_ms = (base + modulation).clamp(0.5, 10.0);
            }
            ChorusParam::Mix => {
                self.mix = (base + modulation).clamp(0.0, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> RenderCtx {
        RenderCtx::from_note(48000.0, 60, 100.0)
    }

    #[test]
    fn test_dry_chorus_preserves_signal() {
        let mut node = ChorusNode::new(1.0, 3.0, 0.0);
        let mut buffer: Vec<f32> = (0..256).map(|i| (i as f32 * 0.05).sin()).collect();
        let original = buffer.clone();

        node.render_block(&mut buffer, &test_ctx());

        assert_eq!(buffer, original);
    }

    #[test]
    fn test_wet_chorus_is_delayed() {
        let mut node = ChorusNode::new(1.0, 3.0, 1.0);
        let mut buffer = vec![0.5; 256];

        node.render_block(&mut buffer, &test_ctx());

        // Shortest sweep point is 17ms = 816 samples, so nothing has arrived yet
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_wet_chorus_settles_on_dc() {
        let mut node = ChorusNode::new(2.0, 5.0, 1.0);
        // Longest sweep point is 25ms = 1200 samples
        let mut warmup = vec![0.5; 2048];
        node.render_block(&mut warmup, &test_ctx());

        let mut buffer = vec![0.5; 512];
        node.render_block(&mut buffer, &test_ctx());

        for sample in &buffer {
            assert!((sample - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_chorus_output_bounded() {
        let mut node = ChorusNode::new(2.0, 5.0, 0.5);
        let mut buffer: Vec<f32> = (0..4096).map(|i| (i as f32 * 0.1).sin()).collect();

        node.render_block(&mut buffer, &test_ctx());

        for sample in &buffer {
            assert!(sample.abs() <= 1.0);
        }
    }

    #[test]
    fn test_params_clamped() {
        let mut node = ChorusNode::new(50.0, 0.0, 2.0);
        assert_eq!(node.get_param(ChorusParam::Rate), 10.0);
        assert_eq!(node.get_param(ChorusParam::Depth), 0.5);
        assert_eq!(node.get_param(ChorusParam::Mix), 1.0);

        node.apply_modulation(ChorusParam::Depth, 3.0, 1.0);
        assert_eq!(node.get_param(ChorusParam::Depth), 4.0);
    }
}
