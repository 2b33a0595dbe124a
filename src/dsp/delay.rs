//! Fixed-capacity circular sample buffer with fractional-delay reads.

/*
Interpolated Delay Line
=======================

The delay line keeps the last SAMPLE_ARRAY_SIZE samples in a ring. A write
cursor only ever moves forward; the physical slot is the cursor masked with
SAMPLE_ARRAY_MASK, which is why the capacity must be a power of two.

    write(x):   cursor += 1
                buffer[cursor & mask] = x

After a write, `buffer[cursor & mask]` is always the newest sample. Nothing
is ever evicted: a slot is simply overwritten SAMPLE_ARRAY_SIZE writes later.


Reading Back In Time
--------------------

`read(delay)` looks `delay` samples behind the newest one. The delay can be
fractional, so we split it:

    i    = floor(delay)          whole samples back
    frac = delay - i             blend weight, 0.0 <= frac < 1.0

    a = sample i   steps back
    b = sample i+1 steps back
    out = a + (b - a) * frac

For delay = 2.25:

    newest                       older
      |                            |
      v                            v
    [ x0 ][ x1 ][ x2 ][ x3 ][ x4 ] ...
                  a     b
                  |--.--|
                   0.25

At integer delays frac is 0.0 and the stored sample comes back exactly.
Modulating the delay smoothly (chorus, flanger, vibrato) glides between
neighbours instead of stepping, which avoids zipper noise.


Preconditions
-------------

  delay >= 0          checked with debug_assert only
  delay < capacity    not checked; larger delays alias onto stale samples

Neither is checked in release builds: this runs once per sample.
*/

use crate::dsp::shape::lerp;
use crate::{SAMPLE_ARRAY_MASK, SAMPLE_ARRAY_SIZE};

pub struct DelayLine {
    buffer: Vec<f32>,
    write_index: usize,
}

impl DelayLine {
    /// Allocate a silent delay line. This is the only allocation it ever makes.
    pub fn new() -> Self {
        Self {
            buffer: vec![0.0; SAMPLE_ARRAY_SIZE],
            write_index: 0,
        }
    }

    /// Number of samples of history the line can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        SAMPLE_ARRAY_SIZE
    }

    /// Advance the cursor and store `sample` as the newest entry.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.write_index = self.write_index.wrapping_add(1);
        self.buffer[self.write_index & SAMPLE_ARRAY_MASK] = sample;
    }

    /// Read `delay` samples behind the newest write, linearly interpolated.
    ///
    /// `delay` must be non-negative and should stay below [`capacity`](Self::capacity).
    #[inline]
    pub fn read(&self, delay: f32) -> f32 {
        debug_assert!(delay >= 0.0, "negative delay: {delay}");

        let i = delay as usize;
        let frac = delay - i as f32;
        let idx = self.write_index.wrapping_sub(i);

        let a = self.buffer[idx & SAMPLE_ARRAY_MASK];
        let b = self.buffer[idx.wrapping_sub(1) & SAMPLE_ARRAY_MASK];
        lerp(a, b, frac)
    }

    /// Write `sample`, then read `delay` samples back.
    ///
    /// A delay of 0.0 returns `sample` itself.
    #[inline]
    pub fn process(&mut self, sample: f32, delay: f32) -> f32 {
        self.write(sample);
        self.read(delay)
    }

    pub fn render(&mut self, buffer: &mut [f32], delay: f32) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample, delay);
        }
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_index = 0;
    }
}

impl Default for DelayLine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_silent() {
        let line = DelayLine::new();
        assert_eq!(line.read(0.0), 0.0);
        assert_eq!(line.read(1234.5), 0.0);
    }

    #[test]
    fn test_integer_delay_is_exact() {
        let mut line = DelayLine::new();
        for i in 0..100 {
            line.write(i as f32);
        }

        assert_eq!(line.read(0.0), 99.0);
        assert_eq!(line.read(1.0), 98.0);
        assert_eq!(line.read(42.0), 57.0);
    }

    #[test]
    fn test_fractional_delay_blends_neighbours() {
        let mut line = DelayLine::new();
        line.write(0.0);
        line.write(4.0);

        // 0.25 of the way from the newest (4.0) to the one before it (0.0)
        let out = line.read(0.25);
        assert!((out - 3.0).abs() < 1e-6, "expected 3.0, got {out}");
    }

    #[test]
    fn test_oldest_sample_is_overwritten() {
        let mut line = DelayLine::new();
        line.write(1.0);
        for _ in 0..SAMPLE_ARRAY_SIZE {
            line.write(0.5);
        }

        for d in [0.0, 100.0, (SAMPLE_ARRAY_SIZE - 1) as f32] {
            assert_eq!(line.read(d), 0.5);
        }
    }

    #[test]
    fn test_process_zero_delay_passes_through() {
        let mut line = DelayLine::new();
        assert_eq!(line.process(0.7, 0.0), 0.7);
        assert_eq!(line.process(-0.2, 0.0), -0.2);
    }

    #[test]
    fn test_render_delays_block() {
        let mut line = DelayLine::new();
        let mut buffer = [1.0, 2.0, 3.0, 4.0, 5.0];

        line.render(&mut buffer, 2.0);

        assert_eq!(buffer, [0.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut line = DelayLine::new();
        for _ in 0..16 {
            line.write(1.0);
        }
        line.reset();

        for d in 0..16 {
            assert_eq!(line.read(d as f32), 0.0);
        }
    }
}
