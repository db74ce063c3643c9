//! Optional exponential cursor smoothing.
//!
//! Raw tracker output jitters by a few pixels frame to frame; smoothing
//! trades that jitter for lag with the classic update
//! `current += (target − current) / factor`.  A factor of 1.0 passes the
//! target through unchanged.

/// Exponentially-smoothed 2D position, seeded on the first sample.
#[derive(Clone, Debug)]
pub struct CursorSmoother {
    factor: f32,
    current: Option<(f32, f32)>,
}

impl CursorSmoother {
    /// `factor` below 1.0 is clamped to 1.0 (no smoothing).
    pub fn new(factor: f32) -> Self {
        CursorSmoother {
            factor: if factor < 1.0 { 1.0 } else { factor },
            current: None,
        }
    }

    /// Feed one raw sample, get the smoothed position.  The first sample
    /// after construction (or [`reset`](Self::reset)) passes through exactly.
    pub fn sample(&mut self, x: f32, y: f32) -> (f32, f32) {
        let next = match self.current {
            None => (x, y),
            Some((cx, cy)) => (cx + (x - cx) / self.factor, cy + (y - cy) / self.factor),
        };
        self.current = Some(next);
        next
    }

    /// Forget the current position; the next sample seeds it again.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_passes_through() {
        let mut s = CursorSmoother::new(5.0);
        assert_eq!(s.sample(100.0, 200.0), (100.0, 200.0));
    }

    #[test]
    fn factor_one_is_identity() {
        let mut s = CursorSmoother::new(1.0);
        s.sample(0.0, 0.0);
        assert_eq!(s.sample(640.0, 480.0), (640.0, 480.0));
    }

    #[test]
    fn smoothing_moves_a_fifth_of_the_way() {
        let mut s = CursorSmoother::new(5.0);
        s.sample(0.0, 0.0);
        let (x, y) = s.sample(100.0, 50.0);
        assert!((x - 20.0).abs() < 1e-4);
        assert!((y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn converges_toward_a_held_target() {
        let mut s = CursorSmoother::new(5.0);
        s.sample(0.0, 0.0);
        let mut pos = (0.0, 0.0);
        for _ in 0..100 {
            pos = s.sample(100.0, 100.0);
        }
        assert!((pos.0 - 100.0).abs() < 0.1);
        assert!((pos.1 - 100.0).abs() < 0.1);
    }

    #[test]
    fn sub_one_factor_clamped() {
        let mut s = CursorSmoother::new(0.2);
        s.sample(0.0, 0.0);
        assert_eq!(s.sample(10.0, 10.0), (10.0, 10.0));
    }

    #[test]
    fn reset_reseeds() {
        let mut s = CursorSmoother::new(4.0);
        s.sample(0.0, 0.0);
        s.reset();
        assert_eq!(s.sample(300.0, 400.0), (300.0, 400.0));
    }
}
