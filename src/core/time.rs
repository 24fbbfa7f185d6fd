//=========================================================================
// Game Time
//=========================================================================
//
// Fixed-step clock advanced once per logic tick.
//
// The logic thread runs at a constant TPS, so every tick simulates the
// same delta regardless of how long the tick actually took. This keeps
// physics integration deterministic.
//
//=========================================================================

/// Timing snapshot for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    delta: f32,
    elapsed: f64,
    frame: u64,
}

impl Time {
    /// Creates a clock stepping `1 / tps` seconds per tick.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn fixed(tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        Self {
            delta: (1.0 / tps) as f32,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Seconds simulated per tick.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Total simulated seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of completed ticks.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub(crate) fn advance(&mut self) {
        self.elapsed += self.delta as f64;
        self.frame = self.frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_tps_delta() {
        let time = Time::fixed(60.0);
        assert!((time.delta() - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(time.frame(), 0);
        assert_eq!(time.elapsed(), 0.0);
    }

    #[test]
    fn advance_accumulates() {
        let mut time = Time::fixed(50.0);
        for _ in 0..50 {
            time.advance();
        }
        assert_eq!(time.frame(), 50);
        assert!((time.elapsed() - 1.0).abs() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn zero_tps_panics() {
        Time::fixed(0.0);
    }
}
