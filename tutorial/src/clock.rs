use std::time::Instant;

/// Measures the time between consecutive frames.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    /// Seconds since the previous tick, `0.0` on the first one.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);

        self.last = Some(now);

        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::default();

        assert_eq!(clock.tick(Instant::now()), 0.0);
    }

    #[test]
    fn measures_between_ticks() {
        let mut clock = FrameClock::default();
        let start = Instant::now();

        clock.tick(start);
        let dt = clock.tick(start + Duration::from_millis(16));

        assert!((dt - 0.016).abs() < 1e-9);
    }

    #[test]
    fn never_goes_backwards() {
        let mut clock = FrameClock::default();
        let start = Instant::now() + Duration::from_secs(1);

        clock.tick(start);

        assert_eq!(clock.tick(start - Duration::from_millis(5)), 0.0);
    }
}
