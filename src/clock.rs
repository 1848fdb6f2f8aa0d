//! Elapsed-time bookkeeping for the interval loop.

/// Turns successive timestamps (ms) into deltas since the previous one. Interval
/// timers drift and get throttled in background tabs, so the simulation is fed the
/// measured delta rather than the nominal period.
#[derive(Clone, Copy, Debug)]
pub struct DeltaClock {
    last_ms: f64,
}

impl DeltaClock {
    pub fn new(now: f64) -> Self {
        Self { last_ms: now }
    }

    pub fn lap(&mut self, now: f64) -> f64 {
        let delta = now - self.last_ms;
        self.last_ms = now;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lap_reports_time_since_previous_stamp() {
        let mut clock = DeltaClock::new(1_000.0);
        assert!((clock.lap(1_100.0) - 100.0).abs() < 1e-9);
        assert!((clock.lap(1_350.0) - 250.0).abs() < 1e-9);
        assert_eq!(clock.lap(1_350.0), 0.0);
    }
}
