//! Cancellable repeating interval for the round countdown

use std::time::{Duration, Instant};

/// Countdown tick period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A repeating interval driven by the caller's clock.
///
/// The ticker never sleeps; the event loop asks how long until the next
/// tick and polls it with the current time.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm the interval from `now`, replacing any earlier schedule.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks that have come due by `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        fired
    }

    /// Time left before the next tick, `None` when cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_until_started() {
        let mut ticker = Ticker::default();
        assert_eq!(ticker.poll(Instant::now() + Duration::from_secs(10)), 0);
        assert_eq!(ticker.time_until_next(Instant::now()), None);
    }

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        ticker.start(start);

        assert_eq!(ticker.poll(start + Duration::from_millis(500)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.poll(start + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn test_catches_up_after_stall() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        ticker.start(start);

        assert_eq!(ticker.poll(start + Duration::from_millis(3500)), 3);
        assert_eq!(
            ticker.time_until_next(start + Duration::from_millis(3500)),
            Some(Duration::from_millis(500))
        );
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        ticker.start(start);
        ticker.cancel();

        assert_eq!(ticker.time_until_next(start), None);
        assert_eq!(ticker.poll(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_restart_replaces_schedule() {
        let start = Instant::now();
        let mut ticker = Ticker::default();
        ticker.start(start);
        ticker.start(start + Duration::from_millis(900));

        // Only the second schedule counts: nothing due at 1.0s
        assert_eq!(ticker.poll(start + Duration::from_millis(1000)), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(1900)), 1);
    }
}
