use std::time::{Duration, Instant};

/// Fixed-interval deadline tracker.
///
/// The first call to [`advance`](Self::advance) always fires. After a tick the next
/// deadline is anchored on the time the tick was observed, not on the previous
/// deadline, so a stalled loop resumes with one tick instead of a burst.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deadline of the next tick; `None` until the first tick has fired.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|deadline| now >= deadline)
    }

    /// Fires the tick if it is due at `now` and schedules the following one.
    ///
    /// Returns whether a tick fired.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next = Some(now + self.interval);
        true
    }

    /// Time left until the next tick, zero when due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next
            .map_or(Duration::ZERO, |deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_SECOND: Duration = Duration::from_millis(500);

    #[test]
    fn first_advance_always_fires() {
        let mut t = Ticker::new(HALF_SECOND);
        assert!(t.next_deadline().is_none());
        assert!(t.advance(Instant::now()));
    }

    #[test]
    fn does_not_fire_before_interval() {
        let start = Instant::now();
        let mut t = Ticker::new(HALF_SECOND);
        t.advance(start);
        assert!(!t.advance(start + Duration::from_millis(499)));
        assert!(t.advance(start + HALF_SECOND));
    }

    #[test]
    fn stall_resumes_with_single_tick() {
        let start = Instant::now();
        let mut t = Ticker::new(HALF_SECOND);
        t.advance(start);

        let late = start + Duration::from_secs(10);
        assert!(t.advance(late));
        assert!(!t.advance(late));
        assert_eq!(t.next_deadline(), Some(late + HALF_SECOND));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let start = Instant::now();
        let mut t = Ticker::new(HALF_SECOND);
        assert_eq!(t.remaining(start), Duration::ZERO);

        t.advance(start);
        assert_eq!(t.remaining(start + Duration::from_millis(200)), Duration::from_millis(300));
        assert_eq!(t.remaining(start + Duration::from_secs(1)), Duration::ZERO);
    }
}
