use std::time::{Duration, Instant};

/// One firing of a [`Ticker`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Tick {
    /// Monotonic tick counter, starting at 0.
    pub index: u64,

    /// Whole periods skipped since the previous tick (process stalls, sleep).
    pub missed: u32,
}

/// Fixed-period repeating schedule with an explicit stop hook.
///
/// The ticker never sleeps; the owner waits until [`next_deadline`](Self::next_deadline)
/// and then calls [`poll`](Self::poll). Deadlines advance by whole periods from
/// the start instant, so ticks do not drift with callback latency. After a
/// stall the ticker fires once and resynchronizes instead of bursting.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
    index: u64,
    stopped: bool,
}

impl Ticker {
    /// Creates a ticker whose first deadline is `start`.
    ///
    /// A zero period is raised to one millisecond.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next: start,
            index: 0,
            stopped: false,
        }
    }

    /// Next deadline, or `None` once stopped.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        (!self.stopped).then_some(self.next)
    }

    /// Fires if `now` has reached the current deadline.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        if self.stopped || now < self.next {
            return None;
        }

        let late = now.saturating_duration_since(self.next);
        let missed = (late.as_nanos() / self.period.as_nanos()).min(u32::MAX as u128) as u32;

        let tick = Tick { index: self.index, missed };

        self.index = self.index.wrapping_add(1);
        self.next += self.period * missed.saturating_add(1);

        Some(tick)
    }

    /// Stops the schedule. Subsequent polls never fire.
    #[inline]
    pub fn stop(&mut self) {
        self.stopped = true;
    }
}
