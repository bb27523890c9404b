use std::time::{Duration, Instant};

/// Fixed-timestep tick driver.
///
/// The frame loop calls [`TickClock::should_tick`] once per frame with the
/// current monotonic time; the clock decides whether one logical tick is
/// due. Two properties matter here:
///
/// - No drift: after a tick, `last_tick` advances to
///   `now - (elapsed % interval)` rather than plain `now`, so tick cadence
///   stays locked to the interval even when frames land late.
/// - No catch-up bursts: at most one tick per call, no matter how many
///   intervals elapsed during a stall.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    /// Creates a clock that fires every `interval`, anchored at `now`.
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// Returns the tick interval for a logical rate in ticks per second.
    #[must_use]
    pub fn interval_for_rate(ticks_per_second: u32) -> Duration {
        debug_assert!(ticks_per_second > 0);
        Duration::from_millis(1000 / u64::from(ticks_per_second.max(1)))
    }

    /// Reports whether a tick is due at `now`, consuming it if so.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return false;
        }

        let overshoot = elapsed.as_nanos() % self.interval.as_nanos();
        // overshoot < interval, so the narrowing cast cannot truncate.
        self.last_tick = now - Duration::from_nanos(overshoot as u64);
        true
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
