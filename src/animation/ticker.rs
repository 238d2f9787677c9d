use std::time::Duration;

/// What a progress primitive reports after one host clock advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerEvent {
    /// Not running; the value did not move.
    Idle,
    /// The value moved forward and the pass is still in flight.
    Progressed,
    /// The value reached 1.0 during this advance. Reported exactly once per pass.
    Completed,
}

/// Host-provided, time-driven progress primitive.
///
/// The value runs linearly from 0.0 to 1.0 over [`ProgressPrimitive::period`]. The host's frame
/// loop drives it through [`ProgressPrimitive::advance`]; completion is returned from that call
/// instead of being delivered through a callback, so the caller resolves it within the same tick.
pub trait ProgressPrimitive {
    /// Resume forward motion from the current value.
    fn start(&mut self);
    /// Pause, keeping the current value.
    fn stop(&mut self);
    /// Reset the value to 0.0 and run.
    fn restart(&mut self);
    /// Current value in `[0, 1]`.
    fn value(&self) -> f64;
    /// Whether the value is currently advancing.
    fn is_running(&self) -> bool;
    /// Length of one pass.
    fn period(&self) -> Duration;
    /// Change the pass length, keeping the current value.
    fn set_period(&mut self, period: Duration);
    /// Move the clock forward by `dt`.
    fn advance(&mut self, dt: Duration) -> TickerEvent;
    /// Release the underlying resource. Called once by the owning driver.
    fn dispose(&mut self);
}

/// Built-in [`ProgressPrimitive`] advanced by explicit frame deltas.
///
/// On reaching the end of a pass the value clamps to 1.0 and the ticker stops; time left over
/// in that frame is discarded, the next pass starts from exactly 0.0.
#[derive(Clone, Debug)]
pub struct FrameTicker {
    period: Duration,
    elapsed: Duration,
    running: bool,
    disposed: bool,
}

impl FrameTicker {
    /// Create a stopped ticker at value 0.0. `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self {
            period,
            elapsed: Duration::ZERO,
            running: false,
            disposed: false,
        }
    }

    /// Whether [`ProgressPrimitive::dispose`] has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl ProgressPrimitive for FrameTicker {
    fn start(&mut self) {
        if self.disposed {
            return;
        }
        self.running = self.elapsed < self.period;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn restart(&mut self) {
        if self.disposed {
            return;
        }
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    fn value(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.period.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn set_period(&mut self, period: Duration) {
        if period.is_zero() || period == self.period {
            return;
        }
        let t = self.value();
        self.period = period;
        self.elapsed = period.mul_f64(t);
    }

    fn advance(&mut self, dt: Duration) -> TickerEvent {
        if !self.running || self.disposed {
            return TickerEvent::Idle;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.period {
            self.elapsed = self.period;
            self.running = false;
            return TickerEvent::Completed;
        }
        TickerEvent::Progressed
    }

    fn dispose(&mut self) {
        self.running = false;
        self.disposed = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ticker.rs"]
mod tests;
