use std::time::Duration;

use crate::animation::ticker::{FrameTicker, ProgressPrimitive, TickerEvent};
use crate::foundation::error::{ShimmerError, ShimmerResult};

/// Validated timing configuration of one animation driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    period: Duration,
    loop_limit: u32,
}

impl DriverConfig {
    /// Pass length used when none is configured.
    pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1500);

    /// Create a validated config. `loop_limit == 0` repeats forever; `period` must be non-zero.
    pub fn new(period: Duration, loop_limit: u32) -> ShimmerResult<Self> {
        if period.is_zero() {
            return Err(ShimmerError::validation("animation period must be > 0"));
        }
        Ok(Self { period, loop_limit })
    }

    /// Length of one pass.
    pub fn period(self) -> Duration {
        self.period
    }

    /// Number of passes before the driver stops, `0` for infinite.
    pub fn loop_limit(self) -> u32 {
        self.loop_limit
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            loop_limit: 0,
        }
    }
}

/// Lifecycle of an [`AnimationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverStatus {
    /// Never started; progress is 0.0.
    Idle,
    /// Progress is advancing.
    Animating,
    /// Stopped by the owner; progress is retained.
    Paused,
    /// Stopped at 1.0 because the loop limit was reached.
    Completed,
}

/// Result of one [`AnimationDriver::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// Progress after the tick, with any completion policy already applied.
    pub progress: f64,
    /// A pass completed during this tick.
    pub completed: bool,
    /// The completion was followed by an automatic restart.
    pub restarted: bool,
}

/// Drives a [`ProgressPrimitive`] and layers loop-count policy on its completion events.
///
/// A completion either restarts the pass (infinite loop, or passes left) or leaves the driver in
/// [`DriverStatus::Completed`] at progress 1.0. The decision happens inside the same `tick`
/// that observed the completion.
pub struct AnimationDriver {
    ticker: Box<dyn ProgressPrimitive>,
    config: DriverConfig,
    passes: u32,
    status: DriverStatus,
}

impl std::fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("config", &self.config)
            .field("passes", &self.passes)
            .field("status", &self.status)
            .field("progress", &self.ticker.value())
            .finish()
    }
}

impl AnimationDriver {
    /// Create an idle driver backed by the built-in [`FrameTicker`].
    pub fn new(config: DriverConfig) -> Self {
        Self::with_primitive(config, Box::new(FrameTicker::new(config.period)))
    }

    /// Create an idle driver over a host-provided progress primitive.
    pub fn with_primitive(config: DriverConfig, mut ticker: Box<dyn ProgressPrimitive>) -> Self {
        if ticker.period() != config.period {
            tracing::debug!(
                from_ms = ticker.period().as_millis() as u64,
                to_ms = config.period.as_millis() as u64,
                "primitive adopts configured period"
            );
            ticker.set_period(config.period);
        }
        Self {
            ticker,
            config,
            passes: 0,
            status: DriverStatus::Idle,
        }
    }

    /// Begin or resume advancing.
    ///
    /// From `Paused` the pass continues from the retained progress. From `Idle` or `Completed`
    /// a new pass sequence begins at 0.0 with the pass counter reset.
    pub fn start(&mut self) {
        match self.status {
            DriverStatus::Animating => {}
            DriverStatus::Paused => {
                tracing::debug!(progress = self.ticker.value(), "driver resumed");
                self.ticker.start();
                self.status = DriverStatus::Animating;
            }
            DriverStatus::Idle | DriverStatus::Completed => {
                tracing::debug!("driver started");
                self.passes = 0;
                self.ticker.restart();
                self.status = DriverStatus::Animating;
            }
        }
    }

    /// Pause advancing, keeping the current progress.
    pub fn stop(&mut self) {
        if self.status == DriverStatus::Animating {
            self.ticker.stop();
            self.status = DriverStatus::Paused;
            tracing::debug!(progress = self.ticker.value(), "driver paused");
        }
    }

    /// Reset progress to 0.0 and advance, starting a fresh pass sequence.
    pub fn restart(&mut self) {
        tracing::debug!("driver restarted");
        self.passes = 0;
        self.ticker.restart();
        self.status = DriverStatus::Animating;
    }

    /// Advance by one host frame and resolve any completion before returning.
    ///
    /// A primitive that the host stopped behind the driver's back pauses the driver here, with
    /// its progress kept; [`start`](Self::start) resumes it.
    pub fn tick(&mut self, dt: Duration) -> TickOutcome {
        let idle = TickOutcome {
            progress: self.ticker.value(),
            completed: false,
            restarted: false,
        };
        if self.status != DriverStatus::Animating {
            return idle;
        }
        if !self.ticker.is_running() {
            self.status = DriverStatus::Paused;
            tracing::debug!(
                progress = idle.progress,
                "primitive stopped externally; driver paused"
            );
            return idle;
        }

        let event = self.ticker.advance(dt);
        let (completed, restarted) = match event {
            TickerEvent::Completed => (true, self.on_complete()),
            TickerEvent::Progressed | TickerEvent::Idle => (false, false),
        };
        let progress = self.ticker.value();
        tracing::trace!(progress, completed, restarted, "driver tick");
        TickOutcome {
            progress,
            completed,
            restarted,
        }
    }

    fn on_complete(&mut self) -> bool {
        self.passes = self.passes.saturating_add(1);
        let limit = self.config.loop_limit;
        if limit == 0 || self.passes < limit {
            self.ticker.restart();
            return true;
        }
        self.status = DriverStatus::Completed;
        tracing::debug!(passes = self.passes, "driver loop limit reached");
        false
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.ticker.value()
    }

    /// Whether progress is currently advancing.
    pub fn is_animating(&self) -> bool {
        self.status == DriverStatus::Animating
    }

    /// Current lifecycle state.
    pub fn status(&self) -> DriverStatus {
        self.status
    }

    /// Completed passes since the current pass sequence began.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Timing configuration in effect.
    pub fn config(&self) -> DriverConfig {
        self.config
    }

    /// Change the pass length; the current progress fraction is kept.
    pub fn set_period(&mut self, period: Duration) -> ShimmerResult<()> {
        self.config = DriverConfig::new(period, self.config.loop_limit)?;
        self.ticker.set_period(period);
        Ok(())
    }

    /// Change the loop limit for the current pass sequence.
    ///
    /// Lowering it below the passes already run does not stop a running pass; the new limit is
    /// checked at the next completion.
    pub fn set_loop_limit(&mut self, loop_limit: u32) {
        self.config.loop_limit = loop_limit;
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.ticker.dispose();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
