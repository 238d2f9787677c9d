use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::animation::driver::{AnimationDriver, DriverConfig, DriverStatus, TickOutcome};
use crate::animation::ticker::ProgressPrimitive;

/// An [`AnimationDriver`] shared by several effects so they sweep in lockstep.
///
/// Effects borrow the controller (`&SharedController`) and only ever read it; the creator drives
/// it with [`tick`](Self::tick), [`start`](Self::start) and [`stop`](Self::stop), which affect
/// every effect at once. Timing configuration is fixed at construction.
///
/// Teardown is idempotent: the creator's [`dispose`](Self::dispose) and each effect's
/// [`release_one`](Self::release_one) all route to the same guarded teardown, and only the first
/// call releases the underlying progress primitive. After teardown the controller reports the
/// last observed progress, is never animating, and ignores every mutating call.
#[derive(Debug)]
pub struct SharedController {
    config: DriverConfig,
    driver: RefCell<Option<AnimationDriver>>,
    torn_down: Cell<bool>,
    last_progress: Cell<f64>,
}

impl SharedController {
    /// Create an idle controller backed by the built-in frame ticker.
    pub fn new(config: DriverConfig) -> Self {
        Self::from_driver(AnimationDriver::new(config))
    }

    /// Create an idle controller over a host-provided progress primitive.
    pub fn with_primitive(config: DriverConfig, ticker: Box<dyn ProgressPrimitive>) -> Self {
        Self::from_driver(AnimationDriver::with_primitive(config, ticker))
    }

    fn from_driver(driver: AnimationDriver) -> Self {
        Self {
            config: driver.config(),
            last_progress: Cell::new(driver.progress()),
            driver: RefCell::new(Some(driver)),
            torn_down: Cell::new(false),
        }
    }

    fn with_driver<R>(
        &self,
        op: &'static str,
        f: impl FnOnce(&mut AnimationDriver) -> R,
    ) -> Option<R> {
        let mut slot = self.driver.borrow_mut();
        match slot.as_mut() {
            Some(driver) => {
                let out = f(driver);
                self.last_progress.set(driver.progress());
                Some(out)
            }
            None => {
                tracing::debug!(op, "shared controller already torn down; ignoring");
                None
            }
        }
    }

    /// Begin or resume the shared sweep for every subscribed effect.
    pub fn start(&self) {
        self.with_driver("start", AnimationDriver::start);
    }

    /// Pause the shared sweep for every subscribed effect.
    pub fn stop(&self) {
        self.with_driver("stop", AnimationDriver::stop);
    }

    /// Reset the shared sweep to 0.0 and run.
    pub fn restart(&self) {
        self.with_driver("restart", AnimationDriver::restart);
    }

    /// Advance by one host frame. Call once per frame, not once per effect.
    pub fn tick(&self, dt: Duration) -> TickOutcome {
        self.with_driver("tick", |d| d.tick(dt)).unwrap_or(TickOutcome {
            progress: self.last_progress.get(),
            completed: false,
            restarted: false,
        })
    }

    /// Progress every subscribed effect paints with this frame.
    pub fn progress(&self) -> f64 {
        match self.driver.borrow().as_ref() {
            Some(d) => d.progress(),
            None => self.last_progress.get(),
        }
    }

    /// Whether the shared sweep is advancing.
    pub fn is_animating(&self) -> bool {
        self.driver
            .borrow()
            .as_ref()
            .is_some_and(AnimationDriver::is_animating)
    }

    /// Lifecycle state; `None` once torn down.
    pub fn status(&self) -> Option<DriverStatus> {
        self.driver.borrow().as_ref().map(AnimationDriver::status)
    }

    /// Completed passes of the current sequence; `0` once torn down.
    pub fn passes(&self) -> u32 {
        self.driver
            .borrow()
            .as_ref()
            .map_or(0, AnimationDriver::passes)
    }

    /// Authoritative timing configuration for all subscribers.
    pub fn config(&self) -> DriverConfig {
        self.config
    }

    /// Whether teardown already happened.
    pub fn is_disposed(&self) -> bool {
        self.torn_down.get()
    }

    /// Request release from a consumer that may or may not be responsible for cleanup.
    ///
    /// Returns `true` only for the call that performed the teardown.
    pub fn release_one(&self) -> bool {
        if self.torn_down.replace(true) {
            tracing::debug!("shared controller release ignored; already torn down");
            return false;
        }
        let driver = self.driver.borrow_mut().take();
        if let Some(driver) = driver {
            self.last_progress.set(driver.progress());
            drop(driver);
        }
        tracing::debug!(progress = self.last_progress.get(), "shared controller torn down");
        true
    }

    /// Creator-side teardown. Same guard as [`release_one`](Self::release_one).
    pub fn dispose(&self) -> bool {
        self.release_one()
    }
}

impl Drop for SharedController {
    fn drop(&mut self) {
        self.release_one();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shared.rs"]
mod tests;
