use std::borrow::Cow;
use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::animation::driver::{AnimationDriver, DriverConfig, DriverStatus};
use crate::animation::shared::SharedController;
use crate::animation::ticker::ProgressPrimitive;
use crate::effects::sweep::Direction;
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::paint::gradient::{Gradient, GradientDef};
use crate::render::compositor::Compositor;
use crate::render::surface::FrameRGBA;

/// Configuration surface of one shimmer effect.
///
/// `period_ms`, `loop_count` and `enabled` are optional so that "explicitly set" can be told
/// apart from "default": with a [`SharedController`] none of them may be set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimmerConfig {
    /// Sweep appearance.
    pub gradient: GradientDef,
    /// Travel direction of the highlight.
    pub direction: Direction,
    /// Pass length in milliseconds; 1500 when unset.
    pub period_ms: Option<u64>,
    /// Passes before stopping, `0` for infinite; 0 when unset.
    pub loop_count: Option<u32>,
    /// Whether the sweep runs; `true` when unset.
    pub enabled: Option<bool>,
    /// Paint the child untouched while the sweep is not animating.
    pub hide_when_disabled: bool,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            gradient: GradientDef::default(),
            direction: Direction::LeftToRight,
            period_ms: None,
            loop_count: None,
            enabled: None,
            hide_when_disabled: false,
        }
    }
}

impl ShimmerConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> ShimmerResult<Self> {
        let cfg: Self = serde_json::from_str(json).context("parse shimmer config JSON")?;
        Ok(cfg)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ShimmerResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read shimmer config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Effective enabled flag.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Effective, validated driver timing.
    pub fn driver_config(&self) -> ShimmerResult<DriverConfig> {
        let period = self
            .period_ms
            .map_or(DriverConfig::DEFAULT_PERIOD, Duration::from_millis);
        DriverConfig::new(period, self.loop_count.unwrap_or(0))
    }

    /// The same config with every field a shared controller owns cleared.
    pub fn without_timing(self) -> Self {
        Self {
            period_ms: None,
            loop_count: None,
            enabled: None,
            ..self
        }
    }

    fn check_shareable(&self) -> ShimmerResult<()> {
        let conflicts: Vec<&str> = [
            ("period_ms", self.period_ms.is_some()),
            ("loop_count", self.loop_count.is_some()),
            ("enabled", self.enabled.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();
        if conflicts.is_empty() {
            return Ok(());
        }
        Err(ShimmerError::config(format!(
            "{} cannot be set when a shared controller is supplied; \
             configure timing and start/stop through the controller",
            conflicts.join(", ")
        )))
    }
}

/// What the host has to redo after a tick or a configuration update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Invalidation {
    /// Nothing visible changed.
    None,
    /// Repaint with the same geometry inputs.
    Paint,
    /// Recompute the sweep geometry, then repaint.
    Layout,
}

/// Per-frame render choice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderDecision {
    /// Paint the child unmodified.
    Plain,
    /// Paint the sweep at this progress.
    Shimmer {
        /// Progress fed to the sweep geometry.
        progress: f64,
    },
}

enum DriverSource<'c> {
    Owned(AnimationDriver),
    Shared(&'c SharedController),
}

impl DriverSource<'_> {
    fn progress(&self) -> f64 {
        match self {
            Self::Owned(d) => d.progress(),
            Self::Shared(c) => c.progress(),
        }
    }

    fn is_animating(&self) -> bool {
        match self {
            Self::Owned(d) => d.is_animating(),
            Self::Shared(c) => c.is_animating(),
        }
    }
}

/// One shimmer effect instance wrapping a child visual.
///
/// The effect either owns its [`AnimationDriver`] or borrows a [`SharedController`]. An owned
/// driver is torn down with the effect; a shared controller only receives
/// [`SharedController::release_one`] when the effect is dropped.
pub struct ShimmerEffect<'c> {
    config: ShimmerConfig,
    gradient: Gradient,
    driver: DriverSource<'c>,
    observed: (f64, u32),
}

impl ShimmerEffect<'static> {
    /// Create an effect with its own driver, started unless `enabled` is `false`.
    pub fn new(config: ShimmerConfig) -> ShimmerResult<Self> {
        let timing = config.driver_config()?;
        Self::owned(config, AnimationDriver::new(timing))
    }

    /// Create an effect whose own driver runs on a host-provided progress primitive.
    pub fn with_primitive(
        config: ShimmerConfig,
        ticker: Box<dyn ProgressPrimitive>,
    ) -> ShimmerResult<Self> {
        let timing = config.driver_config()?;
        Self::owned(config, AnimationDriver::with_primitive(timing, ticker))
    }

    fn owned(config: ShimmerConfig, mut driver: AnimationDriver) -> ShimmerResult<Self> {
        let gradient = config.gradient.build()?;
        if config.is_enabled() {
            driver.start();
        }
        tracing::debug!(
            direction = ?config.direction,
            enabled = config.is_enabled(),
            period_ms = driver.config().period().as_millis() as u64,
            loop_count = driver.config().loop_limit(),
            "shimmer effect created"
        );
        Ok(Self {
            observed: (driver.progress(), driver.passes()),
            config,
            gradient,
            driver: DriverSource::Owned(driver),
        })
    }
}

impl<'c> ShimmerEffect<'c> {
    /// Create an effect that follows `controller`.
    ///
    /// Fails with [`ShimmerError::Config`] if `config` sets `period_ms`, `loop_count` or
    /// `enabled`. The controller is not started here; its creator starts it.
    pub fn with_controller(
        config: ShimmerConfig,
        controller: &'c SharedController,
    ) -> ShimmerResult<Self> {
        config.check_shareable()?;
        let gradient = config.gradient.build()?;
        tracing::debug!(
            direction = ?config.direction,
            "shimmer effect attached to shared controller"
        );
        Ok(Self {
            observed: (controller.progress(), controller.passes()),
            config,
            gradient,
            driver: DriverSource::Shared(controller),
        })
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ShimmerConfig {
        &self.config
    }

    /// Validated gradient in effect.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Whether this effect follows a shared controller.
    pub fn is_shared(&self) -> bool {
        matches!(self.driver, DriverSource::Shared(_))
    }

    /// Current progress.
    pub fn progress(&self) -> f64 {
        self.driver.progress()
    }

    /// Whether the sweep is advancing.
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Driver lifecycle; `None` for a torn-down shared controller.
    pub fn status(&self) -> Option<DriverStatus> {
        match &self.driver {
            DriverSource::Owned(d) => Some(d.status()),
            DriverSource::Shared(c) => c.status(),
        }
    }

    /// Completed passes of the current sequence.
    pub fn passes(&self) -> u32 {
        match &self.driver {
            DriverSource::Owned(d) => d.passes(),
            DriverSource::Shared(c) => c.passes(),
        }
    }

    /// Advance by one host frame.
    ///
    /// An owned driver is ticked here. A shared controller is ticked by its creator, so for a
    /// shared effect this only reports whether the controller's progress moved since the last
    /// tick.
    pub fn tick(&mut self, dt: Duration) -> Invalidation {
        if let DriverSource::Owned(driver) = &mut self.driver {
            driver.tick(dt);
        }
        let observed = (self.progress(), self.passes());
        if observed == self.observed {
            return Invalidation::None;
        }
        self.observed = observed;
        Invalidation::Paint
    }

    /// Reconcile a new configuration against the current one.
    ///
    /// Enabled `false -> true` resumes the driver where it paused; `true -> false` pauses it.
    /// A new direction needs layout; a new gradient or `hide_when_disabled` needs paint. Timing
    /// changes are applied to an owned driver. With a shared controller the construction-time
    /// conflicts are rejected and the current configuration is kept.
    pub fn update(&mut self, new: ShimmerConfig) -> ShimmerResult<Invalidation> {
        let mut inval = Invalidation::None;

        let gradient = if new.gradient != self.config.gradient {
            Some(new.gradient.build()?)
        } else {
            None
        };

        match &mut self.driver {
            DriverSource::Shared(_) => new.check_shareable()?,
            DriverSource::Owned(driver) => {
                let timing = new.driver_config()?;
                if timing.period() != driver.config().period() {
                    driver.set_period(timing.period())?;
                }
                if timing.loop_limit() != driver.config().loop_limit() {
                    driver.set_loop_limit(timing.loop_limit());
                }
                match (self.config.is_enabled(), new.is_enabled()) {
                    (false, true) => {
                        tracing::debug!(progress = driver.progress(), "shimmer enabled");
                        driver.start();
                        inval = inval.max(Invalidation::Paint);
                    }
                    (true, false) => {
                        driver.stop();
                        tracing::debug!(progress = driver.progress(), "shimmer disabled");
                        inval = inval.max(Invalidation::Paint);
                    }
                    _ => {}
                }
            }
        }

        if let Some(gradient) = gradient {
            self.gradient = gradient;
            inval = inval.max(Invalidation::Paint);
        }
        if new.hide_when_disabled != self.config.hide_when_disabled {
            inval = inval.max(Invalidation::Paint);
        }
        if new.direction != self.config.direction {
            inval = inval.max(Invalidation::Layout);
        }

        self.config = new;
        Ok(inval)
    }

    /// Whether this frame paints the sweep or the plain child.
    pub fn render_decision(&self) -> RenderDecision {
        if self.config.hide_when_disabled && !self.driver.is_animating() {
            return RenderDecision::Plain;
        }
        RenderDecision::Shimmer {
            progress: self.driver.progress(),
        }
    }

    /// Paint this frame over `child`.
    ///
    /// The plain path borrows `child` without touching its pixels.
    pub fn paint<'a>(
        &self,
        compositor: &mut Compositor,
        child: &'a FrameRGBA,
    ) -> ShimmerResult<Cow<'a, FrameRGBA>> {
        match self.render_decision() {
            RenderDecision::Plain => Ok(Cow::Borrowed(child)),
            RenderDecision::Shimmer { progress } => compositor
                .paint(child, &self.gradient, self.config.direction, progress)
                .map(Cow::Owned),
        }
    }
}

impl Drop for ShimmerEffect<'_> {
    fn drop(&mut self) {
        if let DriverSource::Shared(controller) = &self.driver {
            controller.release_one();
        }
    }
}

impl std::fmt::Debug for ShimmerEffect<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShimmerEffect")
            .field("config", &self.config)
            .field("shared", &self.is_shared())
            .field("progress", &self.progress())
            .field("animating", &self.is_animating())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shimmer.rs"]
mod tests;
