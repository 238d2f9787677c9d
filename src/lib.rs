//! Shimmer is a skeleton-loading sweep effect: a gradient highlight that travels across a child
//! visual, painted only where the child has coverage.
//!
//! # Frame pipeline
//!
//! 1. **Drive**: the host advances an [`AnimationDriver`] (or a [`SharedController`] for several
//!    effects in lockstep) by one frame delta, producing progress in `[0, 1]`.
//! 2. **Decide**: [`ShimmerEffect::render_decision`] picks the plain child or the sweep.
//! 3. **Lay out**: [`sweep_rect`] positions a gradient rect three child-extents long along the
//!    travel axis so the band enters and leaves fully off-visual.
//! 4. **Composite**: the [`Compositor`] paints the [`Gradient`] through the child's alpha with a
//!    source-in blend, producing premultiplied RGBA8 ([`FrameRGBA`]).
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-driven time**: nothing here reads a wall clock; frame deltas come from the caller.
//! - **Premultiplied RGBA8** end-to-end.
//! - **Library never installs a logger**: events go through `tracing`; the `shimmer` binary
//!   installs a subscriber.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod effects;
mod foundation;
mod paint;
mod render;

pub use animation::driver::{AnimationDriver, DriverConfig, DriverStatus, TickOutcome};
pub use animation::shared::SharedController;
pub use animation::ticker::{FrameTicker, ProgressPrimitive, TickerEvent};
pub use assets::decode::{
    decode_image, load_child, parse_svg, rasterize_svg, skeleton_child, skeleton_svg,
};
pub use effects::composite::{PremulRgba8, over, over_color_in_place, source_in};
pub use effects::shimmer::{Invalidation, RenderDecision, ShimmerConfig, ShimmerEffect};
pub use effects::sweep::{Direction, SweepFrame, sweep_frame, sweep_rect, sweep_shader};
pub use foundation::core::{Canvas, Fps, FrameIndex, Point, Rect, Rgba8Premul, Size, Vec2};
pub use foundation::error::{ShimmerError, ShimmerResult};
pub use paint::color::ColorDef;
pub use paint::gradient::{
    Alignment, Gradient, GradientDef, GradientStop, GradientStopDef, LinearShader,
};
pub use render::compositor::{Compositor, CpuBackend, PaintBackend};
pub use render::surface::FrameRGBA;
