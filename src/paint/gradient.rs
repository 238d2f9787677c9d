use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, Rect, Rgba8Premul, Vec2};
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::paint::color::ColorDef;

/// A point relative to a rectangle: `(-1, -1)` is the top-left corner, `(1, 1)` the
/// bottom-right, `(0, 0)` the center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Alignment {
    /// Horizontal position in `[-1, 1]`.
    pub x: f64,
    /// Vertical position in `[-1, 1]`.
    pub y: f64,
}

impl Alignment {
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self::new(-1.0, -1.0);
    /// Middle of the top edge.
    pub const TOP_CENTER: Self = Self::new(0.0, -1.0);
    /// Top-right corner.
    pub const TOP_RIGHT: Self = Self::new(1.0, -1.0);
    /// Middle of the left edge.
    pub const CENTER_LEFT: Self = Self::new(-1.0, 0.0);
    /// Center.
    pub const CENTER: Self = Self::new(0.0, 0.0);
    /// Middle of the right edge.
    pub const CENTER_RIGHT: Self = Self::new(1.0, 0.0);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self::new(-1.0, 1.0);
    /// Middle of the bottom edge.
    pub const BOTTOM_CENTER: Self = Self::new(0.0, 1.0);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    /// Build an alignment from relative coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Swap the two axes.
    pub fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Resolve to an absolute point inside `rect`.
    pub fn resolve(self, rect: Rect) -> Point {
        Point::new(
            rect.x0 + (self.x + 1.0) * 0.5 * rect.width(),
            rect.y0 + (self.y + 1.0) * 0.5 * rect.height(),
        )
    }

    fn named(name: &str) -> Option<Self> {
        let a = match name.trim().to_ascii_lowercase().as_str() {
            "top_left" | "topleft" => Self::TOP_LEFT,
            "top_center" | "topcenter" => Self::TOP_CENTER,
            "top_right" | "topright" => Self::TOP_RIGHT,
            "center_left" | "centerleft" => Self::CENTER_LEFT,
            "center" => Self::CENTER,
            "center_right" | "centerright" => Self::CENTER_RIGHT,
            "bottom_left" | "bottomleft" => Self::BOTTOM_LEFT,
            "bottom_center" | "bottomcenter" => Self::BOTTOM_CENTER,
            "bottom_right" | "bottomright" => Self::BOTTOM_RIGHT,
            _ => return None,
        };
        Some(a)
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Named(String),
            Xy { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Named(s) => Self::named(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown alignment '{s}'"))),
            Repr::Xy { x, y } => Ok(Self::new(x, y)),
        }
    }
}

/// One color stop of a [`Gradient`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Premultiplied stop color.
    pub color: Rgba8Premul,
    /// Position along the gradient axis in `[0, 1]`.
    pub offset: f64,
}

impl GradientStop {
    /// Build a stop.
    pub fn new(color: Rgba8Premul, offset: f64) -> Self {
        Self { color, offset }
    }
}

/// Linear gradient defining the look of the sweep.
///
/// Stops are sorted by offset and lie in `[0, 1]`; the axis runs from `begin` to `end`, both
/// resolved against whatever rectangle the gradient is realized over.
///
/// `begin` and `end` are written for a horizontal sweep, with `x` along the travel axis. A
/// vertical sweep evaluates them transposed (see [`Gradient::shader_transposed`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
    begin: Alignment,
    end: Alignment,
}

impl Gradient {
    /// Stop offsets of [`Gradient::from_colors`].
    pub const COLORS_STOPS: [f64; 5] = [0.0, 0.35, 0.5, 0.65, 1.0];

    /// Create a validated gradient.
    pub fn new(stops: Vec<GradientStop>, begin: Alignment, end: Alignment) -> ShimmerResult<Self> {
        if stops.len() < 2 {
            return Err(ShimmerError::validation("gradient needs at least two stops"));
        }
        if !stops
            .iter()
            .all(|s| s.offset.is_finite() && (0.0..=1.0).contains(&s.offset))
        {
            return Err(ShimmerError::validation(
                "gradient stop offsets must be finite and within [0, 1]",
            ));
        }
        if !stops.windows(2).all(|w| w[0].offset <= w[1].offset) {
            return Err(ShimmerError::validation("gradient stops must be sorted by offset"));
        }
        if ![begin.x, begin.y, end.x, end.y].iter().all(|v| v.is_finite()) || begin == end {
            return Err(ShimmerError::validation(
                "gradient begin and end must be finite and distinct",
            ));
        }
        Ok(Self { stops, begin, end })
    }

    /// The classic placeholder look: a narrow `highlight` band inside `base`, running straight
    /// along the travel axis.
    pub fn from_colors(base: Rgba8Premul, highlight: Rgba8Premul) -> Self {
        let colors = [base, base, highlight, base, base];
        let stops = colors
            .into_iter()
            .zip(Self::COLORS_STOPS)
            .map(|(color, offset)| GradientStop::new(color, offset))
            .collect();
        Self {
            stops,
            begin: Alignment::CENTER_LEFT,
            end: Alignment::CENTER_RIGHT,
        }
    }

    /// Sorted color stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Axis start.
    pub fn begin(&self) -> Alignment {
        self.begin
    }

    /// Axis end.
    pub fn end(&self) -> Alignment {
        self.end
    }

    /// Color at axis position `t`, clamped to the edge stops outside `[0, 1]`.
    pub fn color_at(&self, t: f64) -> Rgba8Premul {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t.is_nan() || t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        let idx = self.stops.partition_point(|s| s.offset <= t);
        let a = self.stops[idx - 1];
        let b = self.stops[idx];
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return b.color;
        }
        Rgba8Premul::lerp(a.color, b.color, (t - a.offset) / span)
    }

    /// Realize this gradient as a shader whose coordinate space is `rect`.
    pub fn shader(&self, rect: Rect) -> LinearShader<'_> {
        self.shader_between(self.begin, self.end, rect)
    }

    /// Like [`shader`](Self::shader) with `begin` and `end` transposed, so an axis written for a
    /// horizontal sweep runs vertically.
    pub fn shader_transposed(&self, rect: Rect) -> LinearShader<'_> {
        self.shader_between(self.begin.transposed(), self.end.transposed(), rect)
    }

    fn shader_between(&self, begin: Alignment, end: Alignment, rect: Rect) -> LinearShader<'_> {
        let start = begin.resolve(rect);
        let axis = end.resolve(rect) - start;
        let len2 = axis.hypot2();
        LinearShader {
            gradient: self,
            start,
            axis,
            inv_len2: if len2 > 0.0 { 1.0 / len2 } else { 0.0 },
        }
    }
}

/// A [`Gradient`] bound to a concrete rectangle.
#[derive(Clone, Copy, Debug)]
pub struct LinearShader<'a> {
    gradient: &'a Gradient,
    start: Point,
    axis: Vec2,
    inv_len2: f64,
}

impl LinearShader<'_> {
    /// Axis position of `p`: its projection onto `begin -> end`, `0` at begin, `1` at end.
    pub fn t_at(&self, p: Point) -> f64 {
        (p - self.start).dot(self.axis) * self.inv_len2
    }

    /// Shader color at `p`.
    pub fn color_at(&self, p: Point) -> Rgba8Premul {
        self.gradient.color_at(self.t_at(p))
    }

    /// Absolute point at axis position `t`.
    pub fn point_at(&self, t: f64) -> Point {
        self.start + self.axis * t
    }
}

/// Serialized gradient: either a base/highlight pair or explicit stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradientDef {
    /// Expands to [`Gradient::from_colors`].
    Colors {
        /// Color of the resting placeholder.
        base: ColorDef,
        /// Color of the moving band.
        highlight: ColorDef,
    },
    /// Explicit stops and axis.
    Stops {
        /// Color stops, sorted by offset.
        stops: Vec<GradientStopDef>,
        /// Axis start; defaults to the middle of the left edge.
        #[serde(default = "default_begin")]
        begin: Alignment,
        /// Axis end; defaults to the middle of the right edge.
        #[serde(default = "default_end")]
        end: Alignment,
    },
}

/// Serialized gradient stop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStopDef {
    /// Stop color.
    pub color: ColorDef,
    /// Stop position in `[0, 1]`.
    pub offset: f64,
}

fn default_begin() -> Alignment {
    Alignment::CENTER_LEFT
}

fn default_end() -> Alignment {
    Alignment::CENTER_RIGHT
}

impl GradientDef {
    /// Light grey placeholder on a lighter highlight.
    pub fn default_colors() -> Self {
        Self::Colors {
            base: ColorDef::rgb8(0xE0, 0xE0, 0xE0),
            highlight: ColorDef::rgb8(0xF5, 0xF5, 0xF5),
        }
    }

    /// Validate and build the runtime gradient.
    pub fn build(&self) -> ShimmerResult<Gradient> {
        match self {
            Self::Colors { base, highlight } => Ok(Gradient::from_colors(
                base.to_rgba8_premul()?,
                highlight.to_rgba8_premul()?,
            )),
            Self::Stops { stops, begin, end } => {
                let stops = stops
                    .iter()
                    .map(|s| Ok(GradientStop::new(s.color.to_rgba8_premul()?, s.offset)))
                    .collect::<ShimmerResult<Vec<_>>>()?;
                Gradient::new(stops, *begin, *end)
            }
        }
    }
}

impl Default for GradientDef {
    fn default() -> Self {
        Self::default_colors()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/gradient.rs"]
mod tests;
