use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::ShimmerError;
use crate::foundation::math::offset;
use crate::paint::gradient::{Gradient, LinearShader};

/// Direction in which the highlight travels across the visual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Sweeps from the left edge to the right edge.
    #[default]
    #[serde(alias = "ltr")]
    LeftToRight,
    /// Sweeps from the right edge to the left edge.
    #[serde(alias = "rtl")]
    RightToLeft,
    /// Sweeps from the top edge to the bottom edge.
    #[serde(alias = "ttb")]
    TopToBottom,
    /// Sweeps from the bottom edge to the top edge.
    #[serde(alias = "btt")]
    BottomToTop,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::TopToBottom,
        Self::BottomToTop,
    ];

    /// Whether the sweep travels along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::LeftToRight | Self::RightToLeft)
    }
}

impl FromStr for Direction {
    type Err = ShimmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left_to_right" | "lefttoright" | "ltr" => Ok(Self::LeftToRight),
            "right_to_left" | "righttoleft" | "rtl" => Ok(Self::RightToLeft),
            "top_to_bottom" | "toptobottom" | "ttb" => Ok(Self::TopToBottom),
            "bottom_to_top" | "bottomtotop" | "btt" => Ok(Self::BottomToTop),
            other => Err(ShimmerError::validation(format!(
                "unknown sweep direction '{other}'"
            ))),
        }
    }
}

/// Geometry of one painted frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepFrame {
    /// Coordinate space the gradient is evaluated in; three travel-axis extents long.
    pub shader_rect: Rect,
    /// Region the composite is confined to; always the visual's own bounds.
    pub mask_rect: Rect,
}

/// Rectangle the gradient is evaluated over for `progress` in `[0, 1]`.
///
/// Along the travel axis the rectangle is three times the visual's extent and slides by two
/// extents over one pass: at 0.0 it ends flush with the far edge of the visual, at 1.0 it
/// starts flush with the near edge. The cross axis matches the visual exactly.
pub fn sweep_rect(direction: Direction, progress: f64, size: Size) -> Rect {
    let t = progress.clamp(0.0, 1.0);
    let (w, h) = (size.width, size.height);
    let along_x = |dx: f64| Rect::from_origin_size(Point::new(dx - w, 0.0), Size::new(3.0 * w, h));
    let along_y = |dy: f64| Rect::from_origin_size(Point::new(0.0, dy - h), Size::new(w, 3.0 * h));
    match direction {
        Direction::LeftToRight => along_x(offset(-w, w, t)),
        Direction::RightToLeft => along_x(offset(w, -w, t)),
        Direction::TopToBottom => along_y(offset(-h, h, t)),
        Direction::BottomToTop => along_y(offset(h, -h, t)),
    }
}

/// Realize `gradient` over `shader_rect` with its axis turned to the travel axis of `direction`.
pub fn sweep_shader<'g>(
    gradient: &'g Gradient,
    direction: Direction,
    shader_rect: Rect,
) -> LinearShader<'g> {
    if direction.is_horizontal() {
        gradient.shader(shader_rect)
    } else {
        gradient.shader_transposed(shader_rect)
    }
}

/// Shader and mask rectangles for one frame.
pub fn sweep_frame(direction: Direction, progress: f64, size: Size) -> SweepFrame {
    SweepFrame {
        shader_rect: sweep_rect(direction, progress, size),
        mask_rect: Rect::from_origin_size(Point::ORIGIN, size),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/sweep.rs"]
mod tests;
