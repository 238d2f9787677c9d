use crate::effects::composite::source_in;
use crate::effects::sweep::{Direction, SweepFrame, sweep_frame, sweep_shader};
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::ShimmerResult;
use crate::paint::gradient::{Gradient, LinearShader};
use crate::render::surface::FrameRGBA;

/// Paint primitive the compositor issues its masked composite through.
pub trait PaintBackend {
    /// Rendered size of a child visual.
    fn measure(&self, child: &FrameRGBA) -> Canvas {
        child.canvas()
    }

    /// Composite `shader` against `child` with the source-in rule, inside `mask` only.
    ///
    /// Pixels inside `mask` become the shader color scaled by the child's coverage; pixels
    /// outside `mask` keep the child's own color.
    fn composite_source_in(
        &mut self,
        child: &FrameRGBA,
        shader: &LinearShader<'_>,
        mask: Rect,
    ) -> ShimmerResult<FrameRGBA>;
}

/// Scalar CPU implementation of [`PaintBackend`]; samples the shader at pixel centers.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuBackend;

impl PaintBackend for CpuBackend {
    fn composite_source_in(
        &mut self,
        child: &FrameRGBA,
        shader: &LinearShader<'_>,
        mask: Rect,
    ) -> ShimmerResult<FrameRGBA> {
        child.validate()?;
        let mut out = child.clone();
        let width = child.width as usize;

        for (i, px) in out.data.chunks_exact_mut(4).enumerate() {
            let center = Point::new((i % width) as f64 + 0.5, (i / width) as f64 + 0.5);
            if !mask.contains(center) {
                continue;
            }
            let src = shader.color_at(center).to_array();
            let blended = source_in([px[0], px[1], px[2], px[3]], src);
            px.copy_from_slice(&blended);
        }
        Ok(out)
    }
}

/// Turns progress, direction and gradient into a masked composite over a child's pixels.
pub struct Compositor {
    backend: Box<dyn PaintBackend>,
}

impl Compositor {
    /// Compositor over a specific paint backend.
    pub fn new(backend: Box<dyn PaintBackend>) -> Self {
        Self { backend }
    }

    /// Compositor over [`CpuBackend`].
    pub fn cpu() -> Self {
        Self::new(Box::new(CpuBackend))
    }

    /// Geometry the next [`paint`](Self::paint) would use for a child of `canvas`.
    pub fn layout(&self, canvas: Canvas, direction: Direction, progress: f64) -> SweepFrame {
        sweep_frame(direction, progress, canvas.size())
    }

    /// Paint one frame of the sweep over `child`.
    #[tracing::instrument(skip_all, fields(progress = progress, direction = ?direction))]
    pub fn paint(
        &mut self,
        child: &FrameRGBA,
        gradient: &Gradient,
        direction: Direction,
        progress: f64,
    ) -> ShimmerResult<FrameRGBA> {
        let canvas = self.backend.measure(child);
        let frame = self.layout(canvas, direction, progress);
        let shader = sweep_shader(gradient, direction, frame.shader_rect);
        tracing::trace!(shader_rect = ?frame.shader_rect, "composite sweep");
        self.backend.composite_source_in(child, &shader, frame.mask_rect)
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::cpu()
    }
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
