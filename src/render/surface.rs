use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::error::{ShimmerError, ShimmerResult};

/// Painted output of a visual as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. Alpha is the coverage the shimmer composite masks
/// against: opaque pixels receive the sweep, transparent pixels stay holes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent frame covering `canvas`.
    pub fn transparent(canvas: Canvas) -> ShimmerResult<Self> {
        Self::filled(canvas, Rgba8Premul::transparent())
    }

    /// Frame covering `canvas` with every pixel set to `color`.
    pub fn filled(canvas: Canvas, color: Rgba8Premul) -> ShimmerResult<Self> {
        let len = canvas.byte_len()?;
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data: color.to_array().repeat(len / 4),
            premultiplied: true,
        })
    }

    /// Wrap an existing premultiplied buffer, checking its length against the size.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> ShimmerResult<Self> {
        let canvas = Canvas::new(width, height)?;
        if data.len() != canvas.byte_len()? {
            return Err(ShimmerError::render(format!(
                "rgba8 buffer of {} bytes does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied: true,
        })
    }

    /// Pixel extent.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Check that the buffer length matches the declared size.
    pub fn validate(&self) -> ShimmerResult<()> {
        let expected = self.canvas().byte_len()?;
        if self.data.len() != expected || self.width == 0 || self.height == 0 {
            return Err(ShimmerError::render(format!(
                "surface {}x{} expects {expected} bytes, has {}",
                self.width,
                self.height,
                self.data.len()
            )));
        }
        if !self.premultiplied {
            return Err(ShimmerError::render("surface must be premultiplied"));
        }
        Ok(())
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some(Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Fill the axis-aligned pixel rectangle `[x0, x1) x [y0, y1)`, clipped to the frame.
    ///
    /// Pixels that fall outside `data` (a frame whose fields disagree) are skipped.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba8Premul) {
        let px = color.to_array();
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
                if let Some(dst) = self.data.get_mut(idx..idx + 4) {
                    dst.copy_from_slice(&px);
                }
            }
        }
    }

    /// Copy of the pixels with premultiplication undone, as PNG encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Stack frames of equal width top to bottom.
    pub fn stack_vertical(frames: &[Self]) -> ShimmerResult<Self> {
        let Some(first) = frames.first() else {
            return Err(ShimmerError::render("cannot stack zero frames"));
        };
        if frames.iter().any(|f| f.width != first.width) {
            return Err(ShimmerError::render("stacked frames must share a width"));
        }
        let height = frames.iter().map(|f| f.height).sum();
        let data = frames.iter().flat_map(|f| f.data.iter().copied()).collect();
        Self::from_premul(first.width, height, data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
