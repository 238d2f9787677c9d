use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::render::surface::FrameRGBA;

const MAX_DIM: u32 = 16_384;

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied child surface.
pub fn decode_image(bytes: &[u8]) -> ShimmerResult<FrameRGBA> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    FrameRGBA::from_premul(width, height, data)
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> ShimmerResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize `tree` scaled to fill `canvas`.
pub fn rasterize_svg(tree: &usvg::Tree, canvas: Canvas) -> ShimmerResult<FrameRGBA> {
    if canvas.width > MAX_DIM || canvas.height > MAX_DIM {
        return Err(ShimmerError::render(format!(
            "svg raster size too large: {}x{} (max {MAX_DIM}x{MAX_DIM})",
            canvas.width, canvas.height
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| ShimmerError::render("failed to allocate svg pixmap"))?;

    let sx = (canvas.width as f32) / tree.size().width();
    let sy = (canvas.height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    FrameRGBA::from_premul(canvas.width, canvas.height, pixmap.take())
}

/// Placeholder "list row" skeleton: an avatar disc followed by two rounded text bars.
///
/// Only coverage matters under the sweep, so everything is filled opaque black.
pub fn skeleton_svg(canvas: Canvas) -> String {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let pad = h * 0.125;
    let r = (h - 2.0 * pad) / 2.0;
    let bar_x = pad + 2.0 * r + pad;
    let bar_w = (w - bar_x - pad).max(0.0);
    let bar_h = h * 0.18;
    let radius = bar_h / 2.0;

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r##"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="#000"/>"##,
            r##"<rect x="{bx:.2}" y="{y1:.2}" width="{bw1:.2}" height="{bh:.2}" rx="{rr:.2}" fill="#000"/>"##,
            r##"<rect x="{bx:.2}" y="{y2:.2}" width="{bw2:.2}" height="{bh:.2}" rx="{rr:.2}" fill="#000"/>"##,
            "</svg>"
        ),
        w = canvas.width,
        h = canvas.height,
        cx = pad + r,
        cy = h / 2.0,
        r = r,
        bx = bar_x,
        y1 = h * 0.25,
        y2 = h * 0.58,
        bw1 = bar_w,
        bw2 = bar_w * 0.6,
        bh = bar_h,
        rr = radius,
    )
}

/// The built-in skeleton rendered at `canvas`.
pub fn skeleton_child(canvas: Canvas) -> ShimmerResult<FrameRGBA> {
    let tree = parse_svg(skeleton_svg(canvas).as_bytes())?;
    rasterize_svg(&tree, canvas)
}

/// Load a child visual from disk.
///
/// `.svg` files are rasterized to `canvas`; raster images keep their own dimensions.
pub fn load_child(path: &Path, canvas: Canvas) -> ShimmerResult<FrameRGBA> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read child from '{}'", path.display()))?;
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let child = if is_svg {
        rasterize_svg(&parse_svg(&bytes)?, canvas)?
    } else {
        decode_image(&bytes)?
    };
    tracing::debug!(
        path = %path.display(),
        width = child.width,
        height = child.height,
        "loaded child"
    );
    Ok(child)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
