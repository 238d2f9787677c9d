use crate::foundation::error::{ShimmerError, ShimmerResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel in `[r, g, b, a]` order.
pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over with an extra opacity on `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Porter-Duff source-in: `src` scaled by the coverage (alpha) of `dst`.
///
/// Opaque destination pixels take the source color unchanged; transparent ones stay fully
/// transparent whatever the source is.
pub fn source_in(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match dst[3] {
        0 => [0, 0, 0, 0],
        255 => src,
        da => {
            let da = u16::from(da);
            [
                mul_div255(u16::from(src[0]), da),
                mul_div255(u16::from(src[1]), da),
                mul_div255(u16::from(src[2]), da),
                mul_div255(u16::from(src[3]), da),
            ]
        }
    }
}

/// Flatten every pixel of `dst` onto `background`, in place.
pub fn over_color_in_place(dst: &mut [u8], background: PremulRgba8) -> ShimmerResult<()> {
    if !dst.len().is_multiple_of(4) {
        return Err(ShimmerError::render(
            "over_color_in_place expects an rgba8 buffer",
        ));
    }
    for d in dst.chunks_exact_mut(4) {
        let out = over(background, [d[0], d[1], d[2], d[3]], 1.0);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
