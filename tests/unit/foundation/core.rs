use super::*;

#[test]
fn fps_rejects_zero_terms() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frames_for_period_rounds_up() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_for(Duration::from_millis(1500)), 45);
    assert_eq!(fps.frames_for(Duration::from_millis(1510)), 46);
}

#[test]
fn canvas_bounds_start_at_origin() {
    let c = Canvas::new(100, 50).unwrap();
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(c.byte_len().unwrap(), 100 * 50 * 4);
    assert!(Canvas::new(0, 10).is_err());
}

#[test]
fn premultiply_scales_color_by_alpha() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c, Rgba8Premul { r: 128, g: 64, b: 0, a: 128 });
}

#[test]
fn lerp_hits_endpoints() {
    let a = Rgba8Premul::opaque(0, 0, 0);
    let b = Rgba8Premul::opaque(200, 100, 50);
    assert_eq!(Rgba8Premul::lerp(a, b, 0.0), a);
    assert_eq!(Rgba8Premul::lerp(a, b, 1.0), b);
    assert_eq!(Rgba8Premul::lerp(a, b, 0.5), Rgba8Premul::opaque(100, 50, 25));
}
