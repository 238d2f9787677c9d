use super::*;
use crate::paint::gradient::GradientDef;

fn contains_rect(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}

#[test]
fn sweep_rect_always_covers_the_visual() {
    let size = Size::new(120.0, 40.0);
    let bounds = Rect::from_origin_size(Point::ORIGIN, size);
    for dir in Direction::ALL {
        for p in [0.0, 0.5, 1.0] {
            let r = sweep_rect(dir, p, size);
            assert!(contains_rect(r, bounds), "{dir:?} at {p}: {r:?}");
        }
    }
}

const CANVASES: [(f64, f64); 3] = [(120.0, 40.0), (100.0, 100.0), (40.0, 120.0)];

fn default_band() -> Gradient {
    GradientDef::default().build().unwrap()
}

#[test]
fn highlight_band_is_off_visual_at_pass_boundaries() {
    let g = default_band();
    let band = (Gradient::COLORS_STOPS[1], Gradient::COLORS_STOPS[3]);

    for (w, h) in CANVASES {
        let size = Size::new(w, h);
        let bounds = Rect::from_origin_size(Point::ORIGIN, size);
        for dir in Direction::ALL {
            for p in [0.0, 1.0] {
                let frame = sweep_frame(dir, p, size);
                assert_eq!(frame.mask_rect, bounds);
                let shader = sweep_shader(&g, dir, frame.shader_rect);
                for y in 0..h as u32 {
                    for x in 0..w as u32 {
                        let t = shader.t_at(Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5));
                        assert!(
                            t < band.0 || t > band.1,
                            "{w}x{h} {dir:?} at {p}: ({x}, {y}) -> t={t}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn shader_axis_follows_the_travel_axis() {
    let g = default_band();
    let size = Size::new(100.0, 60.0);
    for dir in Direction::ALL {
        let shader = sweep_shader(&g, dir, sweep_rect(dir, 0.3, size));
        let across = if dir.is_horizontal() {
            (Point::new(50.0, 0.0), Point::new(50.0, 60.0))
        } else {
            (Point::new(0.0, 30.0), Point::new(100.0, 30.0))
        };
        assert!((shader.t_at(across.0) - shader.t_at(across.1)).abs() < 1e-12, "{dir:?}");
    }
}

#[test]
fn highlight_band_crosses_the_visual_mid_pass() {
    let g = default_band();
    for (w, h) in CANVASES {
        let size = Size::new(w, h);
        for dir in Direction::ALL {
            let shader = sweep_shader(&g, dir, sweep_rect(dir, 0.5, size));
            let center = shader.point_at(0.5);
            assert!(
                (center.x - w / 2.0).abs() < 1e-9 && (center.y - h / 2.0).abs() < 1e-9,
                "{w}x{h} {dir:?}: {center:?}"
            );
        }
    }
}

#[test]
fn left_to_right_quarter_progress() {
    let r = sweep_rect(Direction::LeftToRight, 0.25, Size::new(100.0, 20.0));
    assert_eq!(r.x0, -150.0);
    assert_eq!(r.width(), 300.0);
    assert_eq!(r.y0, 0.0);
    assert_eq!(r.height(), 20.0);
}

#[test]
fn bottom_to_top_half_progress() {
    let r = sweep_rect(Direction::BottomToTop, 0.5, Size::new(80.0, 50.0));
    assert_eq!(r.y0, -50.0);
    assert_eq!(r.height(), 150.0);
    assert_eq!(r.x0, 0.0);
    assert_eq!(r.width(), 80.0);
}

#[test]
fn opposite_directions_mirror_each_other() {
    let size = Size::new(100.0, 60.0);
    for p in [0.0, 0.3, 1.0] {
        let ltr = sweep_rect(Direction::LeftToRight, p, size);
        let rtl = sweep_rect(Direction::RightToLeft, 1.0 - p, size);
        assert!((ltr.x0 - rtl.x0).abs() < 1e-9);

        let ttb = sweep_rect(Direction::TopToBottom, p, size);
        let btt = sweep_rect(Direction::BottomToTop, 1.0 - p, size);
        assert!((ttb.y0 - btt.y0).abs() < 1e-9);
    }
}

#[test]
fn progress_is_clamped() {
    let size = Size::new(10.0, 10.0);
    assert_eq!(
        sweep_rect(Direction::TopToBottom, -1.0, size),
        sweep_rect(Direction::TopToBottom, 0.0, size)
    );
    assert_eq!(
        sweep_rect(Direction::TopToBottom, 7.0, size),
        sweep_rect(Direction::TopToBottom, 1.0, size)
    );
}

#[test]
fn direction_parses_names_and_aliases() {
    assert_eq!("ltr".parse::<Direction>().unwrap(), Direction::LeftToRight);
    assert_eq!(
        "Bottom_To_Top".parse::<Direction>().unwrap(),
        Direction::BottomToTop
    );
    assert!("sideways".parse::<Direction>().is_err());

    let d: Direction = serde_json::from_value(serde_json::json!("rtl")).unwrap();
    assert_eq!(d, Direction::RightToLeft);
    let d: Direction = serde_json::from_value(serde_json::json!("top_to_bottom")).unwrap();
    assert_eq!(d, Direction::TopToBottom);
}
