use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::paint::gradient::{Alignment, GradientDef, GradientStop};

const BASE: Rgba8Premul = Rgba8Premul {
    r: 10,
    g: 10,
    b: 10,
    a: 255,
};
const HIGHLIGHT: Rgba8Premul = Rgba8Premul {
    r: 250,
    g: 250,
    b: 250,
    a: 255,
};

fn horizontal_band() -> Gradient {
    let stops = [BASE, BASE, HIGHLIGHT, BASE, BASE]
        .into_iter()
        .zip(Gradient::COLORS_STOPS)
        .map(|(c, o)| GradientStop::new(c, o))
        .collect();
    Gradient::new(stops, Alignment::CENTER_LEFT, Alignment::CENTER_RIGHT).unwrap()
}

fn opaque_child(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA::filled(Canvas::new(w, h).unwrap(), Rgba8Premul::opaque(90, 0, 0)).unwrap()
}

#[test]
fn mid_pass_highlight_sits_on_the_center() {
    let child = opaque_child(120, 4);
    let mut c = Compositor::cpu();
    let out = c
        .paint(&child, &horizontal_band(), Direction::LeftToRight, 0.5)
        .unwrap();
    let center = out.pixel(60, 2).unwrap();
    assert!(center.r > 240, "{center:?}");
    assert_eq!(out.pixel(0, 2), Some(BASE));
    assert_eq!(out.pixel(119, 2), Some(BASE));
}

#[test]
fn pass_boundaries_show_only_base_color() {
    let mut c = Compositor::cpu();
    for (w, h) in [(120, 4), (4, 120), (50, 50)] {
        let child = opaque_child(w, h);
        for dir in Direction::ALL {
            for p in [0.0, 1.0] {
                let out = c.paint(&child, &horizontal_band(), dir, p).unwrap();
                assert!(
                    out.data.chunks_exact(4).all(|px| px == BASE.to_array()),
                    "{w}x{h} {dir:?} at {p}"
                );
            }
        }
    }
}

#[test]
fn default_gradient_is_invisible_at_pass_boundaries() {
    let gradient = GradientDef::default().build().unwrap();
    let base = Rgba8Premul::opaque(0xE0, 0xE0, 0xE0);
    let mut c = Compositor::cpu();
    for (w, h) in [(120, 40), (100, 100), (40, 120)] {
        let child = opaque_child(w, h);
        for dir in Direction::ALL {
            for p in [0.0, 1.0] {
                let out = c.paint(&child, &gradient, dir, p).unwrap();
                let lit = out
                    .data
                    .chunks_exact(4)
                    .filter(|px| *px != base.to_array())
                    .count();
                assert_eq!(lit, 0, "{w}x{h} {dir:?} at {p}");
            }
        }
    }
}

#[test]
fn vertical_sweep_lights_a_horizontal_band() {
    let child = opaque_child(30, 120);
    let mut c = Compositor::cpu();
    let out = c
        .paint(&child, &horizontal_band(), Direction::BottomToTop, 0.5)
        .unwrap();
    for x in [0, 15, 29] {
        assert!(out.pixel(x, 60).unwrap().r > 240, "column {x}");
        assert_eq!(out.pixel(x, 0), Some(BASE));
        assert_eq!(out.pixel(x, 119), Some(BASE));
    }
}

#[test]
fn transparent_pixels_stay_holes() {
    let mut child = opaque_child(40, 10);
    child.fill_rect(10, 0, 20, 10, Rgba8Premul::transparent());
    let mut c = Compositor::cpu();
    let out = c
        .paint(&child, &horizontal_band(), Direction::TopToBottom, 0.5)
        .unwrap();
    for y in 0..10 {
        assert_eq!(out.pixel(15, y), Some(Rgba8Premul::transparent()));
        assert_eq!(out.pixel(5, y).map(|p| p.a), Some(255));
    }
}

#[test]
fn partial_coverage_scales_the_sweep() {
    let child =
        FrameRGBA::filled(Canvas::new(8, 1).unwrap(), Rgba8Premul::from_straight_rgba(0, 0, 0, 128))
            .unwrap();
    let mut c = Compositor::cpu();
    let out = c
        .paint(&child, &horizontal_band(), Direction::LeftToRight, 0.0)
        .unwrap();
    assert_eq!(out.pixel(3, 0), Some(Rgba8Premul { r: 5, g: 5, b: 5, a: 128 }));
}

#[test]
fn invalid_child_is_a_render_error() {
    let mut child = opaque_child(4, 4);
    child.data.truncate(10);
    let mut c = Compositor::cpu();
    let err = c
        .paint(&child, &horizontal_band(), Direction::LeftToRight, 0.5)
        .unwrap_err();
    assert!(err.to_string().contains("render error"));
}

struct RecordingBackend {
    masks: std::rc::Rc<std::cell::RefCell<Vec<Rect>>>,
}

impl PaintBackend for RecordingBackend {
    fn composite_source_in(
        &mut self,
        child: &FrameRGBA,
        _shader: &LinearShader<'_>,
        mask: Rect,
    ) -> ShimmerResult<FrameRGBA> {
        self.masks.borrow_mut().push(mask);
        Ok(child.clone())
    }
}

#[test]
fn mask_is_the_child_extent_for_every_direction() {
    let masks = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut c = Compositor::new(Box::new(RecordingBackend {
        masks: masks.clone(),
    }));
    let child = opaque_child(30, 12);
    for dir in Direction::ALL {
        c.paint(&child, &horizontal_band(), dir, 0.3).unwrap();
    }
    let masks = masks.borrow();
    assert_eq!(masks.len(), 4);
    assert!(masks.iter().all(|m| *m == Rect::new(0.0, 0.0, 30.0, 12.0)));
}
