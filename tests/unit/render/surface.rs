use super::*;

#[test]
fn from_premul_checks_length() {
    assert!(FrameRGBA::from_premul(2, 2, vec![0; 16]).is_ok());
    assert!(FrameRGBA::from_premul(2, 2, vec![0; 15]).is_err());
    assert!(FrameRGBA::from_premul(0, 2, vec![]).is_err());
}

#[test]
fn fill_rect_clips_to_frame() {
    let mut f = FrameRGBA::transparent(Canvas::new(4, 3).unwrap()).unwrap();
    let red = Rgba8Premul::opaque(255, 0, 0);
    f.fill_rect(2, 1, 10, 10, red);
    assert_eq!(f.pixel(1, 1), Some(Rgba8Premul::transparent()));
    assert_eq!(f.pixel(2, 1), Some(red));
    assert_eq!(f.pixel(3, 2), Some(red));
    assert_eq!(f.pixel(4, 2), None);
}

#[test]
fn fill_rect_skips_pixels_past_short_data() {
    let mut f = FrameRGBA::transparent(Canvas::new(3, 2).unwrap()).unwrap();
    f.data.truncate(4 * 4);
    let red = Rgba8Premul::opaque(255, 0, 0);
    f.fill_rect(0, 0, 3, 2, red);
    assert_eq!(f.data.len(), 16);
    assert_eq!(f.pixel(0, 0), Some(red));
    assert_eq!(f.pixel(0, 1), Some(red));
    assert_eq!(f.pixel(1, 1), None);
}

#[test]
fn stack_vertical_concatenates_rows() {
    let a = FrameRGBA::filled(Canvas::new(2, 1).unwrap(), Rgba8Premul::opaque(1, 1, 1)).unwrap();
    let b = FrameRGBA::filled(Canvas::new(2, 2).unwrap(), Rgba8Premul::opaque(2, 2, 2)).unwrap();
    let s = FrameRGBA::stack_vertical(&[a, b]).unwrap();
    assert_eq!((s.width, s.height), (2, 3));
    assert_eq!(s.pixel(1, 0), Some(Rgba8Premul::opaque(1, 1, 1)));
    assert_eq!(s.pixel(0, 2), Some(Rgba8Premul::opaque(2, 2, 2)));

    let black = Rgba8Premul::opaque(0, 0, 0);
    let narrow = FrameRGBA::filled(Canvas::new(1, 1).unwrap(), black).unwrap();
    let wide = FrameRGBA::filled(Canvas::new(2, 1).unwrap(), black).unwrap();
    assert!(FrameRGBA::stack_vertical(&[narrow, wide]).is_err());
    assert!(FrameRGBA::stack_vertical(&[]).is_err());
}

#[test]
fn validate_flags_inconsistent_frames() {
    let mut f = FrameRGBA::transparent(Canvas::new(2, 2).unwrap()).unwrap();
    assert!(f.validate().is_ok());
    f.data.pop();
    assert!(f.validate().is_err());
}

#[test]
fn straight_export_undoes_premultiplication() {
    let frame = FrameRGBA::from_premul(3, 1, vec![50, 25, 100, 128, 0, 0, 0, 0, 9, 8, 7, 255])
        .unwrap();
    assert_eq!(
        frame.to_straight_rgba8(),
        vec![100, 50, 199, 128, 0, 0, 0, 0, 9, 8, 7, 255]
    );
}
