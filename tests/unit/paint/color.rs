use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn rejects_malformed_input() {
    assert!(serde_json::from_value::<ColorDef>(json!("#abc")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#gg0000")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!([1.0, 0.0])).is_err());
    assert!(ColorDef::from_hex("#12345").is_err());
}

#[test]
fn premultiplies_on_conversion() {
    let c = ColorDef::rgba(1.0, 0.5, 0.0, 0.5).to_rgba8_premul().unwrap();
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
    assert_eq!(c.g, 64);
    assert_eq!(c.b, 0);

    assert_eq!(
        ColorDef::rgb8(224, 224, 224).to_rgba8_premul().unwrap(),
        Rgba8Premul::opaque(224, 224, 224)
    );
    assert!(ColorDef::rgba(f64::NAN, 0.0, 0.0, 1.0).to_rgba8_premul().is_err());
}
