use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShimmerError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ShimmerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ShimmerError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShimmerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
