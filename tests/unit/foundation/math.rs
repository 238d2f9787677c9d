use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
    assert_eq!(mul_div255_u16(1, 127), 0);
    assert_eq!(mul_div255_u16(1, 128), 1);
}

#[test]
fn offset_interpolates_between_endpoints() {
    assert_eq!(offset(-100.0, 100.0, 0.0), -100.0);
    assert_eq!(offset(-100.0, 100.0, 0.25), -50.0);
    assert_eq!(offset(-100.0, 100.0, 1.0), 100.0);
    assert_eq!(offset(50.0, -50.0, 0.5), 0.0);
}
