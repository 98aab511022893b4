use super::*;

#[test]
fn lerp_is_affine_and_unclamped() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(10.0, 0.0, 0.25), 7.5);
    assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
}

#[test]
fn fade_in_window_is_linear_ramp() {
    assert_eq!(fade_alpha(0.0, 1000.0, 0.5, 0.0), 0.0);
    assert_eq!(fade_alpha(250.0, 1000.0, 0.5, 0.0), 0.5);
    // Window is half-open: fully faded in at exactly fade_in_ms.
    assert_eq!(fade_alpha(500.0, 1000.0, 0.5, 0.0), 1.0);
}

#[test]
fn fade_out_window_ramps_to_zero() {
    assert_eq!(fade_alpha(500.0, 1000.0, 0.0, 0.5), 1.0);
    assert_eq!(fade_alpha(750.0, 1000.0, 0.0, 0.5), 0.5);
    assert_eq!(fade_alpha(1000.0, 1000.0, 0.0, 0.5), 0.0);
}

#[test]
fn fade_out_clamps_below_zero() {
    assert_eq!(fade_alpha(1200.0, 1000.0, 0.0, 0.5), 0.0);
}

#[test]
fn no_fade_windows_means_opaque() {
    assert_eq!(fade_alpha(0.0, 1000.0, 0.0, 0.0), 1.0);
    assert_eq!(fade_alpha(999.0, 1000.0, 0.0, 0.0), 1.0);
}
