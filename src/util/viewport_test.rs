use super::*;

const W: f64 = 1280.0;
const H: f64 = 720.0;

#[test]
fn fully_inside_is_in_viewport() {
    assert!(is_in_viewport(Rect::new(10.0, 10.0, 200.0, 300.0), W, H));
}

#[test]
fn touching_edges_counts_as_inside() {
    assert!(is_in_viewport(Rect::new(0.0, 0.0, H, W), W, H));
}

#[test]
fn partially_above_is_outside() {
    assert!(!is_in_viewport(Rect::new(-1.0, 10.0, 200.0, 300.0), W, H));
}

#[test]
fn overflowing_bottom_or_right_is_outside() {
    assert!(!is_in_viewport(Rect::new(10.0, 10.0, H + 1.0, 300.0), W, H));
    assert!(!is_in_viewport(Rect::new(10.0, 10.0, 200.0, W + 1.0), W, H));
}

#[test]
fn left_of_viewport_is_outside() {
    assert!(!is_in_viewport(Rect::new(10.0, -20.0, 200.0, 300.0), W, H));
}
