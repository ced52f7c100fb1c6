//! Assertion utilities for deck tests.

use cardstack::CardVisual;
use cardstack_graphics::Point;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that indices are strictly ascending, which also rules out repeats.
pub fn assert_strictly_ascending(indices: &[usize], msg: &str) {
    assert!(
        indices.windows(2).all(|pair| pair[0] < pair[1]),
        "{}: indices not strictly ascending: {:?}",
        msg,
        indices
    );
}

/// Assert that exactly one visual is interactive and that it is `index`.
pub fn assert_only_interactive(visuals: &[CardVisual], index: usize, msg: &str) {
    let interactive: Vec<usize> = visuals
        .iter()
        .filter(|visual| visual.interactive)
        .map(|visual| visual.index)
        .collect();
    assert_eq!(interactive, vec![index], "{}: interactive cards", msg);
}

/// Assert that lower indices draw above higher ones.
pub fn assert_z_order(visuals: &[CardVisual], msg: &str) {
    for pair in visuals.windows(2) {
        assert!(
            pair[0].index < pair[1].index && pair[0].z_index > pair[1].z_index,
            "{}: card {} (z {}) must draw above card {} (z {})",
            msg,
            pair[0].index,
            pair[0].z_index,
            pair[1].index,
            pair[1].z_index
        );
    }
}
