use super::*;

const CONTAINER: Size = Size::new(300.0, 400.0);

fn sample_offsets() -> Vec<Point> {
    let mut offsets = Vec::new();
    for x in [-900.0, -150.0, -1.0, 0.0, 0.5, 2.0, 75.0, 640.0] {
        for y in [-512.0, -80.0, -1.5, 0.0, 3.0, 99.0, 700.0] {
            offsets.push(Point::new(x, y));
        }
    }
    offsets
}

#[test]
fn below_threshold_never_commits() {
    let threshold = 75.0;
    for offset in sample_offsets() {
        if offset.max_abs_component() < threshold {
            assert_eq!(
                classify_commit(offset, threshold),
                None,
                "{offset:?} should snap back"
            );
        }
    }
}

#[test]
fn at_or_above_threshold_commits_along_dominant_sign() {
    let threshold = 75.0;
    for offset in sample_offsets() {
        let dominant = if offset.x.abs() >= offset.y.abs() {
            offset.x
        } else {
            offset.y
        };
        if dominant.abs() < threshold {
            continue;
        }
        let expected = if offset.x.abs() >= offset.y.abs() {
            if offset.x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if offset.y > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        };
        assert_eq!(classify_commit(offset, threshold), Some(expected), "{offset:?}");
    }
}

#[test]
fn commit_threshold_is_inclusive() {
    assert_eq!(
        classify_commit(Point::new(75.0, 0.0), 75.0),
        Some(SwipeDirection::Right)
    );
    assert_eq!(classify_commit(Point::new(74.9, 0.0), 75.0), None);
    assert_eq!(
        classify_commit(Point::new(10.0, -80.0), 75.0),
        Some(SwipeDirection::Up)
    );
}

#[test]
fn diagonal_tie_prefers_horizontal() {
    assert_eq!(
        classify_commit(Point::new(-100.0, 100.0), 50.0),
        Some(SwipeDirection::Left)
    );
    assert_eq!(
        classify_active(Point::new(20.0, -20.0)),
        Some(SwipeDirection::Right)
    );
}

#[test]
fn active_classifier_has_small_deadzone() {
    assert_eq!(classify_active(Point::new(4.0, 3.0)), None);
    assert_eq!(classify_active(Point::new(5.0, 0.0)), None);
    assert_eq!(
        classify_active(Point::new(5.5, 0.0)),
        Some(SwipeDirection::Right)
    );
    assert_eq!(
        classify_active(Point::new(1.0, 12.0)),
        Some(SwipeDirection::Down)
    );
    // More sensitive than any sensible commit threshold.
    assert_eq!(classify_commit(Point::new(6.0, 0.0), 75.0), None);
}

#[test]
fn escape_vector_has_fixed_length_and_direction() {
    let expected = 1.5 * CONTAINER.diagonal();
    for offset in sample_offsets() {
        if offset.length() < 1.0 {
            continue;
        }
        let escape = escape_vector(offset, CONTAINER);
        assert!(
            (escape.length() - expected).abs() < 1e-2,
            "{offset:?} -> {escape:?}"
        );
        // Same direction: the cross product vanishes and the dot product is positive.
        let cross = offset.x * escape.y - offset.y * escape.x;
        let dot = offset.x * escape.x + offset.y * escape.y;
        assert!(cross.abs() / (offset.length() * escape.length()) < 1e-4);
        assert!(dot > 0.0);
    }
}

#[test]
fn escape_vector_handles_degenerate_offsets() {
    assert_eq!(escape_vector(Point::ZERO, CONTAINER), Point::ZERO);

    let tiny = escape_vector(Point::new(0.5, 0.0), CONTAINER);
    assert!(tiny.is_finite());
    assert!((tiny.x - 0.5 * 1.5 * CONTAINER.diagonal()).abs() < 1e-3);
    assert_eq!(tiny.y, 0.0);
}

#[test]
fn programmatic_targets_are_off_screen() {
    let distance = 2.0 * CONTAINER.max_dimension();
    assert_eq!(
        programmatic_target(SwipeDirection::Right, CONTAINER),
        Point::new(distance, -PROGRAMMATIC_CROSS_OFFSET)
    );
    assert_eq!(
        programmatic_target(SwipeDirection::Left, CONTAINER),
        Point::new(-distance, -PROGRAMMATIC_CROSS_OFFSET)
    );
    assert_eq!(
        programmatic_target(SwipeDirection::Up, CONTAINER),
        Point::new(PROGRAMMATIC_CROSS_OFFSET, -distance)
    );
    assert_eq!(
        programmatic_target(SwipeDirection::Down, CONTAINER),
        Point::new(-PROGRAMMATIC_CROSS_OFFSET, distance)
    );
    for direction in SwipeDirection::ALL {
        let target = programmatic_target(direction, CONTAINER);
        assert_eq!(classify_active(target), Some(direction));
    }
}

#[test]
fn overlay_opacity_ramps_and_saturates() {
    assert_eq!(overlay_opacity(Point::ZERO, 100.0), 0.0);
    assert_eq!(overlay_opacity(Point::new(50.0, -10.0), 100.0), 0.5);
    assert_eq!(overlay_opacity(Point::new(-20.0, -75.0), 100.0), 0.75);
    assert_eq!(overlay_opacity(Point::new(400.0, 0.0), 100.0), 1.0);
    assert_eq!(overlay_opacity(Point::new(1.0, 0.0), 0.0), 1.0);
    assert_eq!(overlay_opacity(Point::ZERO, 0.0), 0.0);
}

#[test]
fn undo_entry_comes_from_swiped_side_with_damped_cross_axis() {
    let distance = 1.5 * CONTAINER.diagonal();
    let limit = 0.15 * distance;

    let from_right = undo_entry_vector(SwipeDirection::Right, Point::new(700.0, 300.0), CONTAINER);
    assert_eq!(from_right.x, distance);
    assert!((from_right.y - limit).abs() < 1e-3);

    let from_up = undo_entry_vector(SwipeDirection::Up, Point::new(-20.0, -900.0), CONTAINER);
    assert_eq!(from_up.y, -distance);
    assert_eq!(from_up.x, -20.0);

    let straight = undo_entry_vector(SwipeDirection::Left, Point::ZERO, CONTAINER);
    assert_eq!(straight, Point::new(-distance, 0.0));
}

#[test]
fn rotation_is_proportional_and_clamped() {
    assert_eq!(rotation_for(150.0, 300.0, 12.0), 6.0);
    assert_eq!(rotation_for(-300.0, 300.0, 12.0), -12.0);
    assert_eq!(rotation_for(900.0, 300.0, 12.0), 12.0);
    assert_eq!(rotation_for(50.0, 0.0, 12.0), 0.0);
}
