use cardstack::{DeckConfig, DeckEvent, DirectionSet, Point, Size, SwipeDirection, TransitionPhase};
use cardstack_foundation::escape_vector;
use cardstack_testing::robot_assertions::{assert_only_interactive, assert_z_order};
use cardstack_testing::{assert_point_approx_eq, CallbackRecorder, DeckRobot};

const CONTAINER: Size = Size::new(400.0, 600.0);

fn robot_with(config: DeckConfig) -> DeckRobot<String> {
    let cards = ["amsterdam", "berlin", "copenhagen", "dublin", "edinburgh"]
        .into_iter()
        .map(String::from)
        .collect();
    DeckRobot::new(cards, config, CONTAINER)
}

#[test]
fn drag_past_threshold_swipes_top_card() {
    let mut robot = robot_with(DeckConfig::default());
    let recorder = CallbackRecorder::attach(robot.stack_mut());

    robot.drag_to(Point::new(-140.0, 30.0));
    assert_eq!(robot.release(), Some(SwipeDirection::Left));

    assert_eq!(recorder.swipes(), vec![("amsterdam".to_string(), SwipeDirection::Left)]);
    assert_eq!(robot.stack().top_item().map(String::as_str), Some("berlin"));
    let record = robot.stack().current_transition(0).expect("leaving record");
    assert_eq!(record.target(), escape_vector(Point::new(-140.0, 30.0), CONTAINER));

    robot.settle();
    robot.assert_window(&[1, 2, 3]);
}

#[test]
fn drag_below_threshold_springs_back() {
    let mut robot = robot_with(DeckConfig::default());
    robot.drag_to(Point::new(60.0, -50.0));
    assert_eq!(robot.release(), None);

    assert!(robot.stack().gestures().is_snapping_back());
    robot.settle();
    assert_eq!(robot.stack().gestures().drag_offset(), Point::ZERO);
    robot.assert_current_index(0);
    robot.assert_history_len(0);
}

#[test]
fn live_overlay_follows_drag() {
    let mut robot = robot_with(DeckConfig::default());
    robot.drag_to(Point::new(0.0, -50.0));

    let visuals = robot.stack().visuals();
    let top = visuals[0];
    let overlay = top.overlay.expect("overlay while dragging");
    assert_eq!(overlay.direction, SwipeDirection::Up);
    assert!((overlay.opacity - 0.5).abs() < 1e-5);
    assert_only_interactive(&visuals, 0, "while dragging");
    assert_z_order(&visuals, "while dragging");

    robot.cancel();
    robot.settle();
    assert_eq!(robot.stack().visuals()[0].overlay, None);
}

#[test]
fn predicted_end_only_shapes_agreeing_exits() {
    let mut robot = robot_with(DeckConfig::default());
    robot.drag_to(Point::new(110.0, 0.0));
    let predicted = Point::new(520.0, 260.0);
    assert_eq!(robot.release_with_predicted(predicted), Some(SwipeDirection::Right));
    let target = robot
        .stack()
        .current_transition(0)
        .map(|record| record.target())
        .expect("record");
    assert_point_approx_eq(target, escape_vector(predicted, CONTAINER), 1e-3, "flung exit");

    robot.advance_millis(250);
    robot.drag_to(Point::new(110.0, 0.0));
    // A prediction pointing down disagrees with the rightward commit.
    assert_eq!(
        robot.release_with_predicted(Point::new(40.0, 700.0)),
        Some(SwipeDirection::Right)
    );
    let target = robot
        .stack()
        .current_transition(1)
        .map(|record| record.target())
        .expect("record");
    assert_point_approx_eq(target, escape_vector(Point::new(110.0, 0.0), CONTAINER), 1e-3, "raw exit");
}

#[test]
fn vertical_only_deck_rejects_horizontal_commits() {
    let config = DeckConfig::default().with_allowed_directions(DirectionSet::VERTICAL);
    let mut robot = robot_with(config);

    assert_eq!(robot.fling(Point::new(300.0, 0.0)), None);
    robot.assert_current_index(0);
    robot.settle();

    assert_eq!(robot.fling(Point::new(0.0, 300.0)), Some(SwipeDirection::Down));
    robot.assert_current_index(1);
}

#[test]
fn commanded_swipes_ignore_allowed_directions() {
    let config = DeckConfig::default().with_allowed_directions(DirectionSet::NONE);
    let mut robot = robot_with(config);
    assert_eq!(robot.fling(Point::new(300.0, 0.0)), None);
    assert!(robot.swipe(SwipeDirection::Left));
    robot.assert_current_index(1);
}

#[test]
fn holding_reveals_detail_until_release() {
    let config = DeckConfig::default().with_detail_enabled(true);
    let mut robot = robot_with(config);
    let recorder = CallbackRecorder::attach(robot.stack_mut());

    robot.drag_to(Point::new(4.0, 2.0));
    robot.advance_millis(400);
    assert!(robot.stack().gestures().is_holding());

    robot.release();
    let detail: Vec<bool> = recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            DeckEvent::DetailVisibilityChanged(visible) => Some(visible),
            _ => None,
        })
        .collect();
    assert_eq!(detail, vec![true, false]);
}

#[test]
fn tap_to_undo_restores_last_card() {
    let config = DeckConfig::default().with_tap_to_undo(true);
    let mut robot = robot_with(config);
    let recorder = CallbackRecorder::attach(robot.stack_mut());

    robot.fling(Point::new(0.0, -200.0));
    robot.advance_millis(260);
    assert!(robot.tap());

    robot.assert_current_index(0);
    robot.assert_phase(0, Some(TransitionPhase::Incoming));
    assert_eq!(recorder.undos(), vec!["amsterdam".to_string()]);
    assert!(!robot.stack().can_interact(&"amsterdam".to_string()));

    robot.settle();
    assert!(robot.stack().can_interact(&"amsterdam".to_string()));
    let visuals = robot.stack().visuals();
    assert_only_interactive(&visuals, 0, "after undo settles");
    assert_eq!(visuals[0].layer.translation(), Point::ZERO);
}

#[test]
fn swiping_every_card_exhausts_the_deck() {
    let mut robot = robot_with(DeckConfig::default());
    for _ in 0..5 {
        assert!(robot.swipe(SwipeDirection::Right));
        robot.advance_millis(250);
    }
    assert!(robot.stack().deck().is_exhausted());
    assert!(!robot.swipe(SwipeDirection::Right));
    assert_eq!(robot.fling(Point::new(300.0, 0.0)), None);
    robot.settle();
    robot.assert_window(&[]);
    assert!(robot.stack().visuals().is_empty());
}
