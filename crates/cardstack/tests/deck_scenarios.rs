use cardstack::{DeckConfig, DeckEvent, Point, Size, SwipeDirection, TransitionPhase};
use cardstack_testing::robot_assertions::assert_strictly_ascending;
use cardstack_testing::{CallbackRecorder, DeckRobot};

const CONTAINER: Size = Size::new(360.0, 640.0);

fn robot(count: u32) -> DeckRobot<u32> {
    DeckRobot::new((0..count).collect(), DeckConfig::default(), CONTAINER)
}

#[test]
fn fifty_cards_swipe_right_then_cleanup() {
    let mut robot = robot(50);
    let target = Point::new(900.0, -15.0);

    assert!(robot
        .stack_mut()
        .deck_mut()
        .commit_swipe(0, SwipeDirection::Right, Point::new(120.0, -2.0), target, false));

    robot.assert_current_index(1);
    let history = robot.stack().deck().history().entries().to_vec();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].index, 0);
    assert_eq!(history[0].direction, SwipeDirection::Right);
    assert_eq!(history[0].last_offset, target);
    robot.assert_phase(0, Some(TransitionPhase::Leaving));

    robot.advance_millis(300);
    robot.assert_phase(0, None);
    robot.assert_window(&[1, 2, 3]);
}

#[test]
fn undo_after_cleanup_brings_card_back_from_off_screen() {
    let mut robot = robot(50);
    robot.swipe(SwipeDirection::Right);
    robot.advance_millis(300);

    assert!(robot.undo());

    robot.assert_current_index(0);
    robot.assert_phase(0, Some(TransitionPhase::Incoming));
    robot.assert_history_len(0);
    let seed = robot
        .stack()
        .current_transition(0)
        .map(|record| record.translation())
        .expect("incoming record");
    assert!(seed.x >= 1.5 * CONTAINER.diagonal() - 1e-2, "seed {seed:?}");
    robot.assert_window(&[0, 1, 2]);
}

#[test]
fn commit_then_undo_restores_index_and_fires_undo_once() {
    for start in [0usize, 3, 7] {
        let mut robot = robot(10);
        for _ in 0..start {
            robot.swipe(SwipeDirection::Left);
            robot.advance_millis(250);
        }
        robot.assert_current_index(start);
        let recorder = CallbackRecorder::attach(robot.stack_mut());

        assert!(robot.swipe(SwipeDirection::Up));
        assert!(robot.undo());

        robot.assert_current_index(start);
        assert_eq!(recorder.undos(), vec![start as u32]);
        assert_eq!(recorder.undo_count(), 1);
    }
}

#[test]
fn undo_on_empty_history_changes_nothing() {
    let mut robot = robot(5);
    let recorder = CallbackRecorder::attach(robot.stack_mut());

    assert!(!robot.undo());
    robot.assert_current_index(0);
    robot.assert_window(&[0, 1, 2]);
    assert_eq!(recorder.undo_count(), 0);
    assert!(recorder.events().is_empty());
}

#[test]
fn rapid_swipes_mutate_once() {
    let mut robot = robot(10);
    let recorder = CallbackRecorder::attach(robot.stack_mut());

    assert!(robot.swipe(SwipeDirection::Left));
    robot.advance_millis(100);
    assert!(!robot.swipe(SwipeDirection::Left));

    robot.assert_current_index(1);
    assert_eq!(recorder.swipes(), vec![(0, SwipeDirection::Left)]);
}

#[test]
fn out_of_range_commit_never_mutates() {
    let mut robot = robot(4);
    let recorder = CallbackRecorder::attach(robot.stack_mut());
    for index in [4usize, 5, 100, usize::MAX] {
        assert!(!robot.stack_mut().deck_mut().commit_swipe(
            index,
            SwipeDirection::Down,
            Point::ZERO,
            Point::new(0.0, 900.0),
            false
        ));
    }
    robot.assert_current_index(0);
    robot.assert_history_len(0);
    robot.assert_window(&[0, 1, 2]);
    assert_eq!(recorder.swipe_count(), 0);
}

#[test]
fn window_stays_sorted_through_overlapping_transitions() {
    let mut robot = robot(12);
    let directions = [
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Up,
        SwipeDirection::Down,
    ];
    for round in 0..24 {
        if round % 3 == 2 {
            robot.undo();
        } else {
            robot.swipe(directions[round % directions.len()]);
        }
        robot.advance_millis(130);

        let window: Vec<usize> = robot
            .stack()
            .renderable_window()
            .into_iter()
            .map(|(_, index)| index)
            .collect();
        assert_strictly_ascending(&window, "renderable window");
        assert!(window.iter().all(|index| *index < 12));
        let current = robot.stack().current_index();
        assert!(current <= 12);
        for index in current..(current + 3).min(12) {
            assert!(window.contains(&index), "window {window:?} misses {index}");
        }
    }
}

#[test]
fn shrinking_items_clamps_without_panicking() {
    let mut robot = robot(8);
    for _ in 0..5 {
        robot.swipe(SwipeDirection::Right);
        robot.advance_millis(250);
    }
    robot.assert_current_index(5);

    assert!(robot.stack_mut().set_items(vec![0, 1]));
    robot.assert_current_index(2);
    assert!(robot.stack().top_item().is_none());
    assert!(!robot.swipe(SwipeDirection::Left));
    robot.settle();
    robot.assert_window(&[]);

    // Only the two remaining history entries can be undone.
    robot.advance_millis(250);
    assert!(robot.undo());
    robot.advance_millis(250);
    assert!(robot.undo());
    robot.advance_millis(250);
    assert!(!robot.undo());
    robot.assert_current_index(0);
}

#[test]
fn observers_run_after_state_is_consistent() {
    let mut robot = robot(6);
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&seen);
    let _subscription = robot.stack().subscribe(move |event| sink.borrow_mut().push(*event));
    let recorder = CallbackRecorder::attach(robot.stack_mut());

    robot.swipe(SwipeDirection::Down);
    robot.settle();
    robot.undo();
    robot.settle();

    let expected = vec![
        DeckEvent::Swiped {
            index: 0,
            direction: SwipeDirection::Down,
        },
        DeckEvent::TransitionSettled {
            index: 0,
            phase: TransitionPhase::Leaving,
        },
        DeckEvent::Undone { index: 0 },
        DeckEvent::TransitionSettled {
            index: 0,
            phase: TransitionPhase::Incoming,
        },
    ];
    assert_eq!(*seen.borrow(), expected);
    assert_eq!(recorder.events(), expected);
}
