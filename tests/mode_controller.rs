//! Host-level tests for the mode/pattern state machine.

mod common;

use common::{FakeOutput, letter_lines, levels};
use embassy_time::Duration;
use word_sign::{DisplayState, FRAME_DELAY, LetterPanel, Millis, Mode, ModeController};

fn controller_at(now: u32) -> ([FakeOutput; 4], ModeController<FakeOutput>) {
    let (lines, outputs) = letter_lines();
    let controller = ModeController::new(LetterPanel::new(outputs), FRAME_DELAY, Millis(now));
    (lines, controller)
}

fn expected_levels(state: DisplayState) -> [bool; 4] {
    state.to_chars().map(|character| character != '-')
}

#[test]
fn starts_in_static_with_every_letter_lit() {
    let (lines, controller) = controller_at(0);
    assert_eq!(controller.mode(), Mode::FIRST);
    assert_eq!(controller.mode(), Mode::Static);
    assert_eq!(controller.state(), DisplayState::ALL);
    assert_eq!(levels(&lines), [true; 4]);
    assert_eq!(controller.delay(), Duration::from_millis(500));
}

#[test]
fn set_mode_shows_the_first_frame_immediately() {
    let (lines, mut controller) = controller_at(0);
    for (step, mode) in Mode::ALL.into_iter().enumerate() {
        let now = Millis(u32::try_from(step).expect("small") * 7);
        controller.set_mode(mode, now);

        let first = mode.pattern().frames()[0];
        assert_eq!(controller.mode(), mode);
        assert_eq!(controller.state(), first, "{mode}");
        assert_eq!(controller.panel().shown(), first);
        assert_eq!(levels(&lines), expected_levels(first));
        assert_eq!(controller.last_update(), now);
    }
}

#[test]
fn updating_pattern_length_times_returns_to_the_first_frame() {
    let (_lines, mut controller) = controller_at(0);
    for mode in Mode::ALL {
        controller.set_mode(mode, Millis(0));
        let pattern = mode.pattern();

        let mut seen = vec![controller.state()];
        for _ in 0..pattern.len() {
            controller.update(Millis(0));
            seen.push(controller.state());
        }

        assert_eq!(&seen[..pattern.len()], pattern.frames(), "{mode}");
        assert_eq!(seen[pattern.len()], pattern.frames()[0], "{mode}");
    }
}

#[test]
fn re_entering_a_mode_restarts_its_pattern() {
    let (_lines, mut controller) = controller_at(0);
    controller.set_mode(Mode::Gradual, Millis(0));
    controller.update(Millis(0));
    controller.update(Millis(0));
    assert_eq!(controller.state(), "GIR".parse::<DisplayState>().expect("valid letters"));

    controller.set_mode(Mode::Gradual, Millis(0));
    assert_eq!(controller.state(), "G".parse::<DisplayState>().expect("valid letters"));
}

#[test]
fn tick_waits_for_the_frame_delay() {
    let (_lines, mut controller) = controller_at(1_000);
    controller.set_mode(Mode::Flash, Millis(1_000));
    assert_eq!(controller.state(), DisplayState::ALL);

    controller.tick(Millis(1_500));
    assert_eq!(controller.state(), DisplayState::ALL);
    assert_eq!(controller.last_update(), Millis(1_000));

    controller.tick(Millis(1_501));
    assert_eq!(controller.state(), DisplayState::EMPTY);
    assert_eq!(controller.last_update(), Millis(1_501));

    controller.tick(Millis(1_800));
    assert_eq!(controller.state(), DisplayState::EMPTY);
}

#[test]
fn tick_survives_clock_wraparound() {
    let start = u32::MAX - 100;
    let (_lines, mut controller) = controller_at(start);
    controller.set_mode(Mode::Flash, Millis(start));

    controller.tick(Millis(start).wrapping_add(400));
    assert_eq!(controller.state(), DisplayState::ALL);

    controller.tick(Millis(start).wrapping_add(501));
    assert_eq!(controller.state(), DisplayState::EMPTY);
}

#[test]
fn update_with_delay_sets_the_pending_delay() {
    let (_lines, mut controller) = controller_at(0);
    controller.set_mode(Mode::Flash, Millis(0));
    controller.update_with_delay(Millis(10), Duration::from_millis(100));
    assert_eq!(controller.delay(), Duration::from_millis(100));

    controller.tick(Millis(111));
    assert_eq!(controller.delay(), FRAME_DELAY);
    assert_eq!(controller.state(), DisplayState::ALL);
}

#[test]
fn modes_cycle_in_a_fixed_order() {
    let mut mode = Mode::FIRST;
    let mut order = vec![mode];
    for _ in 0..5 {
        mode = mode.next();
        order.push(mode);
    }
    assert_eq!(
        order,
        [
            Mode::Static,
            Mode::Flash,
            Mode::Separate,
            Mode::Gradual,
            Mode::Combined,
            Mode::Static
        ]
    );
    assert_eq!(Mode::Combined.to_string(), "combined");
}
