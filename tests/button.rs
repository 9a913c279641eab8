//! Host-level tests for button debouncing.

mod common;

use common::FakeInput;
use embassy_time::Duration;
use word_sign::{BUTTON_DEBOUNCE_DELAY, Button, Debouncer, Millis, Polarity};

#[derive(Debug, Default, PartialEq, Eq)]
struct Edges {
    pressed: u32,
    released: u32,
}

/// Feeds `pressed` once per millisecond over `[from, to)` and counts the edges seen.
fn hold(debouncer: &mut Debouncer, pressed: bool, from: u32, to: u32, edges: &mut Edges) {
    for now in from..to {
        debouncer.update(Millis(now), pressed);
        if debouncer.pressed_edge() {
            edges.pressed += 1;
        }
        if debouncer.released_edge() {
            edges.released += 1;
        }
    }
}

#[test]
fn short_noise_never_produces_an_edge() {
    let mut debouncer = Debouncer::new(BUTTON_DEBOUNCE_DELAY);
    let mut edges = Edges::default();

    hold(&mut debouncer, false, 0, 100, &mut edges);
    hold(&mut debouncer, true, 100, 130, &mut edges);
    hold(&mut debouncer, false, 130, 400, &mut edges);

    assert_eq!(edges, Edges::default());
    assert!(!debouncer.is_pressed());
    assert!(!debouncer.is_pending());
}

#[test]
fn sustained_press_produces_exactly_one_edge() {
    let mut debouncer = Debouncer::new(BUTTON_DEBOUNCE_DELAY);
    let mut edges = Edges::default();

    hold(&mut debouncer, true, 0, 60, &mut edges);
    assert_eq!(edges, Edges { pressed: 1, released: 0 });

    hold(&mut debouncer, true, 60, 1_000, &mut edges);
    assert_eq!(edges, Edges { pressed: 1, released: 0 });
    assert!(debouncer.is_pressed());

    hold(&mut debouncer, false, 1_000, 1_100, &mut edges);
    assert_eq!(edges, Edges { pressed: 1, released: 1 });
    assert!(!debouncer.is_pressed());
}

#[test]
fn change_is_accepted_only_after_the_window() {
    let mut debouncer = Debouncer::new(Duration::from_millis(50));

    debouncer.update(Millis(0), true);
    assert!(debouncer.is_pending());
    debouncer.update(Millis(50), true);
    assert!(!debouncer.is_pressed());

    debouncer.update(Millis(51), true);
    assert!(debouncer.is_pressed());
    assert!(debouncer.pressed_edge());
    assert!(!debouncer.released_edge());

    // The edge flag lasts exactly one update.
    debouncer.update(Millis(52), true);
    assert!(debouncer.is_pressed());
    assert!(!debouncer.pressed_edge());
}

#[test]
fn sparse_polling_still_commits() {
    let mut debouncer = Debouncer::new(BUTTON_DEBOUNCE_DELAY);
    let mut edges = Edges::default();
    for now in (0..=60).step_by(10) {
        debouncer.update(Millis(now), true);
        if debouncer.pressed_edge() {
            edges.pressed += 1;
        }
    }
    assert_eq!(edges.pressed, 1);
    assert!(debouncer.is_pressed());
}

#[test]
fn works_across_clock_wraparound() {
    let mut debouncer = Debouncer::new(BUTTON_DEBOUNCE_DELAY);
    let start = Millis(u32::MAX - 20);

    debouncer.update(start, true);
    debouncer.update(start.wrapping_add(40), true);
    assert!(!debouncer.is_pressed());

    debouncer.update(start.wrapping_add(51), true);
    assert!(debouncer.pressed_edge());
}

#[test]
fn active_low_button_reads_a_grounded_pin_as_pressed() {
    let pin = FakeInput::pulled_up();
    let mut button = Button::new(pin.clone(), Polarity::ActiveLow, BUTTON_DEBOUNCE_DELAY);

    for now in 0..100 {
        button.update(Millis(now));
    }
    assert!(!button.is_pressed());

    pin.drive(false);
    let mut pressed_edges = 0;
    for now in 100..200 {
        button.update(Millis(now));
        if button.pressed_edge() {
            pressed_edges += 1;
        }
    }
    assert_eq!(pressed_edges, 1);
    assert!(button.is_pressed());

    pin.drive(true);
    let mut released_at = None;
    for now in 200..300 {
        button.update(Millis(now));
        if button.released_edge() {
            released_at = Some(now);
        }
    }
    assert_eq!(released_at, Some(251));
}

#[test]
fn active_high_button_reads_a_driven_pin_as_pressed() {
    let pin = FakeInput::default();
    let mut button = Button::new(pin.clone(), Polarity::ActiveHigh, BUTTON_DEBOUNCE_DELAY);

    pin.drive(true);
    for now in 0..60 {
        button.update(Millis(now));
    }
    assert!(button.is_pressed());
}
