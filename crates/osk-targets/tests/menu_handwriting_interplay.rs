//! Interplay between contact tracking, the alternate-character popup, and
//! the handwriting surface, driven through full press scripts.

use osk_core::{ContactId, NoAltMenu, NoHandwriting, Point, Press, TargetEvent, TimingConfig};
use osk_harness::{
    HandwritingCall, MenuCall, MockAltMenu, MockHandwriting, MockPressSource, PressScript, Rect,
    TestKey, VirtualClock,
};
use osk_targets::{ActiveTargets, ContactState, Peripherals};
use web_time::Duration;

type Engine = ActiveTargets<TestKey, MockAltMenu, MockHandwriting, Vec<TargetEvent<TestKey>>>;

const A: TestKey = TestKey::key("a");
const E: TestKey = TestKey::key("e");
const E_ACUTE: TestKey = TestKey::alternate("é");
const E_GRAVE: TestKey = TestKey::alternate("è");
const E_CIRC: TestKey = TestKey::alternate("ê");
const PAD: TestKey = TestKey::pad();

const KEY_ROW: Point = Point { x: 40.0, y: 0.0 };
const PAD_POINT: Point = Point { x: 60.0, y: 300.0 };

fn id(n: u32) -> ContactId {
    ContactId::new(n)
}

fn engine() -> Engine {
    let menu = MockAltMenu::new(Rect::new(0.0, -60.0, 120.0, 40.0))
        .with_alternates(E, [E_ACUTE, E_GRAVE, E_CIRC]);
    ActiveTargets::start(
        TimingConfig::default(),
        &mut MockPressSource::new(),
        Peripherals {
            menu,
            handwriting: MockHandwriting::new(),
            observer: Vec::new(),
        },
    )
    .expect("default timing is valid")
}

fn terminals(engine: &Engine) -> Vec<TargetEvent<TestKey>> {
    engine
        .observer()
        .iter()
        .filter(|e| e.is_terminal())
        .cloned()
        .collect()
}

// ── Alternate-character popup ───────────────────────────────────────────

#[test]
fn long_press_then_slide_commits_alternate() {
    let clock = VirtualClock::new();
    let mut engine = engine();
    let grave = engine.menu().slot_center(E, 1);
    let circ = engine.menu().slot_center(E, 2);

    PressScript::new()
        .start(0, id(1), Some(E), KEY_ROW)
        .slide(800, id(1), Some(E), grave)
        .slide(850, id(1), Some(E), circ)
        .end(900, id(1), Some(E), circ)
        .replay(&clock, &mut engine);

    let names: Vec<_> = engine.observer().iter().map(TargetEvent::name).collect();
    assert_eq!(
        names,
        [
            "activated",
            "long_pressed",
            "moved_out",
            "moved_in",
            "moved_out",
            "moved_in",
            "committed",
        ]
    );
    assert_eq!(terminals(&engine), [TargetEvent::Committed(E_CIRC)]);
    assert_eq!(engine.menu().calls(), [MenuCall::Show(E), MenuCall::Hide]);
}

#[test]
fn alternate_commit_does_not_arm_double_tap_on_base_key() {
    let clock = VirtualClock::new();
    let mut engine = engine();
    let acute = engine.menu().slot_center(E, 0);

    // Finger rests on the first slot when the popup opens, then lifts.
    PressScript::new()
        .start(0, id(1), Some(E), acute)
        .end(750, id(1), Some(E), acute)
        .start(800, id(2), Some(E), acute)
        .end(1_000, id(2), Some(E), acute)
        .replay(&clock, &mut engine);

    // The second press is an ordinary tap on `e`, not on the alternate.
    assert_eq!(
        terminals(&engine),
        [TargetEvent::Committed(E_ACUTE), TargetEvent::Committed(E)]
    );
}

#[test]
fn leaving_popup_for_plain_key_hides_it() {
    let clock = VirtualClock::new();
    let mut engine = engine();
    let acute = engine.menu().slot_center(E, 0);

    PressScript::new()
        .start(0, id(1), Some(E), acute)
        .slide(750, id(1), Some(A), KEY_ROW)
        .end(800, id(1), Some(A), KEY_ROW)
        .replay_and_settle(&clock, &mut engine, 1_000);

    assert_eq!(engine.menu().shown_for(), None);
    assert_eq!(terminals(&engine), [TargetEvent::Committed(A)]);
}

// ── Handwriting surface ─────────────────────────────────────────────────

#[test]
fn stroke_across_keys_fires_no_key_callbacks() {
    let clock = VirtualClock::new();
    let mut engine = engine();

    PressScript::new()
        .start(0, id(1), Some(PAD), PAD_POINT)
        .slide(40, id(1), Some(PAD), Point::new(80.0, 310.0))
        .slide(80, id(1), Some(A), KEY_ROW)
        .slide(120, id(1), Some(PAD), Point::new(90.0, 320.0))
        .end(900, id(1), Some(PAD), Point::new(90.0, 320.0))
        .replay_and_settle(&clock, &mut engine, 1_000);

    assert!(engine.observer().is_empty());
    assert_eq!(
        engine.handwriting().calls(),
        [
            HandwritingCall::Start(PAD_POINT),
            HandwritingCall::Move(Point::new(80.0, 310.0)),
            HandwritingCall::Move(Point::new(90.0, 320.0)),
            HandwritingCall::End(PAD),
        ]
    );
    assert_eq!(engine.active_count(), 0);
}

#[test]
fn keys_work_again_after_stroke_ends() {
    let clock = VirtualClock::new();
    let mut engine = engine();

    PressScript::new()
        .start(0, id(1), Some(PAD), PAD_POINT)
        .tap(id(2), A, 50, 30)
        .end(200, id(1), Some(PAD), PAD_POINT)
        .tap(id(3), A, 300, 30)
        .replay(&clock, &mut engine);

    // The tap during the stroke is locked out; the one after commits.
    assert_eq!(terminals(&engine), [TargetEvent::Committed(A)]);
    assert_eq!(engine.handwriting().calls().len(), 2);
}

#[test]
fn drag_from_key_onto_pad_becomes_stroke() {
    let clock = VirtualClock::new();
    let mut engine = engine();

    PressScript::new()
        .start(0, id(1), Some(A), KEY_ROW)
        .slide(100, id(1), Some(PAD), PAD_POINT)
        .replay(&clock, &mut engine);

    assert_eq!(
        engine.contact_state(id(1)),
        Some(&ContactState::HandwritingOwned(PAD))
    );
    assert!(engine.handwriting().calls().contains(&HandwritingCall::Start(PAD_POINT)));

    // No long-press once the pad owns the contact.
    engine.advance(clock.at(2_000));
    assert!(!engine.observer().iter().any(|e| e.name() == "long_pressed"));

    engine.press_end(&Press::at(Some(PAD), PAD_POINT), id(1), clock.at(2_100));
    assert!(terminals(&engine).is_empty());
    assert_eq!(
        engine.handwriting().calls().last(),
        Some(&HandwritingCall::End(PAD))
    );
}

#[test]
fn key_released_during_stroke_goes_to_handwriting() {
    let clock = VirtualClock::new();
    let mut engine = engine();

    PressScript::new()
        .start(0, id(1), Some(A), KEY_ROW)
        .start(100, id(2), Some(PAD), PAD_POINT)
        .end(200, id(1), Some(A), KEY_ROW)
        .replay(&clock, &mut engine);

    assert!(terminals(&engine).is_empty());
    assert_eq!(
        engine.handwriting().calls(),
        [HandwritingCall::Start(PAD_POINT), HandwritingCall::End(A)]
    );
    assert_eq!(engine.last_tap(), None);
}

#[test]
fn second_contact_on_pad_blocks_long_press_and_leaves_input_usable() {
    let clock = VirtualClock::new();
    let mut engine = engine();

    PressScript::new()
        .start(0, id(1), Some(E), KEY_ROW)
        .start(100, id(2), Some(PAD), PAD_POINT)
        .end(900, id(1), Some(E), KEY_ROW)
        .end(950, id(2), Some(PAD), PAD_POINT)
        .tap(id(3), A, 2_000, 40)
        .replay(&clock, &mut engine);

    let names: Vec<_> = engine.observer().iter().map(TargetEvent::name).collect();
    assert_eq!(
        names,
        ["activated", "new_target_will_activate", "activated", "committed"]
    );
    assert_eq!(engine.menu().show_count(), 0);
    assert_eq!(engine.menu().shown_for(), None);
    assert_eq!(terminals(&engine), [TargetEvent::Committed(A)]);
}

// ── Bare collaborators ──────────────────────────────────────────────────

#[test]
fn engine_runs_without_menu_or_handwriting() {
    let clock = VirtualClock::new();
    let mut source = MockPressSource::new();
    let config = TimingConfig {
        long_press_timeout: Duration::from_millis(300),
        double_tap_timeout: Duration::from_millis(200),
    };
    let mut engine = ActiveTargets::start(
        config,
        &mut source,
        Peripherals {
            menu: NoAltMenu,
            handwriting: NoHandwriting,
            observer: Vec::<TargetEvent<TestKey>>::new(),
        },
    )
    .expect("nonzero timeouts are valid");

    PressScript::new()
        .tap(id(1), A, 0, 350)
        .tap(id(1), A, 400, 30)
        .tap(id(1), A, 700, 30)
        .replay(&clock, &mut engine);

    let peripherals = engine.stop(&mut source);
    let names: Vec<_> = peripherals.observer.iter().map(TargetEvent::name).collect();
    assert_eq!(
        names,
        [
            "activated",
            "long_pressed",
            "committed",
            "activated",
            "double_tapped",
            "activated",
            "committed",
        ]
    );
    assert!(!source.is_subscribed());
}
