#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use osk_core::{ContactId, Point, Press, TargetEvent, TimingConfig};
use osk_harness::{MockAltMenu, MockHandwriting, MockPressSource, Rect, TestKey, VirtualClock};
use osk_targets::{ActiveTargets, ContactState, Peripherals};

const KEYS: [TestKey; 5] = [
    TestKey::key("a"),
    TestKey::key("e"),
    TestKey::selection("candidate"),
    TestKey::alternate("é"),
    TestKey::pad(),
];

#[derive(Debug, Arbitrary)]
enum Step {
    Start { contact: u8, key: u8, y: i8 },
    Move { contact: u8, key: u8, y: i8, moved: bool },
    End { contact: u8 },
    Idle,
    Clear,
}

fn press(key: u8, y: i8, moved: bool) -> Press<TestKey> {
    Press {
        // One byte value in six lands on empty space.
        target: KEYS.get(usize::from(key % 6)).copied(),
        position: Point::new(20.0, f32::from(y)),
        moved,
    }
}

fuzz_target!(|steps: Vec<(Step, u16)>| {
    let clock = VirtualClock::new();
    let menu = MockAltMenu::new(Rect::new(0.0, -60.0, 120.0, 40.0))
        .with_alternates(TestKey::key("e"), [TestKey::alternate("é")]);
    let Ok(mut engine) = ActiveTargets::start(
        TimingConfig::default(),
        &mut MockPressSource::new(),
        Peripherals {
            menu,
            handwriting: MockHandwriting::new(),
            observer: Vec::<TargetEvent<TestKey>>::new(),
        },
    ) else {
        return;
    };

    let mut ms = 0u64;
    for (step, gap) in steps.iter().take(512) {
        ms += u64::from(*gap % 2_000);
        let now = clock.at(ms);
        match step {
            Step::Start { contact, key, y } => {
                let id = ContactId::new(u32::from(*contact % 8));
                engine.press_start(&press(*key, *y, false), id, now);
            }
            Step::Move {
                contact,
                key,
                y,
                moved,
            } => {
                let id = ContactId::new(u32::from(*contact % 8));
                engine.press_move(&press(*key, *y, *moved), id, now);
            }
            Step::End { contact } => {
                let id = ContactId::new(u32::from(*contact % 8));
                engine.press_end(&press(5, 0, false), id, now);
            }
            Step::Idle => engine.advance(now),
            Step::Clear => engine.clear_all_targets(),
        }

        // Post-conditions that must always hold:
        assert!(engine.active_count() <= 8, "table grew past the id space");
        if let Some(owner) = engine.long_press_pending() {
            assert!(
                matches!(engine.contact_state(owner), Some(ContactState::Tracked(_))),
                "long-press owned by an untracked contact"
            );
        }
    }

    engine.clear_all_targets();
    assert_eq!(engine.active_count(), 0);
});
