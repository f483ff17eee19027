use proptest::prelude::*;
use tap_mini::{Decoder, Key, KeyEvent, Keymap, decode};

// Codes 0..200 cover every known key plus plenty of unknown ones.
fn event_strategy() -> impl Strategy<Value = KeyEvent> {
    (0i64..5_000_000, 0u16..200).prop_map(|(time, code)| KeyEvent::new(time, Key::from_code(code)))
}

fn events_strategy() -> impl Strategy<Value = Vec<KeyEvent>> {
    prop::collection::vec(event_strategy(), 0..200)
}

// Keys with a character cycle in the ABC table.
fn character_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Zero),
        Just(Key::One),
        Just(Key::Two),
        Just(Key::Three),
        Just(Key::Four),
        Just(Key::Five),
        Just(Key::Six),
        Just(Key::Seven),
        Just(Key::Eight),
        Just(Key::Nine),
        Just(Key::Star),
    ]
}

// Keys that neither produce characters nor edit the buffer.
fn inert_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Hash),
        Just(Key::MenuLeft),
        Just(Key::CallAccept),
        Just(Key::CallReject),
        (110u16..500).prop_map(Key::from_code),
    ]
}

proptest! {
    #[test]
    fn decode_never_panics_and_cursor_stays_in_bounds(events in events_strategy()) {
        let mut decoder = Decoder::new(Keymap::ABC);
        for event in events {
            decoder.push(event);
            let snap = decoder.snapshot();
            prop_assert!(snap.cursor <= snap.buffer_len);
        }
    }

    #[test]
    fn decode_is_deterministic(events in events_strategy()) {
        let first = decode(events.iter().copied(), Keymap::ABC);
        let second = decode(events.iter().copied(), Keymap::ABC);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_event_never_commits(event in event_strategy()) {
        let buffer = decode([event], Keymap::ABC);
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn inert_keys_never_touch_the_buffer(
        keys in prop::collection::vec(inert_key_strategy(), 0..50),
        gaps in prop::collection::vec(0i64..5000, 0..50),
    ) {
        let mut time = 0i64;
        let mut events = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            time += gaps.get(i).copied().unwrap_or(100);
            events.push(KeyEvent::new(time, *key));
        }
        let buffer = decode(events, Keymap::ABC);
        prop_assert!(buffer.is_empty());
        prop_assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn buffer_never_outgrows_the_event_count(events in events_strategy()) {
        let count = events.len();
        let buffer = decode(events, Keymap::ABC);
        prop_assert!(buffer.len() <= count);
    }

    #[test]
    fn terminated_run_commits_the_cycle_position(
        key in character_key_strategy(),
        presses in 1u32..12,
        gap in 0i64..=1000,
    ) {
        let mut events = Vec::new();
        let mut time = 0i64;
        for _ in 0..presses {
            events.push(KeyEvent::new(time, key));
            time += gap;
        }
        events.push(KeyEvent::new(time, Key::Hash));

        let cycle = Keymap::ABC.cycle(key).expect("character key");
        let expected = cycle[(presses as usize - 1) % cycle.len()];
        let buffer = decode(events, Keymap::ABC);
        prop_assert_eq!(buffer.to_string(), expected.to_string());
    }

    #[test]
    fn timeout_starts_a_fresh_run_of_the_same_key(
        key in character_key_strategy(),
        presses in 1u32..12,
    ) {
        // A burst of presses, a long pause, one more press, a terminator.
        let mut events = Vec::new();
        let mut time = 0i64;
        for _ in 0..presses {
            events.push(KeyEvent::new(time, key));
            time += 100;
        }
        time += 2000;
        events.push(KeyEvent::new(time, key));
        events.push(KeyEvent::new(time + 100, Key::Hash));

        let cycle = Keymap::ABC.cycle(key).expect("character key");
        let first = cycle[(presses as usize - 1) % cycle.len()];
        let second = cycle[0];
        let buffer = decode(events, Keymap::ABC);
        prop_assert_eq!(buffer.to_string(), format!("{first}{second}"));
    }

    #[test]
    fn dropping_the_last_event_only_loses_its_own_effects(
        events in prop::collection::vec(event_strategy(), 1..100),
    ) {
        // The trailing run never commits, so the full stream's buffer can
        // only differ from the truncated stream's by what the last event
        // itself triggered: at most one commit plus one edit effect.
        let full = decode(events.iter().copied(), Keymap::ABC);
        let truncated = decode(events[..events.len() - 1].iter().copied(), Keymap::ABC);
        let diff = full.len().abs_diff(truncated.len());
        prop_assert!(diff <= 2);
    }
}

#[test]
fn empty_stream_properties_hold() {
    let buffer = decode(std::iter::empty(), Keymap::ABC);
    assert!(buffer.is_empty());
    assert_eq!(buffer.cursor(), 0);
    assert_eq!(buffer.to_string(), "");
}
