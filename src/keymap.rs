use crate::key::Key;

const ZERO_CHARS: &[char] = &[' ', '0'];
const ONE_CHARS: &[char] = &[
    '.', ',', '\'', '?', '!', '"', '1', '-', '(', ')', '@', '/', ':',
];
const TWO_CHARS: &[char] = &['a', 'b', 'c', '2'];
const THREE_CHARS: &[char] = &['d', 'e', 'f', '3'];
const FOUR_CHARS: &[char] = &['g', 'h', 'i', '4'];
const FIVE_CHARS: &[char] = &['j', 'k', 'l', '5'];
const SIX_CHARS: &[char] = &['m', 'n', 'o', '6'];
const SEVEN_CHARS: &[char] = &['p', 'q', 'r', 's', '7'];
const EIGHT_CHARS: &[char] = &['t', 'u', 'v', '8'];
const NINE_CHARS: &[char] = &['w', 'x', 'y', 'z', '9'];
const STAR_CHARS: &[char] = &[
    '@', '/', ':', '_', ';', '+', '&', '%', '*', '[', ']', '{', '}',
];

const ABC_CYCLES: &[(Key, &[char])] = &[
    (Key::Zero, ZERO_CHARS),
    (Key::One, ONE_CHARS),
    (Key::Two, TWO_CHARS),
    (Key::Three, THREE_CHARS),
    (Key::Four, FOUR_CHARS),
    (Key::Five, FIVE_CHARS),
    (Key::Six, SIX_CHARS),
    (Key::Seven, SEVEN_CHARS),
    (Key::Eight, EIGHT_CHARS),
    (Key::Nine, NINE_CHARS),
    (Key::Star, STAR_CHARS),
];

/// Read-only lookup from a keypad key to its ordered character cycle.
///
/// Keys without an entry are inert: committing a run of them produces no
/// character. [`Keymap::ABC`] is the handset's ABC-mode table; hosts can
/// supply their own table for testing or other layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    cycles: &'static [(Key, &'static [char])],
}

impl Keymap {
    /// The ABC multi-tap table.
    pub const ABC: Keymap = Keymap { cycles: ABC_CYCLES };

    /// A keymap over a caller-provided cycle table. Cycles must be non-empty.
    pub const fn new(cycles: &'static [(Key, &'static [char])]) -> Self {
        Self { cycles }
    }

    /// The character cycle for `key`, if it has one.
    pub fn cycle(&self, key: Key) -> Option<&'static [char]> {
        self.cycles
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, chars)| *chars)
    }

    /// The character a finished run of `key` with `repeats` extra presses
    /// resolves to. `None` for inert keys.
    pub fn commit_char(&self, key: Key, repeats: u32) -> Option<char> {
        self.cycle(key)
            .map(|chars| chars[repeats as usize % chars.len()])
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap::ABC
    }
}
