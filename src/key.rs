/// Keys on the handset's physical keypad.
///
/// This enum is the platform-agnostic identity of a press. Capture logs store
/// raw integer codes; hosts map them through [`Key::from_code`] before feeding
/// the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The '0' key (space in ABC mode).
    Zero,
    /// The '1' key (punctuation cycle in ABC mode).
    One,
    /// The '2' key (abc).
    Two,
    /// The '3' key (def).
    Three,
    /// The '4' key (ghi).
    Four,
    /// The '5' key (jkl).
    Five,
    /// The '6' key (mno).
    Six,
    /// The '7' key (pqrs).
    Seven,
    /// The '8' key (tuv).
    Eight,
    /// The '9' key (wxyz).
    Nine,
    /// The '*' key (symbol cycle in ABC mode).
    Star,
    /// The '#' key. Switches input method on the handset; inert here.
    Hash,
    /// Left soft key. Inert.
    MenuLeft,
    /// Right soft key. Deletes the character before the cursor.
    MenuRight,
    /// Menu up. Moves the cursor left.
    MenuUp,
    /// Menu down. Moves the cursor right.
    MenuDown,
    /// The green call key. Inert.
    CallAccept,
    /// The red call key. Inert.
    CallReject,
    /// A code outside the known keypad set. Kept so runs of an unknown key
    /// still group correctly; never produces output.
    Other(u16),
}

impl Key {
    /// Maps a raw capture-log code to a key. Total: unknown codes become
    /// [`Key::Other`] rather than an error.
    pub fn from_code(code: u16) -> Key {
        match code {
            0 => Key::Zero,
            1 => Key::One,
            2 => Key::Two,
            3 => Key::Three,
            4 => Key::Four,
            5 => Key::Five,
            6 => Key::Six,
            7 => Key::Seven,
            8 => Key::Eight,
            9 => Key::Nine,
            10 => Key::Star,
            11 => Key::Hash,
            100 => Key::MenuLeft,
            101 => Key::MenuRight,
            102 => Key::MenuUp,
            103 => Key::MenuDown,
            104 => Key::CallAccept,
            105 => Key::CallReject,
            other => Key::Other(other),
        }
    }

    /// The raw code this key appears as in a capture log.
    pub fn code(self) -> u16 {
        match self {
            Key::Zero => 0,
            Key::One => 1,
            Key::Two => 2,
            Key::Three => 3,
            Key::Four => 4,
            Key::Five => 5,
            Key::Six => 6,
            Key::Seven => 7,
            Key::Eight => 8,
            Key::Nine => 9,
            Key::Star => 10,
            Key::Hash => 11,
            Key::MenuLeft => 100,
            Key::MenuRight => 101,
            Key::MenuUp => 102,
            Key::MenuDown => 103,
            Key::CallAccept => 104,
            Key::CallReject => 105,
            Key::Other(code) => code,
        }
    }
}

/// A single timestamped key press from a capture log.
///
/// Events arrive in occurrence order; the timestamp is only used to measure
/// the gap to the previous press, never to resequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Milliseconds since capture start. Non-negative at the parse boundary.
    pub time: i64,
    /// The key that was pressed.
    pub key: Key,
}

impl KeyEvent {
    pub fn new(time: i64, key: Key) -> Self {
        Self { time, key }
    }
}
