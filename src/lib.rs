pub mod buffer;
pub mod decoder;
pub mod key;
pub mod keymap;
pub mod source;

pub use crate::buffer::TextBuffer;
pub use crate::decoder::{Decoder, DecoderSnapshot, PendingRun, RUN_TIMEOUT_MS, decode};
pub use crate::key::{Key, KeyEvent};
pub use crate::keymap::Keymap;
pub use crate::source::{LogError, parse_record, read_events};
