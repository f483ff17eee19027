use tracing::trace;

use crate::buffer::TextBuffer;
use crate::key::{Key, KeyEvent};
use crate::keymap::Keymap;

/// Maximum gap in milliseconds between presses of the same key for them to
/// belong to one run.
pub const RUN_TIMEOUT_MS: i64 = 1000;

/// The in-progress key run, carried between events.
///
/// `repeats` counts the extra presses since the run started, so a run of `k`
/// presses commits with `repeats == k - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRun {
    pub key: Key,
    pub last_time: i64,
    pub repeats: u32,
}

/// Observable decoder state, for hosts and tests.
#[derive(Debug, Clone)]
pub struct DecoderSnapshot {
    pub pending: Option<PendingRun>,
    pub buffer_len: usize,
    pub cursor: usize,
}

/// The multi-tap decoding state machine.
///
/// Feed it timestamped presses in occurrence order with [`Decoder::push`] and
/// take the reconstructed message with [`Decoder::finish`]. A run commits only
/// when a later event ends it (different key, or a gap past
/// [`RUN_TIMEOUT_MS`]), so the trailing run of a stream is dropped: there is
/// no event after it to end it. Edit keys act the same way, one event late,
/// because their effect keys off the run carried in from the previous event.
/// Both behaviors match the handset logs this crate reconstructs and are kept
/// deliberately.
#[derive(Debug, Clone)]
pub struct Decoder {
    keymap: Keymap,
    pending: Option<PendingRun>,
    buffer: TextBuffer,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new(Keymap::ABC)
    }
}

impl Decoder {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            pending: None,
            buffer: TextBuffer::new(),
        }
    }

    pub fn snapshot(&self) -> DecoderSnapshot {
        DecoderSnapshot {
            pending: self.pending,
            buffer_len: self.buffer.len(),
            cursor: self.buffer.cursor(),
        }
    }

    /// The message reconstructed so far.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Processes one key press.
    pub fn push(&mut self, event: KeyEvent) {
        // First event only seeds the run; nothing to commit yet.
        let Some(run) = self.pending else {
            self.pending = Some(PendingRun {
                key: event.key,
                last_time: event.time,
                repeats: 0,
            });
            return;
        };

        let gap = event.time - run.last_time;
        let committed = event.key != run.key || gap > RUN_TIMEOUT_MS;
        if committed {
            if let Some(ch) = self.keymap.commit_char(run.key, run.repeats) {
                trace!(target: "decode", key = ?run.key, repeats = run.repeats, ch = %ch, cursor = self.buffer.cursor(), "commit");
                self.buffer.insert(ch);
            }
        }

        // Edit effects key off the run carried in from the previous event,
        // not the event being processed. A control press therefore acts one
        // event late, and the last press of a control run that ends the
        // stream never acts at all.
        match run.key {
            Key::MenuRight => {
                trace!(target: "decode", cursor = self.buffer.cursor(), "delete_backward");
                self.buffer.delete_backward();
            }
            Key::MenuUp => self.buffer.move_left(),
            Key::MenuDown => self.buffer.move_right(),
            _ => {}
        }

        self.pending = Some(PendingRun {
            key: event.key,
            last_time: event.time,
            repeats: if committed {
                0
            } else {
                run.repeats.saturating_add(1)
            },
        });
    }

    /// Ends the stream and returns the message. The pending run is dropped
    /// uncommitted.
    pub fn finish(self) -> TextBuffer {
        self.buffer
    }
}

/// Decodes a full event stream in one pass. Pure: the same stream always
/// produces the same buffer.
pub fn decode<I>(events: I, keymap: Keymap) -> TextBuffer
where
    I: IntoIterator<Item = KeyEvent>,
{
    let mut decoder = Decoder::new(keymap);
    for event in events {
        decoder.push(event);
    }
    decoder.finish()
}
