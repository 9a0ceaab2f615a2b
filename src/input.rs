/// Folds terminal key events into one `PlayerInput` per frame.
///
/// Instead of acting on each key event individually, we keep the frame number
/// of the last press/repeat event for every key and treat a key as held while
/// that stamp is fresh.  Terminals with keyboard enhancement report releases,
/// which drop the key at once; classic terminals only send repeated presses,
/// so keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sideways::entities::PlayerInput;

/// A key is considered held if its last press/repeat event arrived within
/// this many frames.  The OS key-repeat rate is at least 15 Hz, so 8 frames
/// at 60 FPS is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

#[derive(Default)]
pub struct KeyTracker {
    /// Each held key → the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    quit: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one terminal event seen during `frame`.
    pub fn handle(&mut self, event: &Event, frame: u64) {
        let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
            return;
        };
        let code = normalize(*code);
        match kind {
            KeyEventKind::Press => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    _ => {}
                }
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    /// Quit is sticky; everything else reflects keys held as of `frame`.
    pub fn snapshot(&self, frame: u64) -> PlayerInput {
        let held = |keys: &[KeyCode]| keys.iter().any(|k| self.is_held(k, frame));
        PlayerInput {
            left: held(&[KeyCode::Left, KeyCode::Char('a')]),
            right: held(&[KeyCode::Right, KeyCode::Char('d')]),
            up: held(&[KeyCode::Up, KeyCode::Char('w')]),
            down: held(&[KeyCode::Down, KeyCode::Char('s')]),
            fire: held(&[KeyCode::Enter, KeyCode::Char(' ')]),
            quit: self.quit,
        }
    }

    fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }
}

/// Treat upper- and lower-case letters as the same key.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
