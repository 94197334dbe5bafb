/// Logical input seen by the simulation, independent of any backend.

use crate::entities::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

    fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
        }
    }
}

/// Which logical keys are held this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    held: [bool; 4],
}

impl KeyState {
    pub fn pressed(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.held[key.index()] = down;
    }

    /// Convenience for tests and scripted input.
    pub fn with(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for &key in keys {
            state.set(key, true);
        }
        state
    }
}

/// Everything the simulation step needs from the player for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub keys: KeyState,
    /// Mouse position at each left click received this frame, in order.
    pub clicks: Vec<Point>,
}

// ── Held-key tracking ─────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// OS key-repeat runs at ≥ 15 Hz, so 8 frames @ 60 FPS (≈133 ms) is always
/// refreshed before expiry.
pub const HOLD_WINDOW: u64 = 8;

/// Records the frame of the last press/repeat per key.
///
/// Keyboard-enhancement capable terminals send proper `Release` events and
/// clear keys immediately; classic terminals only repeat `Press`, so keys
/// expire after `HOLD_WINDOW` frames of silence.
#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    last_seen: [Option<u64>; 4],
}

impl KeyTracker {
    pub fn press(&mut self, key: Key, frame: u64) {
        self.last_seen[key.index()] = Some(frame);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen[key.index()] = None;
    }

    pub fn is_held(&self, key: Key, frame: u64) -> bool {
        self.last_seen[key.index()]
            .map(|last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn snapshot(&self, frame: u64) -> KeyState {
        let mut state = KeyState::default();
        for key in Key::ALL {
            state.set(key, self.is_held(key, frame));
        }
        state
    }
}
