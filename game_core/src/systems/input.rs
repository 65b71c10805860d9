use std::io;

use crate::{PaddleIntent, PlayerSlot};

/// Keys the match reads each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

/// Up/down keys for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
}

impl KeyBindings {
    /// Left paddle on W/S, right paddle on the arrow keys
    pub fn for_slot(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::Left => Self {
                up: Key::W,
                down: Key::S,
            },
            PlayerSlot::Right => Self {
                up: Key::Up,
                down: Key::Down,
            },
        }
    }
}

/// Keyboard and window event source driven once per tick
pub trait InputSource {
    /// Refresh key and quit state from pending events
    fn poll(&mut self) -> io::Result<()>;

    /// Whether `key` is currently held down
    fn is_held(&self, key: Key) -> bool;

    fn quit_requested(&self) -> bool;
}

/// Read both paddles' intents from the current key state
pub fn sample_intents<I: InputSource + ?Sized>(input: &I) -> [PaddleIntent; 2] {
    PlayerSlot::ALL.map(|slot| {
        let keys = KeyBindings::for_slot(slot);
        PaddleIntent::new(input.is_held(keys.up), input.is_held(keys.down))
    })
}
