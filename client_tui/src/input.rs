//! Keyboard input handling

use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputSource, Key};

/// How long a key counts as held after its last press when the terminal
/// does not report releases. Must bridge the gap between auto-repeats.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Held-key bookkeeping.
///
/// Terminals with keyboard enhancement report releases, so a key is held
/// from press until release. Everywhere else a key is held for
/// [`HOLD_WINDOW`] after its most recent press or auto-repeat.
#[derive(Debug)]
pub struct KeyTracker {
    last_seen: HashMap<Key, Instant>,
    reports_release: bool,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            reports_release,
        }
    }

    pub fn press(&mut self, key: Key, at: Instant) {
        self.last_seen.insert(key, at);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    pub fn is_held(&self, key: Key, now: Instant) -> bool {
        match self.last_seen.get(&key) {
            None => false,
            Some(_) if self.reports_release => true,
            Some(seen) => now.saturating_duration_since(*seen) <= HOLD_WINDOW,
        }
    }
}

/// [`InputSource`] backed by crossterm events
#[derive(Debug)]
pub struct TerminalInput {
    keys: KeyTracker,
    quit: bool,
    sampled_at: Instant,
}

impl TerminalInput {
    pub fn new(reports_release: bool) -> Self {
        Self {
            keys: KeyTracker::new(reports_release),
            quit: false,
            sampled_at: Instant::now(),
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, at: Instant) {
        if is_quit(&key_event) {
            if key_event.kind == KeyEventKind::Press {
                self.quit = true;
            }
            return;
        }

        let Some(key) = map_key(key_event.code) else {
            return;
        };
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.keys.press(key, at),
            KeyEventKind::Release => self.keys.release(key),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<()> {
        let now = Instant::now();
        // Drain everything pending without blocking the tick
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, now);
            }
        }
        self.sampled_at = now;
        Ok(())
    }

    fn is_held(&self, key: Key) -> bool {
        self.keys.is_held(key, self.sampled_at)
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::W),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

fn is_quit(key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
