//! Keyboard input handling

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputSource, KeyState};

/// Without release events a key counts as held for this long after its
/// last press or auto-repeat. Must outlast the keyboard's repeat delay, or
/// the paddle stalls between the first press and the first repeat.
const HOLD_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameKey {
    Up,
    Down,
    Quit,
}

fn map_key(event: &KeyEvent) -> Option<GameKey> {
    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameKey::Quit)
        }
        KeyCode::Esc => Some(GameKey::Quit),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameKey::Up),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameKey::Down),
        _ => None,
    }
}

/// Turns a stream of key events into a held-keys snapshot
#[derive(Debug, Default)]
pub struct KeyTracker {
    release_events: bool,
    up: Option<Instant>,
    down: Option<Instant>,
    quit: bool,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: &KeyEvent, now: Instant) {
        let Some(key) = map_key(event) else { return };
        let pressed = event.kind != KeyEventKind::Release;

        match key {
            GameKey::Quit => self.quit |= pressed,
            GameKey::Up => self.up = pressed.then_some(now),
            GameKey::Down => self.down = pressed.then_some(now),
        }
    }

    pub fn snapshot(&self, now: Instant) -> KeyState {
        KeyState {
            up: self.is_held(self.up, now),
            down: self.is_held(self.down, now),
            quit: self.quit,
        }
    }

    fn is_held(&self, last_press: Option<Instant>, now: Instant) -> bool {
        match last_press {
            None => false,
            Some(_) if self.release_events => true,
            Some(at) => now.saturating_duration_since(at) < HOLD_WINDOW,
        }
    }
}

/// Input collaborator reading crossterm events without blocking
pub struct TerminalInput {
    tracker: KeyTracker,
}

impl TerminalInput {
    pub fn new(release_events: bool) -> Self {
        Self {
            tracker: KeyTracker::new(release_events),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<KeyState> {
        let now = Instant::now();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.tracker.apply(&key, now);
            }
        }
        Ok(self.tracker.snapshot(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_w_and_s_map_to_paddle_keys() {
        let now = Instant::now();
        let mut tracker = KeyTracker::new(true);

        tracker.apply(&press(KeyCode::Char('w')), now);
        assert_eq!(tracker.snapshot(now).direction(), -1);

        tracker.apply(&press(KeyCode::Char('S')), now);
        assert_eq!(tracker.snapshot(now).direction(), 0, "Both held cancel out");

        tracker.apply(&release(KeyCode::Char('w')), now);
        assert_eq!(tracker.snapshot(now).direction(), 1);
    }

    #[test]
    fn test_release_mode_holds_until_release() {
        let start = Instant::now();
        let mut tracker = KeyTracker::new(true);

        tracker.apply(&press(KeyCode::Char('s')), start);
        assert!(tracker.snapshot(start + Duration::from_secs(5)).down);

        tracker.apply(&release(KeyCode::Char('s')), start);
        assert!(!tracker.snapshot(start).down);
    }

    #[test]
    fn test_press_only_mode_expires() {
        let start = Instant::now();
        let mut tracker = KeyTracker::new(false);

        tracker.apply(&press(KeyCode::Char('w')), start);
        assert!(tracker.snapshot(start + Duration::from_millis(100)).up);
        assert!(!tracker.snapshot(start + Duration::from_millis(600)).up);
    }

    #[test]
    fn test_press_only_mode_bridges_repeat_delay() {
        let start = Instant::now();
        let mut tracker = KeyTracker::new(false);

        // Typical keyboard: first repeat arrives ~400ms after the press
        tracker.apply(&press(KeyCode::Char('s')), start);
        assert!(tracker.snapshot(start + Duration::from_millis(399)).down);

        let repeat = start + Duration::from_millis(400);
        tracker.apply(
            &KeyEvent::new_with_kind(KeyCode::Char('s'), KeyModifiers::NONE, KeyEventKind::Repeat),
            repeat,
        );
        assert!(tracker.snapshot(repeat + Duration::from_millis(450)).down);
        assert!(!tracker.snapshot(repeat + Duration::from_millis(550)).down);
    }

    #[test]
    fn test_quit_keys() {
        let now = Instant::now();

        let mut tracker = KeyTracker::new(false);
        tracker.apply(&press(KeyCode::Esc), now);
        assert!(tracker.snapshot(now).quit);

        let mut tracker = KeyTracker::new(false);
        tracker.apply(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), now);
        assert!(tracker.snapshot(now).quit);

        let mut tracker = KeyTracker::new(false);
        tracker.apply(&press(KeyCode::Char('c')), now);
        assert!(!tracker.snapshot(now).quit, "Plain 'c' is not quit");
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let now = Instant::now();
        let mut tracker = KeyTracker::new(true);
        tracker.apply(&press(KeyCode::Up), now);
        tracker.apply(&press(KeyCode::Char('x')), now);
        assert_eq!(tracker.snapshot(now), KeyState::default());
    }
}
