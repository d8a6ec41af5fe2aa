//! Soft-drop hold tracking for terminal environments.
//!
//! Most terminals only report key presses. While a key is held they resend the
//! press at the keyboard's repeat rate, so a hold is "a press seen recently".
//! When no soft-drop press arrives for the release timeout, the hold ends as if
//! the key had been released. Terminals that do report releases end it at once.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, map_key};
use crate::types::GameAction;

// Long enough to bridge the keyboard's initial repeat delay.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 600;

/// Turns raw key events into game actions, adding `SoftDropOff` when the
/// soft-drop key is released or times out.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    /// Time since the last soft-drop press, advanced by [`InputHandler::update`]
    since_soft_drop_key_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            soft_drop_held: false,
            since_soft_drop_key_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Dispatch a full crossterm event on its kind
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Release => self.handle_key_release(key.code),
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let action = handle_key_event(key)?;
                self.on_action(action)
            }
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = map_key(code)?;
        self.on_action(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        if map_key(code) == Some(GameAction::SoftDropOn) && self.soft_drop_held {
            self.release();
            return Some(GameAction::SoftDropOff);
        }
        None
    }

    /// Advance the release timer. Returns `SoftDropOff` when the hold times out.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if !self.soft_drop_held {
            return None;
        }
        self.since_soft_drop_key_ms = self.since_soft_drop_key_ms.saturating_add(elapsed_ms);
        if self.since_soft_drop_key_ms > self.key_release_timeout_ms {
            self.release();
            return Some(GameAction::SoftDropOff);
        }
        None
    }

    /// Forget any hold, e.g. after the engine reset itself
    pub fn reset(&mut self) {
        self.release();
    }

    fn on_action(&mut self, action: GameAction) -> Option<GameAction> {
        if action == GameAction::Restart {
            // Restart clears soft drop in the engine too
            self.release();
            return Some(action);
        }
        if action != GameAction::SoftDropOn {
            return Some(action);
        }
        self.since_soft_drop_key_ms = 0;
        if self.soft_drop_held {
            // Key repeat of a hold already in effect
            None
        } else {
            self.soft_drop_held = true;
            Some(GameAction::SoftDropOn)
        }
    }

    fn release(&mut self) {
        self.soft_drop_held = false;
        self.since_soft_drop_key_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_starts_hold_once() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Down), Some(GameAction::SoftDropOn));
        assert!(ih.is_soft_drop_held());
        // Terminal key repeat
        assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        assert_eq!(ih.handle_key_press(KeyCode::Char('s')), None);
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.handle_key_press(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(ih.handle_key_press(KeyCode::Char('x')), None);
        assert!(!ih.is_soft_drop_held());
    }

    #[test]
    fn test_release_event_ends_hold() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Down);
        assert_eq!(ih.handle_key_release(KeyCode::Down), Some(GameAction::SoftDropOff));
        assert!(!ih.is_soft_drop_held());
        // Nothing held anymore
        assert_eq!(ih.handle_key_release(KeyCode::Down), None);
        assert_eq!(ih.handle_key_release(KeyCode::Left), None);
    }

    #[test]
    fn test_auto_release_after_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);

        assert_eq!(ih.update(30), None);
        assert_eq!(ih.update(20), None);
        assert_eq!(ih.update(1), Some(GameAction::SoftDropOff));
        assert!(!ih.is_soft_drop_held());
        assert_eq!(ih.update(100), None);
    }

    #[test]
    fn test_repeat_press_extends_hold() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);
        assert_eq!(ih.update(40), None);
        assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        assert_eq!(ih.update(40), None);
        assert!(ih.is_soft_drop_held());
    }

    #[test]
    fn test_non_drop_key_does_not_extend_hold() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);
        assert_eq!(ih.update(40), None);
        ih.handle_key_press(KeyCode::Left);
        assert_eq!(ih.update(40), Some(GameAction::SoftDropOff));
    }

    #[test]
    fn test_handle_key_dispatches_on_kind() {
        let mut ih = InputHandler::new();
        let press = KeyEvent::new_with_kind(
            KeyCode::Down,
            crossterm::event::KeyModifiers::NONE,
            KeyEventKind::Press,
        );
        let release = KeyEvent::new_with_kind(
            KeyCode::Down,
            crossterm::event::KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(ih.handle_key(press), Some(GameAction::SoftDropOn));
        assert_eq!(ih.handle_key(release), Some(GameAction::SoftDropOff));
    }

    #[test]
    fn test_reset_clears_hold() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Down);
        ih.reset();
        assert!(!ih.is_soft_drop_held());
        assert_eq!(ih.update(10_000), None);
    }

    #[test]
    fn test_restart_ends_hold() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Down), Some(GameAction::SoftDropOn));
        assert_eq!(ih.handle_key_press(KeyCode::Char('r')), Some(GameAction::Restart));
        assert!(!ih.is_soft_drop_held());
        // Still holding the key: the repeat turns soft drop back on
        assert_eq!(ih.handle_key_press(KeyCode::Down), Some(GameAction::SoftDropOn));
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let ih = InputHandler::default();
        assert!(ih.key_release_timeout_ms() > 0);
    }
}
