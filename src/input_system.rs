//! Input handling: continuous snapshot + discrete action translation
//!
//! Two kinds of input feed the game. Held movement keys and the pointer
//! are accumulated into an `InputSnapshot` that the simulator polls once
//! per frame. Discrete actions (fire, phase transitions) are
//! edge-triggered: SDL events are translated into `GameAction`s by the
//! `InputSystem` and applied immediately, decoupling raw input from game
//! logic.

use crate::game::types::{ControlScheme, GamePhase};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Last-known state of the continuous inputs.
///
/// Updated from asynchronous SDL events; read by the simulator as a
/// consistent per-frame snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    // Yellow movement (WASD)
    pub key_w: bool,
    pub key_a: bool,
    pub key_s: bool,
    pub key_d: bool,

    // Red movement (arrows, keyboard scheme)
    pub key_up: bool,
    pub key_down: bool,
    pub key_left: bool,
    pub key_right: bool,

    pub mouse_x: i32,
    pub mouse_y: i32,
    pub mouse_down: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one SDL event into the snapshot. Non-movement events are
    /// ignored here; discrete actions go through `InputSystem` instead.
    pub fn apply_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown { keycode: Some(key), .. } => self.set_key(*key, true),
            Event::KeyUp { keycode: Some(key), .. } => self.set_key(*key, false),
            Event::MouseMotion { x, y, .. } => {
                self.mouse_x = *x;
                self.mouse_y = *y;
            }
            Event::MouseButtonDown { mouse_btn: MouseButton::Left, .. } => {
                self.mouse_down = true;
            }
            Event::MouseButtonUp { mouse_btn: MouseButton::Left, .. } => {
                self.mouse_down = false;
            }
            _ => {}
        }
    }

    fn set_key(&mut self, key: Keycode, pressed: bool) {
        match key {
            Keycode::W => self.key_w = pressed,
            Keycode::A => self.key_a = pressed,
            Keycode::S => self.key_s = pressed,
            Keycode::D => self.key_d = pressed,
            Keycode::Up => self.key_up = pressed,
            Keycode::Down => self.key_down = pressed,
            Keycode::Left => self.key_left = pressed,
            Keycode::Right => self.key_right = pressed,
            _ => {}
        }
    }
}

/// Discrete high-level actions triggered by input edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // Control-select screen
    SelectKeyboard,
    SelectMouse,

    // Start screen
    StartMatch,
    ChangeControls,

    // Playing
    FireYellow,
    FireRed,

    // Game-over screen
    Restart,
    QuitToTitle,

    // Window close
    Quit,
}

/// Translates SDL events into `GameAction`s, filtered by the current
/// phase and control scheme.
///
/// The context is updated from the game state before each frame's event
/// drain, mirroring the phase machine: the same key means different
/// things (or nothing) in different phases, and unrecognized input is
/// dropped.
pub struct InputSystem {
    context: GamePhase,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            context: GamePhase::ControlSelect,
        }
    }

    /// Sync the input context with the game phase. Call before polling.
    pub fn update_context(&mut self, phase: GamePhase) {
        self.context = phase;
    }

    /// Translate one event. Returns `None` for events with no discrete
    /// meaning in the current context.
    pub fn translate(&self, event: &Event, scheme: ControlScheme) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown { keycode: Some(key), repeat: false, .. } => {
                self.translate_key(*key, scheme)
            }
            Event::MouseButtonDown { mouse_btn: MouseButton::Left, .. } => {
                // Pointer-button fire only fires the mouse-controlled side
                if self.context == GamePhase::Playing && scheme == ControlScheme::Mouse {
                    Some(GameAction::FireRed)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Keyboard edge handling per phase.
    fn translate_key(&self, key: Keycode, scheme: ControlScheme) -> Option<GameAction> {
        match self.context {
            GamePhase::ControlSelect => match key {
                Keycode::Num1 => Some(GameAction::SelectKeyboard),
                Keycode::Num2 => Some(GameAction::SelectMouse),
                _ => None,
            },
            GamePhase::Start => match key {
                Keycode::Space => Some(GameAction::StartMatch),
                Keycode::C => Some(GameAction::ChangeControls),
                _ => None,
            },
            GamePhase::Playing => match key {
                Keycode::LCtrl => Some(GameAction::FireYellow),
                // Keyboard fire only fires the keyboard-controlled side
                Keycode::RCtrl if scheme == ControlScheme::Keyboard => Some(GameAction::FireRed),
                _ => None,
            },
            GamePhase::GameOver => match key {
                Keycode::R => Some(GameAction::Restart),
                Keycode::Escape => Some(GameAction::QuitToTitle),
                _ => None,
            },
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_in(phase: GamePhase) -> InputSystem {
        let mut input = InputSystem::new();
        input.update_context(phase);
        input
    }

    #[test]
    fn test_control_select_keys() {
        let input = system_in(GamePhase::ControlSelect);
        assert_eq!(
            input.translate_key(Keycode::Num1, ControlScheme::Keyboard),
            Some(GameAction::SelectKeyboard)
        );
        assert_eq!(
            input.translate_key(Keycode::Num2, ControlScheme::Keyboard),
            Some(GameAction::SelectMouse)
        );
        // Space means nothing until the start screen
        assert_eq!(input.translate_key(Keycode::Space, ControlScheme::Keyboard), None);
    }

    #[test]
    fn test_start_screen_keys() {
        let input = system_in(GamePhase::Start);
        assert_eq!(
            input.translate_key(Keycode::Space, ControlScheme::Keyboard),
            Some(GameAction::StartMatch)
        );
        assert_eq!(
            input.translate_key(Keycode::C, ControlScheme::Keyboard),
            Some(GameAction::ChangeControls)
        );
    }

    #[test]
    fn test_fire_keys_respect_scheme() {
        let input = system_in(GamePhase::Playing);
        assert_eq!(
            input.translate_key(Keycode::LCtrl, ControlScheme::Mouse),
            Some(GameAction::FireYellow)
        );
        assert_eq!(
            input.translate_key(Keycode::RCtrl, ControlScheme::Keyboard),
            Some(GameAction::FireRed)
        );
        // RCtrl does not fire red when red is on the mouse
        assert_eq!(input.translate_key(Keycode::RCtrl, ControlScheme::Mouse), None);
    }

    #[test]
    fn test_game_over_keys() {
        let input = system_in(GamePhase::GameOver);
        assert_eq!(
            input.translate_key(Keycode::R, ControlScheme::Keyboard),
            Some(GameAction::Restart)
        );
        assert_eq!(
            input.translate_key(Keycode::Escape, ControlScheme::Keyboard),
            Some(GameAction::QuitToTitle)
        );
        // Fire keys are dead outside Playing
        assert_eq!(input.translate_key(Keycode::LCtrl, ControlScheme::Keyboard), None);
    }

    #[test]
    fn test_snapshot_tracks_keys() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_key(Keycode::W, true);
        snapshot.set_key(Keycode::Left, true);
        assert!(snapshot.key_w && snapshot.key_left);

        snapshot.set_key(Keycode::W, false);
        assert!(!snapshot.key_w);
        assert!(snapshot.key_left);
    }
}
