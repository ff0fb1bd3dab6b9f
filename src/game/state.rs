//! The game state machine
//!
//! Phases: control-select -> start -> playing -> game-over, with a
//! restart edge back to playing and a quit edge back to start. Discrete
//! input actions drive every transition except playing -> game-over,
//! which the simulator declares. Unrecognized actions in a phase are
//! ignored.

use crate::effects::EffectSystem;
use crate::game::types::{ControlScheme, GamePhase, Side, SimResult};
use crate::input_system::{GameAction, InputSnapshot};
use crate::simulation::MatchState;

/// Top-level game controller: owns the phase, the control scheme, the
/// match state and the effect pools.
pub struct Game {
    phase: GamePhase,
    scheme: ControlScheme,
    winner: Option<Side>,
    pub match_state: MatchState,
    pub effects: EffectSystem,
}

impl Game {
    pub fn new() -> Self {
        Game {
            phase: GamePhase::ControlSelect,
            scheme: ControlScheme::Keyboard,
            winner: None,
            match_state: MatchState::new(),
            effects: EffectSystem::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn scheme(&self) -> ControlScheme {
        self.scheme
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Apply one discrete action. The transition table is closed: an
    /// action that has no meaning in the current phase does nothing.
    pub fn apply_action(&mut self, action: GameAction) {
        match (self.phase, action) {
            (GamePhase::ControlSelect, GameAction::SelectKeyboard) => {
                self.scheme = ControlScheme::Keyboard;
                self.phase = GamePhase::Start;
            }
            (GamePhase::ControlSelect, GameAction::SelectMouse) => {
                self.scheme = ControlScheme::Mouse;
                self.phase = GamePhase::Start;
            }
            (GamePhase::Start, GameAction::StartMatch) => {
                self.reset_match();
                self.phase = GamePhase::Playing;
            }
            (GamePhase::Start, GameAction::ChangeControls) => {
                self.phase = GamePhase::ControlSelect;
            }
            (GamePhase::Playing, GameAction::FireYellow) => {
                self.match_state.fire(Side::Yellow);
            }
            (GamePhase::Playing, GameAction::FireRed) => {
                self.match_state.fire(Side::Red);
            }
            (GamePhase::GameOver, GameAction::Restart) => {
                self.reset_match();
                self.phase = GamePhase::Playing;
            }
            (GamePhase::GameOver, GameAction::QuitToTitle) => {
                self.phase = GamePhase::Start;
            }
            _ => {
                // No other transitions exist
            }
        }
    }

    /// One frame tick. The simulator runs only while playing; the effect
    /// pools keep animating through game-over so the victory burst plays
    /// out on the winner screen.
    pub fn tick(&mut self, input: &InputSnapshot) {
        match self.phase {
            GamePhase::Playing => {
                let result = self.match_state.advance(input, self.scheme, &mut self.effects);
                self.effects.update();
                if let SimResult::Winner(side) = result {
                    self.winner = Some(side);
                    self.phase = GamePhase::GameOver;
                }
            }
            GamePhase::GameOver => {
                self.effects.update();
            }
            GamePhase::ControlSelect | GamePhase::Start => {}
        }
    }

    /// Full reset: fresh ships, health, bullets and flash timers, and
    /// empty effect pools.
    fn reset_match(&mut self) {
        self.match_state = MatchState::new();
        self.effects.clear();
        self.winner = None;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Bullet;
    use crate::game::types::{BULLET_VEL, BULLET_WIDTH, MAX_HEALTH};

    fn game_in_playing() -> Game {
        let mut game = Game::new();
        game.apply_action(GameAction::SelectKeyboard);
        game.apply_action(GameAction::StartMatch);
        game
    }

    #[test]
    fn test_control_select_records_scheme() {
        let mut game = Game::new();
        assert_eq!(game.phase(), GamePhase::ControlSelect);

        game.apply_action(GameAction::SelectMouse);
        assert_eq!(game.phase(), GamePhase::Start);
        assert_eq!(game.scheme(), ControlScheme::Mouse);
    }

    #[test]
    fn test_start_to_playing_and_back_to_select() {
        let mut game = Game::new();
        game.apply_action(GameAction::SelectKeyboard);
        game.apply_action(GameAction::ChangeControls);
        assert_eq!(game.phase(), GamePhase::ControlSelect);

        game.apply_action(GameAction::SelectKeyboard);
        game.apply_action(GameAction::StartMatch);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_unrecognized_actions_are_ignored() {
        let mut game = Game::new();
        game.apply_action(GameAction::Restart);
        game.apply_action(GameAction::FireYellow);
        game.apply_action(GameAction::StartMatch);
        assert_eq!(game.phase(), GamePhase::ControlSelect);

        let mut playing = game_in_playing();
        playing.apply_action(GameAction::SelectMouse);
        assert_eq!(playing.phase(), GamePhase::Playing);
        assert_eq!(playing.scheme(), ControlScheme::Keyboard);
    }

    #[test]
    fn test_fire_only_lands_in_playing() {
        let mut game = Game::new();
        game.apply_action(GameAction::FireYellow);
        assert!(game.match_state.yellow_bullets.is_empty());

        let mut playing = game_in_playing();
        playing.apply_action(GameAction::FireYellow);
        assert_eq!(playing.match_state.yellow_bullets.len(), 1);
    }

    #[test]
    fn test_point_blank_match_to_game_over_and_restart() {
        let mut game = game_in_playing();
        let input = InputSnapshot::new();

        // Land ten point-blank hits on the red ship
        for _ in 0..MAX_HEALTH {
            let red = game.match_state.red_ship;
            game.match_state
                .yellow_bullets
                .push(Bullet::new(red.x - BULLET_WIDTH as i32 - BULLET_VEL, red.y + 10));
            game.tick(&input);
        }

        assert_eq!(game.match_state.red_health, 0);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.winner(), Some(Side::Yellow));

        // Restart performs a full reset
        game.apply_action(GameAction::Restart);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.winner(), None);
        assert_eq!(game.match_state.red_health, MAX_HEALTH);
        assert_eq!(game.match_state.yellow_health, MAX_HEALTH);
        assert!(game.match_state.yellow_bullets.is_empty());
        assert!(game.match_state.red_bullets.is_empty());
        assert_eq!(game.effects.particle_count(), 0);
        assert_eq!(game.effects.ring_count(), 0);
    }

    #[test]
    fn test_game_over_quit_returns_to_start() {
        let mut game = game_in_playing();
        game.match_state.red_health = 1;
        let red = game.match_state.red_ship;
        game.match_state
            .yellow_bullets
            .push(Bullet::new(red.x - BULLET_WIDTH as i32 - BULLET_VEL, red.y + 10));
        game.tick(&InputSnapshot::new());
        assert_eq!(game.phase(), GamePhase::GameOver);

        game.apply_action(GameAction::QuitToTitle);
        assert_eq!(game.phase(), GamePhase::Start);
    }

    #[test]
    fn test_effects_keep_animating_through_game_over() {
        let mut game = game_in_playing();
        game.match_state.red_health = 1;
        let red = game.match_state.red_ship;
        game.match_state
            .yellow_bullets
            .push(Bullet::new(red.x - BULLET_WIDTH as i32 - BULLET_VEL, red.y + 10));
        game.tick(&InputSnapshot::new());
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(game.effects.particle_count() > 0);

        // The burst drains away over subsequent game-over ticks
        for _ in 0..200 {
            game.tick(&InputSnapshot::new());
        }
        assert_eq!(game.effects.particle_count(), 0);
        assert_eq!(game.effects.ring_count(), 0);
    }

    #[test]
    fn test_menu_phases_do_not_simulate() {
        let mut game = Game::new();
        let ship_before = game.match_state.yellow_ship;
        let input = InputSnapshot {
            key_d: true,
            ..Default::default()
        };

        game.tick(&input);
        assert_eq!(game.match_state.yellow_ship, ship_before);
    }
}
