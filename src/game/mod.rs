// Game module - top-level phase machine and shared types
//
// This module owns everything above the simulator: which phase the
// process is in, which control scheme was picked, who won, and the
// routing of discrete actions and frame ticks to the right behavior.

pub mod state;
pub mod types;

pub use state::Game;
pub use types::{ControlScheme, GamePhase, Side, SimResult};
