//! HUD Components
//!
//! Stateless screen-space widgets drawn during the playing phase:
//! per-side health bars and ammo pips. Each component pairs a style
//! struct with a render method, so both sides reuse one component with
//! different colors.

pub mod ammo_display;
pub mod health_bar;

pub use ammo_display::{AmmoDisplay, AmmoDisplayStyle};
pub use health_bar::{HealthBar, HealthBarStyle};
