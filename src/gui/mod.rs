//! Phase Screens
//!
//! Full-screen draws for the menu phases: control selection, the title
//! screen, and the winner screen. Each screen is a stateless draw
//! function over the background; any motion (floating titles, blinking
//! prompts, pulsing banners) is derived from the game clock passed in.

pub mod control_select;
pub mod game_over;
pub mod start_screen;

pub use control_select::draw_control_select;
pub use game_over::draw_game_over;
pub use start_screen::draw_start_screen;
