//! Ammo pip display
//!
//! One pip per bullet slot. Remaining ammo renders as a filled pip with
//! a white highlight strip; spent slots render as hollow outlines.

use crate::game::types::MAX_BULLETS;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for ammo pip appearance
#[derive(Debug, Clone)]
pub struct AmmoDisplayStyle {
    /// Pip width in pixels
    pub pip_width: u32,

    /// Pip height in pixels
    pub pip_height: u32,

    /// Horizontal distance between pip origins
    pub spacing: i32,

    /// Fill color for loaded pips
    pub fill_color: Color,

    /// Outline color for spent pips
    pub empty_color: Color,
}

impl Default for AmmoDisplayStyle {
    fn default() -> Self {
        AmmoDisplayStyle {
            pip_width: 12,
            pip_height: 8,
            spacing: 18,
            fill_color: Color::RGB(255, 255, 60),
            empty_color: Color::RGB(80, 80, 90),
        }
    }
}

/// A stateless row of ammo pips.
pub struct AmmoDisplay {
    style: AmmoDisplayStyle,
}

impl AmmoDisplay {
    pub fn new() -> Self {
        AmmoDisplay {
            style: AmmoDisplayStyle::default(),
        }
    }

    pub fn with_style(style: AmmoDisplayStyle) -> Self {
        AmmoDisplay { style }
    }

    pub fn style(&self) -> &AmmoDisplayStyle {
        &self.style
    }

    /// Renders one pip per bullet slot starting at (x, y).
    ///
    /// `remaining` is the number of shots still available out of
    /// `MAX_BULLETS`.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        remaining: u32,
    ) -> Result<(), String> {
        for i in 0..MAX_BULLETS {
            let pip_x = x + i as i32 * self.style.spacing;
            let pip = Rect::new(pip_x, y, self.style.pip_width, self.style.pip_height);

            if i < remaining as usize {
                canvas.set_draw_color(self.style.fill_color);
                canvas.fill_rect(pip)?;

                // Highlight strip across the top of a loaded pip
                canvas.set_draw_color(Color::RGBA(255, 255, 255, 160));
                canvas.fill_rect(Rect::new(pip_x + 1, y + 1, self.style.pip_width - 2, 2))?;
            } else {
                canvas.set_draw_color(self.style.empty_color);
                canvas.draw_rect(pip)?;
            }
        }

        Ok(())
    }
}

impl Default for AmmoDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = AmmoDisplayStyle::default();
        assert_eq!(style.pip_width, 12);
        assert_eq!(style.pip_height, 8);
        assert_eq!(style.spacing, 18);
    }

    #[test]
    fn test_custom_style() {
        let display = AmmoDisplay::with_style(AmmoDisplayStyle {
            fill_color: Color::RGB(255, 60, 60),
            ..Default::default()
        });
        assert_eq!(display.style().fill_color, Color::RGB(255, 60, 60));
    }
}
