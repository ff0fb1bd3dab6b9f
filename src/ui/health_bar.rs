//! Health bar component
//!
//! Procedural HUD health bar (SDL2 rectangles): dark backdrop, inset
//! proportional fill, colored border. The fill switches to a warning
//! color when health drops below 30%. One bar per side, same component,
//! different style.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for health bar appearance
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Backdrop color (shown behind the depleted portion)
    pub background_color: Color,

    /// Fill color while health is above the low threshold
    pub fill_color: Color,

    /// Fill color when health is low (<30%)
    pub low_fill_color: Color,

    /// Border color
    pub border_color: Color,

    /// Inset of the fill from the bar edge, in pixels
    pub inset: u32,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 160,
            height: 22,
            background_color: Color::RGB(20, 20, 35),
            fill_color: Color::RGB(0, 200, 0),
            low_fill_color: Color::RGB(200, 0, 0),
            border_color: Color::RGB(100, 100, 120),
            inset: 2,
        }
    }
}

/// A stateless health bar rendered at a fixed screen position.
///
/// Create one per side with the side's color and call `render()` each
/// frame with the current health fraction.
pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    pub fn new() -> Self {
        HealthBar {
            style: HealthBarStyle::default(),
        }
    }

    /// Creates a health bar with custom styling
    ///
    /// # Example
    ///
    /// ```rust
    /// let yellow_bar = HealthBar::with_style(HealthBarStyle {
    ///     fill_color: Color::RGB(255, 255, 60),
    ///     border_color: Color::RGB(255, 255, 60),
    ///     ..Default::default()
    /// });
    /// ```
    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }

    /// Renders the bar with its top-left corner at (x, y).
    ///
    /// `health_fraction` is clamped to 0.0-1.0; the fill width is
    /// proportional to it.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        health_fraction: f32,
    ) -> Result<(), String> {
        let fraction = health_fraction.clamp(0.0, 1.0);

        // Backdrop
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(Rect::new(x, y, self.style.width, self.style.height))?;

        // Proportional fill, inset from the border
        let inner_width = self.style.width - self.style.inset * 2;
        let fill_width = (inner_width as f32 * fraction) as u32;
        if fill_width > 0 {
            let fill_color = if fraction < 0.3 {
                self.style.low_fill_color
            } else {
                self.style.fill_color
            };
            canvas.set_draw_color(fill_color);
            canvas.fill_rect(Rect::new(
                x + self.style.inset as i32,
                y + self.style.inset as i32,
                fill_width,
                self.style.height - self.style.inset * 2,
            ))?;
        }

        // Border drawn last so it sits on top of the fill
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(Rect::new(x, y, self.style.width, self.style.height))?;

        Ok(())
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = HealthBarStyle::default();
        assert_eq!(style.width, 160);
        assert_eq!(style.height, 22);
        assert_eq!(style.inset, 2);
    }

    #[test]
    fn test_custom_style() {
        let bar = HealthBar::with_style(HealthBarStyle {
            width: 200,
            fill_color: Color::RGB(255, 255, 60),
            ..Default::default()
        });
        assert_eq!(bar.style().width, 200);
        assert_eq!(bar.style().fill_color, Color::RGB(255, 255, 60));
    }

    #[test]
    fn test_default_trait() {
        let bar1 = HealthBar::new();
        let bar2 = HealthBar::default();
        assert_eq!(bar1.style().width, bar2.style().width);
    }
}
