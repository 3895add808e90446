//! Game configuration
//!
//! Every dimension, speed and color the simulation reads lives here. Entities
//! only carry their own position/angle and look everything else up in the
//! session's `GameConfig`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::render::TextAlign;

/// An RGBA color, rendered to a CSS color string for the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity (0.0 - 1.0)
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// CSS `green` (#008000)
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS representation, e.g. `rgba(0, 0, 200, 0.7)`
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Read-only configuration shared by every entity in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,

    pub rows: usize,
    pub cols: usize,
    /// Gap around every tile (so neighbours are `2 * gap` apart)
    pub gap: f32,
    pub tile_height: f32,
    pub tile_color: Color,

    pub platform_width: f32,
    pub platform_height: f32,
    pub platform_speed: f32,
    pub platform_color: Color,

    pub ball_radius: f32,
    /// Starting speed; the live (signed) speed is kept on the ball
    pub ball_speed: f32,
    pub ball_color: Color,

    pub game_over_text: String,
    pub game_over_font: String,
    pub game_over_color: Color,
    pub game_over_align: TextAlign,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            rows: TILE_ROWS,
            cols: TILE_COLS,
            gap: TILE_GAP,
            tile_height: TILE_HEIGHT,
            tile_color: Color::rgba(0, 0, 200, 0.7),

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platform_speed: PLATFORM_SPEED,
            platform_color: Color::WHITE,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_color: Color::GREEN,

            game_over_text: GAME_OVER_TEXT.to_string(),
            game_over_font: GAME_OVER_FONT.to_string(),
            game_over_color: Color::RED,
            game_over_align: TextAlign::Center,
        }
    }
}

impl GameConfig {
    /// Tile width such that `cols` tiles plus their gaps exactly fill the field
    #[inline]
    pub fn tile_width(&self) -> f32 {
        self.field_width / self.cols as f32 - 2.0 * self.gap
    }

    /// Rightmost x the platform may occupy
    #[inline]
    pub fn platform_max_x(&self) -> f32 {
        self.field_width - self.platform_width
    }

    /// Platform starts horizontally centered
    pub fn platform_start_x(&self) -> f32 {
        self.platform_max_x() / 2.0
    }

    /// Fixed y of the platform's top edge
    pub fn platform_y(&self) -> f32 {
        self.field_height - self.platform_height
    }

    /// Ball center y at or below which the platform is checked
    pub fn bottom_band_y(&self) -> f32 {
        self.field_height - self.platform_height - self.ball_radius
    }

    /// Ball center y at or below which the ball is lost
    pub fn loss_line_y(&self) -> f32 {
        self.field_height - self.ball_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_geometry() {
        let config = GameConfig::default();
        assert!((config.tile_width() - (500.0 / 6.0 - 6.0)).abs() < 1e-4);
        assert_eq!(config.platform_start_x(), 175.0);
        assert_eq!(config.platform_y(), 385.0);
        assert_eq!(config.bottom_band_y(), 375.0);
        assert_eq!(config.loss_line_y(), 390.0);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgba(0, 0, 200, 0.7).to_css(), "rgba(0, 0, 200, 0.7)");
        assert_eq!(Color::WHITE.to_css(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
