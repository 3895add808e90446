//! Rendering
//!
//! The simulation never talks to a canvas directly. It draws through
//! `RenderSurface`, which only knows four primitives. The browser build
//! implements it for `CanvasRenderingContext2d`; headless runs and tests use
//! `RecordingSurface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};

use crate::config::{Color, GameConfig};
use crate::sim::Session;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A 2D drawing surface
pub trait RenderSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color, align: TextAlign);
}

/// Redraw the whole field: clear, live tiles, platform, ball
pub fn draw_frame<S: RenderSurface + ?Sized>(surface: &mut S, session: &Session) {
    let config = &session.config;
    surface.clear_rect(0.0, 0.0, config.field_width, config.field_height);

    let tile_width = config.tile_width();
    for tile in session.tiles.alive() {
        surface.fill_rect(
            tile.pos.x,
            tile.pos.y,
            tile_width,
            config.tile_height,
            config.tile_color,
        );
    }

    let platform = &session.platform;
    surface.fill_rect(
        platform.pos.x,
        platform.pos.y,
        config.platform_width,
        config.platform_height,
        config.platform_color,
    );

    let ball = &session.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, config.ball_radius, config.ball_color);
}

/// Game-over message, centered in the field
pub fn draw_game_over<S: RenderSurface + ?Sized>(surface: &mut S, config: &GameConfig) {
    surface.fill_text(
        &config.game_over_text,
        config.field_width / 2.0,
        config.field_height / 2.0,
        &config.game_over_font,
        config.game_over_color,
        config.game_over_align,
    );
}
