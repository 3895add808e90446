//! Arkanoid - a minimal brick breaker
//!
//! Core modules:
//! - `config`: Immutable game configuration (dimensions, speeds, colors)
//! - `sim`: Deterministic simulation (entities, field, rules, tick driver)
//! - `render`: Draw-surface abstraction and frame drawing
//! - `input`: Keyboard key translation

pub mod config;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{Color, GameConfig};
pub use input::Key;
pub use render::{RenderSurface, TextAlign};
pub use sim::{GameStatus, LoopControl, Session, tick};

/// Game configuration constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Tile grid layout
    pub const TILE_ROWS: usize = 3;
    pub const TILE_COLS: usize = 6;
    pub const TILE_GAP: f32 = 3.0;
    /// Tile height is fixed; width is derived from the field width and column count
    pub const TILE_HEIGHT: f32 = 25.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 150.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    /// Pixels moved per key press
    pub const PLATFORM_SPEED: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 3.0;

    /// Message drawn when the ball is lost
    pub const GAME_OVER_TEXT: &str = "Game over";
    pub const GAME_OVER_FONT: &str = "40px Arial";
}
