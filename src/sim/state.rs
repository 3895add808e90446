//! Game state and core simulation types
//!
//! Entities hold only what changes during play (positions, angle, signed
//! speed, alive flags). Sizes, speeds and colors are read from the session's
//! `GameConfig`.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::{TileGrid, generate_tiles};
use crate::config::GameConfig;
use crate::input::Key;

/// Session status. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Finished,
}

/// A destructible tile. Size is shared and lives in `GameConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Top-left corner
    pub pos: Vec2,
    pub alive: bool,
}

impl Tile {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, alive: true }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self, config: &GameConfig) -> Vec2 {
        self.pos + Vec2::new(config.tile_width(), config.tile_height)
    }
}

/// The player's platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner. Only `x` ever changes.
    pub pos: Vec2,
}

impl Platform {
    /// Centered horizontally, resting on the bottom edge of the field
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.platform_start_x(), config.platform_y()),
        }
    }

    #[inline]
    pub fn center_x(&self, config: &GameConfig) -> f32 {
        self.pos.x + config.platform_width / 2.0
    }

    /// Move one step in response to a key press, clamped to the field walls
    pub fn move_by(&mut self, key: Key, config: &GameConfig) {
        match key {
            Key::Left => {
                if self.pos.x > 0.0 {
                    self.pos.x = (self.pos.x - config.platform_speed).max(0.0);
                }
            }
            Key::Right => {
                let max_x = config.platform_max_x();
                if self.pos.x < max_x {
                    self.pos.x = (self.pos.x + config.platform_speed).min(max_x);
                }
            }
            Key::Other => {}
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Travel angle (radians, screen coordinates: negative is upward)
    pub angle: f32,
    /// Signed speed in pixels per tick. A ceiling bounce negates it.
    pub speed: f32,
}

impl Ball {
    /// Place the ball on top of the platform, travelling at `angle`
    pub fn new(config: &GameConfig, angle: f32) -> Self {
        Self {
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height - config.ball_radius - config.platform_height,
            ),
            angle,
            speed: config.ball_speed,
        }
    }

    /// Per-tick displacement
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed
    }

    /// Advance one tick along the current angle
    pub fn advance(&mut self) {
        self.pos += self.velocity();
    }
}

/// Upward launch angle in [-3π/4, -π/4] for `t` in [0, 1)
pub fn launch_angle(t: f32) -> f32 {
    -(t * FRAC_PI_2 + FRAC_PI_4)
}

/// Something the rules engine did during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reached the top wall; speed sign flipped
    CeilingBounce,
    /// Ball caught by the platform; new upward angle
    PlatformBounce { angle: f32 },
    /// Ball passed the platform line
    BallLost,
    /// Ball reached a side wall; angle mirrored horizontally
    WallBounce,
    /// Tile destroyed; angle negated
    TileDestroyed { row: usize, col: usize },
}

/// Complete game state for one play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub config: GameConfig,
    /// Seed the initial launch angle was drawn from
    pub seed: u64,
    pub tiles: TileGrid,
    pub platform: Platform,
    pub ball: Ball,
    pub status: GameStatus,
    /// Number of ticks simulated while playing
    pub time_ticks: u64,
}

impl Session {
    /// Create a session with the default configuration
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let angle = launch_angle(rng.random::<f32>());
        log::info!("New session (seed {seed}, launch angle {angle:.3} rad)");

        Self {
            tiles: generate_tiles(&config),
            platform: Platform::new(&config),
            ball: Ball::new(&config, angle),
            status: GameStatus::Playing,
            time_ticks: 0,
            seed,
            config,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Apply a key press to the platform. Ignored once the session is over.
    pub fn handle_key(&mut self, key: Key) {
        if self.is_finished() {
            return;
        }
        self.platform.move_by(key, &self.config);
    }

    /// JSON snapshot of the whole session
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
