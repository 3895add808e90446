//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - `state`: entities and the session
//! - `field`: tile grid generation
//! - `collision`: geometric hit tests
//! - `rules`: per-tick rules engine
//! - `tick`: the driver that moves, draws and applies the rules

pub mod collision;
pub mod field;
pub mod rules;
pub mod state;
pub mod tick;

pub use field::{TileGrid, generate_tiles};
pub use rules::apply_rules;
pub use state::{Ball, GameEvent, GameStatus, Platform, Session, Tile};
pub use tick::{LoopControl, run, tick};
