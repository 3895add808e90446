//! Simulation tick
//!
//! One tick is one rendered frame. The order within a tick is fixed:
//!
//! 1. move the ball along its angle
//! 2. redraw the field
//! 3. decide whether another tick follows (status still `Playing`)
//! 4. run the rules engine
//!
//! The frame drawn in step 2 shows the ball before this tick's collision
//! response; the response only shapes the next tick's movement.

use super::rules::apply_rules;
use super::state::{GameEvent, GameStatus, Session};
use crate::render::{RenderSurface, draw_frame, draw_game_over};

/// Whether the host should schedule another tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

impl LoopControl {
    fn from_status(status: GameStatus) -> Self {
        match status {
            GameStatus::Playing => LoopControl::Continue,
            GameStatus::Finished => LoopControl::Stop,
        }
    }
}

/// Advance the session by one tick, drawing to `surface`
///
/// The tick that loses the ball still returns `Continue` (scheduling is
/// decided before the rules run). The following tick sees the finished
/// session, leaves state and surface untouched, and returns `Stop`.
pub fn tick<S: RenderSurface + ?Sized>(session: &mut Session, surface: &mut S) -> LoopControl {
    if session.is_finished() {
        return LoopControl::Stop;
    }

    session.ball.advance();
    session.time_ticks += 1;
    log::trace!(
        "tick {}: ball ({:.2}, {:.2})",
        session.time_ticks,
        session.ball.pos.x,
        session.ball.pos.y
    );

    draw_frame(surface, session);

    let control = LoopControl::from_status(session.status);

    if let Some(GameEvent::BallLost) = apply_rules(session) {
        draw_game_over(surface, &session.config);
    }

    control
}

/// Drive ticks in a loop until the session stops or `max_ticks` is reached.
///
/// Returns the number of ticks run. Used for headless play; the browser drives
/// `tick` from `requestAnimationFrame` instead.
pub fn run<S: RenderSurface + ?Sized>(session: &mut Session, surface: &mut S, max_ticks: u64) -> u64 {
    let mut ticks = 0;
    while ticks < max_ticks {
        ticks += 1;
        if tick(session, surface) == LoopControl::Stop {
            break;
        }
    }
    ticks
}
