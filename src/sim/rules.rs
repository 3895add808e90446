//! Per-tick rules engine
//!
//! Rules are checked in a fixed priority order against the ball's current
//! position. The first rule that matches applies its effect and ends the
//! evaluation, so at most one effect happens per tick:
//!
//! 1. ceiling bounce (negates speed)
//! 2. platform bounce (angle from hit offset) or ball lost
//! 3. side-wall bounce (angle mirrored to `π - angle`)
//! 4. tile hit (first alive tile in row-major order dies, angle negated)

use std::f32::consts::PI;

use super::collision::{
    ball_box_overlaps, hits_ceiling, hits_side_wall, platform_bounce_angle, platform_catches,
};
use super::state::{Ball, GameEvent, GameStatus, Session};

/// Ceiling bounce: flip the sign of the speed, keep the angle
pub fn ceiling_bounce(ball: &mut Ball) {
    ball.speed = -ball.speed;
}

/// Side-wall bounce: horizontal mirror of the angle
pub fn wall_bounce(ball: &mut Ball) {
    ball.angle = PI - ball.angle;
}

/// Tile bounce: vertical mirror of the angle
pub fn tile_bounce(ball: &mut Ball) {
    ball.angle = -ball.angle;
}

/// Evaluate the rules once. Returns the effect applied, if any.
///
/// Does nothing once the session is finished.
pub fn apply_rules(session: &mut Session) -> Option<GameEvent> {
    if session.is_finished() {
        return None;
    }

    let config = &session.config;
    let ball = &mut session.ball;
    let radius = config.ball_radius;

    if hits_ceiling(ball.pos, radius) {
        ceiling_bounce(ball);
        log::debug!("Ceiling bounce, speed now {}", ball.speed);
        return Some(GameEvent::CeilingBounce);
    }

    if ball.pos.y >= config.bottom_band_y() {
        let platform = &session.platform;
        if platform_catches(ball.pos.x, radius, platform.pos.x, config.platform_width) {
            let angle =
                platform_bounce_angle(ball.pos.x, platform.center_x(config), config.platform_width);
            ball.angle = angle;
            log::debug!("Platform bounce at x={:.1}, angle {angle:.3}", ball.pos.x);
            return Some(GameEvent::PlatformBounce { angle });
        } else if ball.pos.y >= config.loss_line_y() {
            session.status = GameStatus::Finished;
            log::info!(
                "Ball lost at ({:.1}, {:.1}) after {} ticks, {} tiles left",
                ball.pos.x,
                ball.pos.y,
                session.time_ticks,
                session.tiles.alive_count()
            );
            return Some(GameEvent::BallLost);
        }
    }

    if hits_side_wall(ball.pos, radius, config.field_width) {
        wall_bounce(ball);
        log::debug!("Wall bounce at x={:.1}", ball.pos.x);
        return Some(GameEvent::WallBounce);
    }

    let hit = session
        .tiles
        .iter()
        .find(|(_, _, tile)| {
            tile.alive && ball_box_overlaps(ball.pos, radius, tile.pos, tile.max(config))
        })
        .map(|(row, col, _)| (row, col));

    if let Some((row, col)) = hit {
        if let Some(tile) = session.tiles.get_mut(row, col) {
            tile.alive = false;
        }
        tile_bounce(ball);
        log::debug!("Tile [{row}][{col}] destroyed");
        return Some(GameEvent::TileDestroyed { row, col });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    fn session_with_ball(x: f32, y: f32, angle: f32) -> Session {
        let mut session = Session::new(1);
        session.ball.pos = Vec2::new(x, y);
        session.ball.angle = angle;
        session
    }

    #[test]
    fn test_ceiling_flips_speed_not_angle() {
        let mut session = session_with_ball(250.0, 10.0, -1.0);
        let event = apply_rules(&mut session);
        assert_eq!(event, Some(GameEvent::CeilingBounce));
        assert_eq!(session.ball.speed, -3.0);
        assert_eq!(session.ball.angle, -1.0);
        assert_eq!(session.ball.pos, Vec2::new(250.0, 10.0));
    }

    #[test]
    fn test_ceiling_wins_over_side_wall() {
        let mut session = session_with_ball(5.0, 5.0, -2.0);
        assert_eq!(apply_rules(&mut session), Some(GameEvent::CeilingBounce));
        assert_eq!(session.ball.angle, -2.0);
    }

    #[test]
    fn test_platform_center_hit() {
        let mut session = session_with_ball(250.0, 375.0, 1.0);
        assert_eq!(session.platform.pos.x, 175.0);
        let event = apply_rules(&mut session);
        assert!(matches!(event, Some(GameEvent::PlatformBounce { .. })));
        assert!((session.ball.angle + FRAC_PI_2).abs() < 1e-6);
        assert_eq!(session.status, GameStatus::Playing);
    }

    #[test]
    fn test_platform_wins_over_side_wall() {
        let mut session = session_with_ball(5.0, 380.0, 2.0);
        session.platform.pos.x = 0.0;
        let event = apply_rules(&mut session);
        assert!(matches!(event, Some(GameEvent::PlatformBounce { .. })));
    }

    #[test]
    fn test_ball_lost_past_platform() {
        let mut session = session_with_ball(250.0, 399.0, 1.0);
        session.platform.pos.x = 0.0;
        let before = session.ball;
        assert_eq!(apply_rules(&mut session), Some(GameEvent::BallLost));
        assert_eq!(session.status, GameStatus::Finished);
        assert_eq!(session.ball, before);
    }

    #[test]
    fn test_missed_ball_above_loss_line_falls_through_to_walls() {
        // In the bottom band, off the platform, but not yet lost
        let mut session = session_with_ball(495.0, 380.0, 1.0);
        session.platform.pos.x = 0.0;
        assert_eq!(apply_rules(&mut session), Some(GameEvent::WallBounce));
        assert_eq!(session.status, GameStatus::Playing);
    }

    #[test]
    fn test_side_wall_mirrors_angle() {
        let mut session = session_with_ball(490.0, 200.0, -0.5);
        assert_eq!(apply_rules(&mut session), Some(GameEvent::WallBounce));
        assert!((session.ball.angle - (PI + 0.5)).abs() < 1e-6);
        assert_eq!(session.ball.speed, 3.0);
        assert_eq!(session.ball.pos, Vec2::new(490.0, 200.0));
    }

    #[test]
    fn test_tile_hit_stops_at_first() {
        // Ball box spans y 28..48: touches the bottom of [0][0] and overlaps [1][0]
        let mut session = session_with_ball(20.0, 38.0, -1.0);
        let event = apply_rules(&mut session);
        assert_eq!(event, Some(GameEvent::TileDestroyed { row: 0, col: 0 }));
        assert!(!session.tiles.get(0, 0).unwrap().alive);
        assert!(session.tiles.get(1, 0).unwrap().alive);
        assert_eq!(session.ball.angle, 1.0);
        assert_eq!(session.tiles.alive_count(), 17);
    }

    #[test]
    fn test_tile_hit_at_left_edge() {
        let mut session = session_with_ball(0.0, 0.0, -1.0);
        session.tiles.get_mut(1, 0).unwrap().alive = false;
        let left = session.tiles.get(1, 1).unwrap().pos.x;
        session.ball.pos = Vec2::new(left - 10.0, 46.0);

        let event = apply_rules(&mut session);
        assert_eq!(event, Some(GameEvent::TileDestroyed { row: 1, col: 1 }));
        assert_eq!(session.ball.angle, 1.0);
    }

    #[test]
    fn test_tile_scan_stops_within_row() {
        // Ball box touches the right edge of [0][0] and overlaps [0][1]
        let mut session = session_with_ball(0.0, 0.0, -1.0);
        let right = session.tiles.get(0, 0).unwrap().max(&session.config).x;
        session.ball.pos = Vec2::new(right + 10.0, 15.0);

        let event = apply_rules(&mut session);
        assert_eq!(event, Some(GameEvent::TileDestroyed { row: 0, col: 0 }));
        assert!(!session.tiles.get(0, 0).unwrap().alive);
        assert!(session.tiles.get(0, 1).unwrap().alive);
        assert_eq!(session.ball.angle, 1.0);
    }

    #[test]
    fn test_dead_tiles_are_skipped() {
        let mut session = session_with_ball(20.0, 38.0, -1.0);
        session.tiles.get_mut(0, 0).unwrap().alive = false;
        let event = apply_rules(&mut session);
        assert_eq!(event, Some(GameEvent::TileDestroyed { row: 1, col: 0 }));
    }

    #[test]
    fn test_open_field_is_noop() {
        let mut session = session_with_ball(250.0, 200.0, -1.0);
        let before = session.ball;
        assert_eq!(apply_rules(&mut session), None);
        assert_eq!(session.ball, before);
    }

    #[test]
    fn test_finished_session_is_frozen() {
        let mut session = session_with_ball(250.0, 10.0, -1.0);
        session.status = GameStatus::Finished;
        assert_eq!(apply_rules(&mut session), None);
        assert_eq!(session.ball.speed, 3.0);
    }
}
