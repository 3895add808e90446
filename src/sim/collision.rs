//! Collision tests between the ball and the field geometry
//!
//! All tests are axis-aligned and inclusive: touching counts as a hit. The
//! ball is treated as its bounding square, never as an exact circle.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec2;

/// Ball at or above the top wall
#[inline]
pub fn hits_ceiling(center: Vec2, radius: f32) -> bool {
    center.y <= radius
}

/// Ball at or beyond the left or right wall
#[inline]
pub fn hits_side_wall(center: Vec2, radius: f32, field_width: f32) -> bool {
    center.x <= radius || center.x >= field_width - radius
}

/// Horizontal overlap between ball and platform.
///
/// The ball is widened by a full diameter on each side, which makes the
/// platform more forgiving than its drawn size.
#[inline]
pub fn platform_catches(ball_x: f32, radius: f32, platform_x: f32, platform_width: f32) -> bool {
    ball_x + radius * 2.0 >= platform_x && ball_x - radius * 2.0 <= platform_x + platform_width
}

/// Upward bounce angle from where the ball struck the platform.
///
/// A center hit goes straight up (-π/2). A hit on the right edge leaves at
/// -π/4 (up and right), the left edge at -3π/4 (up and left). The offset is
/// not clamped, so a hit inside the widened catch zone can leave that range.
pub fn platform_bounce_angle(ball_x: f32, platform_center_x: f32, platform_width: f32) -> f32 {
    let half = platform_width / 2.0;
    let shift = (platform_center_x - ball_x) / half;
    let shift_coef = shift / 2.0 + 0.5;
    -(shift_coef * FRAC_PI_2 + FRAC_PI_4)
}

/// Ball bounding square overlaps the rectangle `[min, max]`
#[inline]
pub fn ball_box_overlaps(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    center.x - radius <= max.x
        && center.x + radius >= min.x
        && center.y - radius <= max.y
        && center.y + radius >= min.y
}
