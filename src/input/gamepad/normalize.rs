//! Joystick vector math.
//!
//! Converts the raw pixel offset of a finger from a joystick's anchor into the
//! bounded analog signal games read, and into the on-screen knob offset.
//!
//! # Direction
//!
//! Two branches, split on whether the finger is inside the travel circle:
//!
//! - Inside (`|d| <= radius`): proportional. The output points along the
//!   offset and its length is the covered fraction of the radius, so a finger
//!   halfway out yields magnitude 0.5.
//! - Outside: the unit vector along the offset. The signal saturates at 1.0
//!   no matter how far the finger travels.
//!
//! The y axis is flipped on output so that "up" on screen is positive.

use crate::geometry::Vector2;

/// Compute the analog direction for a raw screen-space offset.
///
/// # Arguments
/// * `dx`, `dy` - Finger offset from the anchor in pixels (y grows downward)
/// * `radius` - Travel radius in pixels, must be positive
///
/// # Returns
/// * Direction with y positive up and magnitude in [0.0, 1.0]
///
/// # Example
/// ```
/// use virtual_gamepad::input::gamepad::normalize::joystick_direction;
///
/// // Half the radius to the right
/// let d = joystick_direction(10.0, 0.0, 20.0);
/// assert!((d.x - 0.5).abs() < 1e-6);
///
/// // Far outside saturates at unit length
/// let d = joystick_direction(0.0, 400.0, 20.0);
/// assert!((d.y + 1.0).abs() < 1e-6);
/// ```
pub fn joystick_direction(dx: f32, dy: f32, radius: f32) -> Vector2 {
    let flipped = Vector2::new(dx, -dy);
    let mag_sq = flipped.length_squared();

    if mag_sq == 0.0 {
        return Vector2::ZERO;
    }

    if mag_sq <= radius * radius {
        flipped.normalize().scale(mag_sq.sqrt() / radius)
    } else {
        flipped.normalize()
    }
}

/// Place the knob: the displacement itself while inside the circle,
/// otherwise the point where it crosses the circle.
///
/// Works in screen space (no y flip) since the result positions a sprite.
pub fn clamp_to_radius(dx: f32, dy: f32, radius: f32) -> Vector2 {
    let delta = Vector2::new(dx, dy);

    if delta.length_squared() <= radius * radius {
        delta
    } else {
        delta.normalize().scale(radius)
    }
}
