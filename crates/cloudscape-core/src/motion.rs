//! Constant-velocity motion of a transform
//!
//! First-order Euler stepping only: no smoothing, clamping, or renormalization.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::Transform;

/// Linear and angular velocity of an animated entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VelocityState {
    /// Units per second along each world axis
    pub linear: Vec3,
    /// Degrees per second about each axis
    pub angular: Vec3,
}

impl VelocityState {
    pub fn new(linear: Vec3, angular: Vec3) -> Self {
        Self { linear, angular }
    }

    /// True when neither velocity moves anything
    pub fn is_zero(&self) -> bool {
        self.linear == Vec3::ZERO && self.angular == Vec3::ZERO
    }
}

/// Build a rotation from Euler angles in degrees.
///
/// Rotates about X, then Y, then Z of the rotating frame, which composes as
/// `Qx * Qy * Qz`.
pub fn quat_from_euler_degrees(degrees: Vec3) -> Quat {
    let radians = degrees * (std::f32::consts::PI / 180.0);
    Quat::from_rotation_x(radians.x) * Quat::from_rotation_y(radians.y) * Quat::from_rotation_z(radians.z)
}

/// Advance `current` by `velocity` over `delta_time` seconds.
///
/// The returned transform carries unit scale, like any transform built from
/// a rotation and a translation.
pub fn step_transform(current: &Transform, velocity: &VelocityState, delta_time: f32) -> Transform {
    let mut next = Transform::from_position_rotation(current.position, current.rotation);
    next.translate(velocity.linear * delta_time);
    next.rotate_local(quat_from_euler_degrees(velocity.angular * delta_time));
    next
}
