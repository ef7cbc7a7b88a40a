//! Pose and angle types for the planar kit.

use serde::{Deserialize, Serialize};

use crate::core::math::normalize_angle;
use crate::world::contracts::PoseOps;

use super::motion::Move2D;

/// Direction delta between two sensor rays on the plane, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle(f32);

impl Angle {
    /// Create an angle, normalized to [-π, π].
    #[inline]
    pub fn new(radians: f32) -> Self {
        Self(normalize_angle(radians))
    }

    /// The zero angle (straight ahead).
    #[inline]
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Value in radians.
    #[inline]
    pub fn radians(&self) -> f32 {
        self.0
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::zero()
    }
}

/// Robot pose on the plane.
///
/// Position (x, y) in meters and heading (theta) in radians, normalized to
/// [-π, π].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
    /// Heading in radians, normalized to [-π, π]
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose with theta normalized to [-π, π].
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Identity pose at origin with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl PoseOps for Pose2D {
    type Vector = Angle;
    type Move = Move2D;

    /// Rotate by the move's rotation, then translate forward along the new
    /// heading.
    fn apply_movement(&self, movement: &Move2D) -> Pose2D {
        let theta = normalize_angle(self.theta + movement.rotation);
        let (sin_t, cos_t) = theta.sin_cos();
        Pose2D {
            x: self.x + movement.forward * cos_t,
            y: self.y + movement.forward * sin_t,
            theta,
        }
    }

    fn add_angle(&self, angle: &Angle) -> Pose2D {
        Pose2D {
            x: self.x,
            y: self.y,
            theta: normalize_angle(self.theta + angle.radians()),
        }
    }

    fn distance_to(&self, other: &Pose2D) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
