//! Odometry-style move type for the planar kit.
//!
//! A move is a rotation followed by a forward translation. Sampling noise
//! follows the odometry motion model from Probabilistic Robotics (Thrun et
//! al.): each component's standard deviation grows with the magnitude of
//! the commanded motion, controlled by alpha parameters.

use serde::{Deserialize, Serialize};

use crate::core::random::RandomSource;
use crate::world::contracts::MoveOps;

/// Noise parameters of the planar motion model.
///
/// - `alpha1`: Rotation noise from rotation (rad/rad)
/// - `alpha2`: Rotation noise from translation (rad/m)
/// - `alpha3`: Translation noise from translation (m/m)
/// - `alpha4`: Translation noise from rotation (m/rad)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionNoise {
    /// Rotation noise from rotation (rad/rad).
    pub alpha1: f32,
    /// Rotation noise from translation (rad/m).
    pub alpha2: f32,
    /// Translation noise from translation (m/m).
    pub alpha3: f32,
    /// Translation noise from rotation (m/rad).
    pub alpha4: f32,
}

impl Default for MotionNoise {
    fn default() -> Self {
        // Conservative defaults for an indoor differential drive robot
        Self {
            alpha1: 0.15,
            alpha2: 0.08,
            alpha3: 0.15,
            alpha4: 0.08,
        }
    }
}

impl MotionNoise {
    /// Low-noise configuration (high quality encoders).
    pub fn low_noise() -> Self {
        Self {
            alpha1: 0.05,
            alpha2: 0.02,
            alpha3: 0.05,
            alpha4: 0.02,
        }
    }

    /// High-noise configuration (slippery floors, poor encoders).
    pub fn high_noise() -> Self {
        Self {
            alpha1: 0.3,
            alpha2: 0.15,
            alpha3: 0.3,
            alpha4: 0.15,
        }
    }

    /// Zero noise: every sample reproduces the commanded move exactly.
    pub fn exact() -> Self {
        Self {
            alpha1: 0.0,
            alpha2: 0.0,
            alpha3: 0.0,
            alpha4: 0.0,
        }
    }
}

/// One movement command on the plane: rotate, then drive forward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move2D {
    /// Commanded rotation in radians, applied before translating.
    pub rotation: f32,
    /// Commanded forward translation in meters, along the new heading.
    pub forward: f32,
    /// Noise model used by `generate_noise`.
    pub noise: MotionNoise,
}

impl Move2D {
    /// Create a move with the default noise model.
    pub fn new(rotation: f32, forward: f32) -> Self {
        Self {
            rotation,
            forward,
            noise: MotionNoise::default(),
        }
    }

    /// Replace the noise model.
    pub fn with_noise(mut self, noise: MotionNoise) -> Self {
        self.noise = noise;
        self
    }
}

impl MoveOps for Move2D {
    fn generate_noise<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self {
        let rot_abs = self.rotation.abs();
        let trans_abs = self.forward.abs();

        let sigma_rot = (self.noise.alpha1 * rot_abs + self.noise.alpha2 * trans_abs).sqrt();
        let sigma_trans = (self.noise.alpha3 * trans_abs + self.noise.alpha4 * rot_abs).sqrt();

        if sigma_rot < 1e-10 && sigma_trans < 1e-10 {
            return *self;
        }

        Self {
            rotation: self.rotation + rng.next_standard_normal() as f32 * sigma_rot,
            forward: self.forward + rng.next_standard_normal() as f32 * sigma_trans,
            noise: self.noise,
        }
    }
}
