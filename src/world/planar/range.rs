//! Range reading type for the planar kit.
//!
//! A reading is a scalar distance along a beam direction. Comparing an
//! observed reading to a ray-cast prediction uses a Gaussian hit kernel:
//! the likelihood peaks at 1.0 for a perfect match and decays with the
//! range difference, scaled by the sensor's standard deviation.

use serde::{Deserialize, Serialize};

use crate::world::contracts::RangeReadingOps;

use super::pose::Angle;

/// Noise parameters of the planar range sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeNoise {
    /// Standard deviation of the range measurement in meters.
    pub sigma: f32,
}

impl Default for RangeNoise {
    fn default() -> Self {
        Self { sigma: 0.15 }
    }
}

impl RangeNoise {
    /// Tight model for a well-calibrated sensor.
    pub fn sharp() -> Self {
        Self { sigma: 0.05 }
    }

    /// Loose model for a cheap or poorly calibrated sensor.
    pub fn loose() -> Self {
        Self { sigma: 0.4 }
    }
}

/// One distance measurement along a beam.
///
/// An infinite `range` means the beam hit nothing within sensor reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeReading2D {
    /// Measured distance in meters, `f32::INFINITY` for no return.
    pub range: f32,
    /// Beam direction relative to the robot heading.
    pub angle: Angle,
    /// Noise model used by `calculate_weight`.
    pub noise: RangeNoise,
}

impl RangeReading2D {
    /// Create a reading with the default noise model.
    pub fn new(range: f32, angle: Angle) -> Self {
        Self {
            range,
            angle,
            noise: RangeNoise::default(),
        }
    }

    /// A no-return reading along `angle`.
    pub fn out_of_range(angle: Angle) -> Self {
        Self::new(f32::INFINITY, angle)
    }

    /// Replace the noise model.
    pub fn with_noise(mut self, noise: RangeNoise) -> Self {
        self.noise = noise;
        self
    }
}

impl RangeReadingOps for RangeReading2D {
    type Vector = Angle;

    fn angle(&self) -> &Angle {
        &self.angle
    }

    fn calculate_weight(&self, other: &RangeReading2D) -> f64 {
        match (self.range.is_finite(), other.range.is_finite()) {
            // Both beams ran out of sensor reach: consistent observation.
            (false, false) => 1.0,
            (true, true) => {
                let delta = ((self.range - other.range) / self.noise.sigma) as f64;
                (-0.5 * delta * delta).exp()
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_match_weighs_one() {
        let a = RangeReading2D::new(3.0, Angle::zero());
        let b = RangeReading2D::new(3.0, Angle::zero());
        assert_relative_eq!(a.calculate_weight(&b), 1.0);
    }

    #[test]
    fn test_weight_decays_with_difference() {
        let observed = RangeReading2D::new(3.0, Angle::zero());
        let near = RangeReading2D::new(3.1, Angle::zero());
        let far = RangeReading2D::new(5.0, Angle::zero());

        let w_near = observed.calculate_weight(&near);
        let w_far = observed.calculate_weight(&far);

        assert!(w_near > w_far);
        assert!(w_far < 1e-6);
    }

    #[test]
    fn test_weight_in_unit_interval() {
        let observed = RangeReading2D::new(2.0, Angle::zero()).with_noise(RangeNoise::loose());
        for range in [0.0, 0.5, 2.0, 4.0, 100.0] {
            let w = observed.calculate_weight(&RangeReading2D::new(range, Angle::zero()));
            assert!((0.0..=1.0).contains(&w), "weight {} for range {}", w, range);
        }
    }

    #[test]
    fn test_both_out_of_range_match() {
        let a = RangeReading2D::out_of_range(Angle::zero());
        let b = RangeReading2D::out_of_range(Angle::zero());
        assert_relative_eq!(a.calculate_weight(&b), 1.0);
    }

    #[test]
    fn test_one_out_of_range_is_impossible() {
        let observed = RangeReading2D::new(3.0, Angle::zero());
        let predicted = RangeReading2D::out_of_range(Angle::zero());
        assert_relative_eq!(observed.calculate_weight(&predicted), 0.0);
        assert_relative_eq!(predicted.calculate_weight(&observed), 0.0);
    }

    #[test]
    fn test_sharper_sigma_penalizes_more() {
        let sharp = RangeReading2D::new(3.0, Angle::zero()).with_noise(RangeNoise::sharp());
        let loose = RangeReading2D::new(3.0, Angle::zero()).with_noise(RangeNoise::loose());
        let predicted = RangeReading2D::new(3.3, Angle::zero());

        assert!(sharp.calculate_weight(&predicted) < loose.calculate_weight(&predicted));
    }
}
