//! Built-in planar (2D) world kit.
//!
//! Value types for a robot on a plane: position plus heading, beam angles,
//! rotate-then-translate moves and scalar range readings, each carrying its
//! noise model. Satisfies the [`WorldKit`](crate::world::contracts::WorldKit)
//! bundle; the map stays host-supplied.
//!
//! # Components
//!
//! - [`Pose2D`] / [`Angle`]: pose and beam-direction values
//! - [`Move2D`] + [`MotionNoise`]: odometry-style move with alpha noise
//! - [`RangeReading2D`] + [`RangeNoise`]: range beam with Gaussian noise

mod motion;
mod pose;
mod range;

pub use motion::{MotionNoise, Move2D};
pub use pose::{Angle, Pose2D};
pub use range::{RangeNoise, RangeReading2D};

use crate::world::contracts::WorldKit;

/// Marker type bundling the planar capability set.
#[derive(Debug, Clone, Copy, Default)]
pub struct World2D;

impl WorldKit for World2D {
    type Pose = Pose2D;
    type Vector = Angle;
    type Move = Move2D;
    type RangeReading = RangeReading2D;
}
