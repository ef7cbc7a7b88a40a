//! World models: the capability contracts the engine requires from a host
//! application, and a built-in planar (2D) kit satisfying them.

pub mod contracts;
pub mod planar;

pub use contracts::{MoveOps, PoseOps, RangeReadingOps, WorldKit, WorldMap};
pub use planar::{Angle, MotionNoise, Move2D, Pose2D, RangeNoise, RangeReading2D, World2D};
