//! Capability contracts between the localization engine and its host.
//!
//! The engine never touches concrete geometry. It sees the environment
//! through four small value-type contracts ([`PoseOps`], [`MoveOps`],
//! [`RangeReadingOps`] plus the vector type they share), bundled by a
//! [`WorldKit`], and queries the environment through a [`WorldMap`].
//!
//! Poses, moves and readings are plain values: cloning a particle yields an
//! independent copy, so duplicates produced by resampling never alias.
//!
//! Stochastic operations ([`MoveOps::generate_noise`],
//! [`WorldMap::random_pose`]) take the caller's [`RandomSource`] explicitly.
//! The engine owns one seeded stream and threads it through every draw; a
//! kit must not hide its own generator.

use crate::core::random::RandomSource;

/// A hypothesis pose of the robot in its environment.
///
/// Cardinality of the environment is up to the kit: a corridor robot may be
/// a single coordinate, a planar robot position plus heading.
pub trait PoseOps: Clone {
    /// Direction delta between two sensor rays in this environment.
    type Vector;
    /// Movement (or fused movement sequence) of the robot.
    type Move;

    /// The pose reached by executing `movement` from this pose.
    fn apply_movement(&self, movement: &Self::Move) -> Self;

    /// This pose rotated by `angle`, aligning it with a sensor beam
    /// direction so a ray cast runs along that beam.
    fn add_angle(&self, angle: &Self::Vector) -> Self;

    /// Distance to another pose, used to measure cloud spread.
    fn distance_to(&self, other: &Self) -> f64;
}

/// A movement command with an associated motion-noise model.
pub trait MoveOps: Clone {
    /// Sample a noisy variant of this move.
    ///
    /// This is the only place stochastic motion uncertainty enters the
    /// update cycle. The engine calls it once per particle so the noise is
    /// i.i.d. across the cloud.
    fn generate_noise<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self;
}

/// A range measurement with an associated beam direction and sensor-noise
/// model.
pub trait RangeReadingOps {
    /// Direction delta type shared with the kit's pose.
    type Vector;

    /// Direction of the beam this reading was taken along, relative to the
    /// robot's heading.
    fn angle(&self) -> &Self::Vector;

    /// Likelihood in `[0, 1]` that this (observed) reading and `other`
    /// (predicted by ray cast) measure the same real distance.
    ///
    /// `1.0` is a perfect match, `0.0` an impossible one.
    fn calculate_weight(&self, other: &Self) -> f64;
}

/// Bundle of the four capability types for one environment representation.
///
/// Implemented by a zero-sized marker type; the engine takes a single
/// `WorldKit` parameter instead of threading four generic parameters
/// through every signature.
pub trait WorldKit {
    /// Pose type of this environment.
    type Pose: PoseOps<Vector = Self::Vector, Move = Self::Move>;
    /// Ray-direction delta type.
    type Vector;
    /// Movement type.
    type Move: MoveOps;
    /// Range measurement type.
    type RangeReading: RangeReadingOps<Vector = Self::Vector>;
}

/// Geometric queries the engine needs from the environment map.
///
/// The map is owned by the host and never mutated by the engine. The host
/// must serialize map edits against running localization cycles.
pub trait WorldMap<K: WorldKit> {
    /// A uniformly distributed valid pose.
    ///
    /// By contract only valid poses are returned; the engine applies no
    /// validity filtering on top.
    fn random_pose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> K::Pose;

    /// Distance from `pose` to the first obstacle along its heading,
    /// reported as a range reading.
    fn ray_cast(&self, pose: &K::Pose) -> K::RangeReading;

    /// Whether `pose` lies in the valid movement area of the map.
    fn is_pose_valid(&self, pose: &K::Pose) -> bool;

    /// Centroid of a pose set, used to read a point estimate off the cloud.
    fn average(&self, poses: &[K::Pose]) -> K::Pose;
}

impl<K: WorldKit, M: WorldMap<K>> WorldMap<K> for &M {
    fn random_pose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> K::Pose {
        (**self).random_pose(rng)
    }

    fn ray_cast(&self, pose: &K::Pose) -> K::RangeReading {
        (**self).ray_cast(pose)
    }

    fn is_pose_valid(&self, pose: &K::Pose) -> bool {
        (**self).is_pose_valid(pose)
    }

    fn average(&self, poses: &[K::Pose]) -> K::Pose {
        (**self).average(poses)
    }
}
