//! DishaMCL - Monte Carlo Localization for mobile robots
//!
//! A particle-filter localization engine that estimates a robot's pose in a
//! known map from noisy motion commands and noisy range-sensor scans. The
//! engine is generic over the pose, motion and sensor representations of the
//! environment, so the same update cycle drives a 1-D corridor robot and a
//! 2-D differential-drive platform alike.
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 localization/                       │  ← MCL engine
//! │   (cloud generation, motion, weighting, resample)   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    world/                           │  ← World models
//! │        (capability contracts, planar 2D kit)        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (math, random)                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Update cycle
//!
//! The caller owns the particle cloud and the map. Each cycle it feeds the
//! executed move and the resulting range scan to [`localize`], which runs
//! motion update → sensor weighting → resampling and hands back a fresh
//! cloud of the same size:
//!
//! ```ignore
//! use disha_mcl::{MonteCarloLocalization, SeededRng};
//!
//! let mut mcl = MonteCarloLocalization::new(&map, SeededRng::new(42));
//! let mut cloud = mcl.generate_cloud(500)?;
//!
//! loop {
//!     let (movement, readings) = robot.step();
//!     cloud = mcl.localize(&cloud, &movement, &readings)?;
//!     if let Some(pose) = mcl.estimate(&cloud, 0.5) {
//!         break pose;
//!     }
//! }
//! ```
//!
//! When every particle becomes implausible (the kidnapped-robot case) the
//! engine discards the cloud and regenerates it from the map's valid pose
//! distribution; the caller never sees this as an error.
//!
//! [`localize`]: MonteCarloLocalization::localize

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: World models (depends on core)
// ============================================================================
pub mod world;

// ============================================================================
// Layer 3: Localization engine (depends on core, world)
// ============================================================================
pub mod localization;

pub mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core
pub use crate::core::math;
pub use crate::core::random::{RandomSource, SeededRng};

// Errors
pub use error::{MclError, Result};

// World contracts
pub use world::contracts::{MoveOps, PoseOps, RangeReadingOps, WorldKit, WorldMap};

// Planar kit
pub use world::planar::{
    Angle, MotionNoise, Move2D, Pose2D, RangeNoise, RangeReading2D, World2D,
};

// Engine
pub use localization::{MclDiagnostics, MonteCarloLocalization, ParticleCloud};
