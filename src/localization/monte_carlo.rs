//! The Monte-Carlo-Localization update cycle.
//!
//! Implements sequential importance resampling over a cloud of pose
//! hypotheses: motion update, range-sensor weighting, and weighted
//! resampling with replacement, extended by a weight cutoff that detects
//! total cloud degeneracy and regenerates the cloud when the robot is lost.
//!
//! # State machine
//!
//! ```text
//! ┌───────────────┐  generate_cloud   ┌──────────┐
//! │ UNINITIALIZED │ ────────────────▶ │ TRACKING │ ──┐
//! └───────────────┘                   └──────────┘   │ localize
//!                                          ▲         │
//!                                          └─────────┘
//! ```
//!
//! The caller owns the cloud; the engine keeps only the resampling index
//! distribution and the configured weight cutoff between cycles. Calling
//! `localize` with an empty cloud reports `NotInitialized`.
//!
//! The motion and weighting phases are pure per-particle loops over the
//! shared read-only map and scan, so a host may shard them across workers;
//! resampling needs the full weight vector first (normalization and the
//! degeneracy test are global). This implementation stays sequential to
//! keep one exclusive random stream, which makes runs bit-reproducible
//! under a fixed seed.

use crate::core::random::RandomSource;
use crate::error::{MclError, Result};
use crate::world::contracts::{MoveOps, PoseOps, RangeReadingOps, WorldKit, WorldMap};
use std::marker::PhantomData;

/// A cloud of pose hypotheses. Duplicates are expected after resampling.
pub type ParticleCloud<K> = Vec<<K as WorldKit>::Pose>;

/// Filter health counters, updated once per cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MclDiagnostics {
    /// Completed `localize` cycles.
    pub cycles: u64,
    /// Total cloud regenerations triggered by degeneracy.
    pub recoveries: u64,
    /// Highest raw particle weight seen in the last cycle.
    pub max_weight: f64,
    /// Whether the last cycle regenerated the cloud.
    pub recovered: bool,
}

/// Discrete index distribution over `[0, count)` for the weighted
/// resampling draws.
///
/// Rebuilt whenever a cloud is generated; `draw` walks the cumulative sum
/// of the normalized weights and picks the first index whose cumulative
/// mass exceeds the uniform draw `r`.
#[derive(Debug, Clone, Copy)]
struct SampleIndexes {
    count: usize,
}

impl SampleIndexes {
    fn new(count: usize) -> Self {
        Self { count }
    }

    fn count(&self) -> usize {
        self.count
    }

    fn draw(&self, r: f64, normalized: &[f64]) -> usize {
        let mut cumulative = 0.0;
        for (index, weight) in normalized.iter().enumerate().take(self.count) {
            cumulative += weight;
            if r < cumulative {
                return index;
            }
        }
        // r landed in the tail lost to rounding
        self.count.saturating_sub(1)
    }
}

/// Normalize a weight vector to unit sum.
///
/// Falls back to the uniform distribution when the sum carries no mass;
/// the resampling step only reaches this with at least one positive weight.
fn normalize(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return vec![1.0 / weights.len() as f64; weights.len()];
    }
    weights.iter().map(|w| w / total).collect()
}

/// Monte Carlo Localization engine.
///
/// Generic over a [`WorldKit`] `K` (the pose/move/sensor value types), a
/// [`WorldMap`] `M` (host-supplied geometry queries, typically passed by
/// reference) and a [`RandomSource`] `R` driving every stochastic draw.
#[derive(Debug)]
pub struct MonteCarloLocalization<K, M, R>
where
    K: WorldKit,
    M: WorldMap<K>,
    R: RandomSource,
{
    map: M,
    rng: R,
    weight_cutoff: f64,
    sample_indexes: SampleIndexes,
    diagnostics: MclDiagnostics,
    _kit: PhantomData<K>,
}

impl<K, M, R> MonteCarloLocalization<K, M, R>
where
    K: WorldKit,
    M: WorldMap<K>,
    R: RandomSource,
{
    /// Create an engine over `map`, drawing from `rng`.
    ///
    /// The weight cutoff starts at `0.0`: recovery triggers only when every
    /// particle weight is exactly zero.
    pub fn new(map: M, rng: R) -> Self {
        Self {
            map,
            rng,
            weight_cutoff: 0.0,
            sample_indexes: SampleIndexes::new(0),
            diagnostics: MclDiagnostics::default(),
            _kit: PhantomData,
        }
    }

    /// Set the minimum particle weight.
    ///
    /// When no particle weighs strictly more than `cutoff`, the resampling
    /// step declares the robot lost and regenerates the cloud. The cutoff
    /// never excludes individual particles from the draw. Set to `0.0` when
    /// in doubt; negative values are stored as `0.0`.
    pub fn set_weight_cutoff(&mut self, cutoff: f64) {
        self.weight_cutoff = cutoff.max(0.0);
    }

    /// The configured weight cutoff.
    pub fn weight_cutoff(&self) -> f64 {
        self.weight_cutoff
    }

    /// Filter health counters.
    pub fn diagnostics(&self) -> &MclDiagnostics {
        &self.diagnostics
    }

    /// Initialization phase: a cloud of `n` poses drawn from the map.
    ///
    /// Also resets the resampling index distribution to `[0, n)`. Every
    /// pose comes from [`WorldMap::random_pose`] unfiltered.
    pub fn generate_cloud(&mut self, n: usize) -> Result<ParticleCloud<K>> {
        if n == 0 {
            return Err(MclError::InvalidParticleCount(n));
        }
        Ok(self.fresh_cloud(n))
    }

    /// Executes the update cycle for one move and the range scan taken
    /// after it: motion update, sensor weighting, resampling.
    ///
    /// Returns a new cloud of the same size. An empty `samples` cloud
    /// reports [`MclError::NotInitialized`]; call
    /// [`generate_cloud`](Self::generate_cloud) first. Total degeneracy is
    /// not an error: the cloud comes back regenerated instead.
    pub fn localize(
        &mut self,
        samples: &[K::Pose],
        movement: &K::Move,
        range_readings: &[K::RangeReading],
    ) -> Result<ParticleCloud<K>> {
        if samples.is_empty() {
            return Err(MclError::NotInitialized);
        }

        self.diagnostics.cycles += 1;
        self.diagnostics.recovered = false;

        let moved = self.apply_move(samples, movement);
        let weights = self.weight_samples(&moved, range_readings);
        self.diagnostics.max_weight = weights.iter().copied().fold(0.0, f64::max);

        Ok(self.resample(&moved, &weights))
    }

    /// Point estimate of the pose, if the cloud has contracted enough.
    ///
    /// Returns the map's centroid of `samples` when the maximum pairwise
    /// particle distance is at most `max_spread`, `None` while the cloud is
    /// still multi-modal or spread out.
    pub fn estimate(&self, samples: &[K::Pose], max_spread: f64) -> Option<K::Pose> {
        if samples.is_empty() {
            return None;
        }
        let mut spread = 0.0;
        for first in samples {
            for second in samples {
                let distance = first.distance_to(second);
                if distance > spread {
                    spread = distance;
                }
            }
        }
        if spread <= max_spread {
            Some(self.map.average(samples))
        } else {
            None
        }
    }

    /// Motion update: apply the move to every particle with fresh noise.
    ///
    /// Noise is drawn once per particle, so the cloud samples the motion
    /// model's conditional distribution. Invalid resulting poses are kept;
    /// the weighting step penalizes them.
    fn apply_move(&mut self, samples: &[K::Pose], movement: &K::Move) -> Vec<K::Pose> {
        let mut moved = Vec::with_capacity(samples.len());
        for pose in samples {
            let noisy = movement.generate_noise(&mut self.rng);
            moved.push(pose.apply_movement(&noisy));
        }
        moved
    }

    /// Sensor weighting: one raw weight per particle, in cloud order.
    ///
    /// An invalid pose weighs exactly `0.0`. A valid pose starts at `1.0`
    /// and multiplies in each beam's likelihood against the ray cast along
    /// that beam, treating beams as conditionally independent given the
    /// pose.
    fn weight_samples(&self, samples: &[K::Pose], range_readings: &[K::RangeReading]) -> Vec<f64> {
        let mut weights = Vec::with_capacity(samples.len());
        for pose in samples {
            if !self.map.is_pose_valid(pose) {
                weights.push(0.0);
                continue;
            }
            let mut weight = 1.0;
            for reading in range_readings {
                let predicted = self.map.ray_cast(&pose.add_angle(reading.angle()));
                weight *= reading.calculate_weight(&predicted);
            }
            weights.push(weight);
        }
        weights
    }

    /// Weighted resampling with replacement, extended by the degeneracy
    /// check.
    ///
    /// When no weight exceeds the cutoff the whole cloud is implausible;
    /// the robot is lost and a fresh cloud replaces it. Otherwise N
    /// particles are drawn with replacement from the normalized weight
    /// distribution. Both branches return exactly `samples.len()`
    /// particles.
    fn resample(&mut self, samples: &[K::Pose], weights: &[f64]) -> Vec<K::Pose> {
        debug_assert_eq!(samples.len(), weights.len());

        if !weights.iter().any(|&w| w > self.weight_cutoff) {
            log::warn!(
                "all {} particles at or below weight cutoff {}, regenerating cloud",
                samples.len(),
                self.weight_cutoff
            );
            self.diagnostics.recoveries += 1;
            self.diagnostics.recovered = true;
            return self.fresh_cloud(samples.len());
        }

        let normalized = normalize(weights);
        if self.sample_indexes.count() != samples.len() {
            self.sample_indexes = SampleIndexes::new(samples.len());
        }
        let indexes = self.sample_indexes;

        let mut resampled = Vec::with_capacity(samples.len());
        for _ in 0..samples.len() {
            let r = self.rng.next_f64();
            resampled.push(samples[indexes.draw(r, &normalized)].clone());
        }
        resampled
    }

    /// Draw a brand-new cloud and reset the index distribution.
    fn fresh_cloud(&mut self, n: usize) -> Vec<K::Pose> {
        self.sample_indexes = SampleIndexes::new(n);
        let mut cloud = Vec::with_capacity(n);
        for _ in 0..n {
            cloud.push(self.map.random_pose(&mut self.rng));
        }
        cloud
    }
}
