//! Monte Carlo Localization (particle filter) engine.
//!
//! Estimates a robot pose in a known map by maintaining a cloud of pose
//! hypotheses. Each update cycle moves every particle through the noisy
//! motion model, weights it by comparing a real range scan against ray
//! casts from the hypothesis, and resamples the cloud proportionally to
//! those weights. When every particle becomes implausible, the cloud is
//! regenerated from scratch (kidnapped-robot recovery).
//!
//! # Components
//!
//! - [`MonteCarloLocalization`]: the update cycle
//! - [`MclDiagnostics`]: per-cycle filter health counters
//!
//! # Example
//!
//! ```ignore
//! use disha_mcl::{MonteCarloLocalization, SeededRng};
//!
//! let mut mcl = MonteCarloLocalization::new(&map, SeededRng::new(42));
//! let mut cloud = mcl.generate_cloud(500)?;
//!
//! // One cycle per executed move + scan
//! cloud = mcl.localize(&cloud, &movement, &readings)?;
//!
//! // Read off a point estimate once the cloud has contracted
//! let pose = mcl.estimate(&cloud, 0.5);
//! ```

mod monte_carlo;

pub use monte_carlo::{MclDiagnostics, MonteCarloLocalization, ParticleCloud};
