//! Error types for DishaMCL.

use thiserror::Error;

/// DishaMCL error type.
///
/// Covers caller mistakes only. Total particle degeneracy is not an error:
/// the engine recovers from it internally by regenerating the cloud.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MclError {
    /// A particle cloud must contain at least one particle.
    #[error("invalid particle count: {0}")]
    InvalidParticleCount(usize),

    /// `localize` was called without a prior cloud.
    #[error("no particle cloud: call generate_cloud before localize")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, MclError>;
