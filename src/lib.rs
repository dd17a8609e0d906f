use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of a fitness landscape's interesting region.
///
/// Used by drivers for display and initialization hints. The optimizers
/// themselves never clamp or reject points against these bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// A scalar objective to minimize over fixed-length real vectors.
///
/// Implementations must be pure: the value depends only on `point` and the
/// function's own immutable configuration. Variants that are fixed to a
/// specific dimensionality report a mismatched point as
/// [`SearchError::Evaluation`].
pub trait FitnessFunction: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    fn evaluate(&self, point: &[f64]) -> Result<f64, SearchError>;

    /// Known global minima, for validation and plotting. No behavioral
    /// effect on optimization.
    fn minima(&self) -> Vec<Vec<f64>>;

    fn domain(&self) -> Domain;
}

pub mod error;
pub mod functions;

pub mod algorithms {
    pub mod ga;
    pub mod pso;
}

pub use algorithms::ga::GeneticAlgorithm;
pub use algorithms::pso::{Particle, Pso, StepWeights};
pub use error::SearchError;
