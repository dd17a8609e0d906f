use thiserror::Error;

/// Everything that can go wrong inside the optimizers.
///
/// Configuration variants are rejected at construction or at the call that
/// supplies the offending parameter; `Evaluation` propagates out of a
/// step/generation, which is then abandoned without touching optimizer
/// state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("population or swarm size must be greater than 0")]
    EmptyPopulation,

    #[error("vector length must be greater than 0")]
    ZeroVectorLength,

    #[error("num_informants must be greater than 0")]
    NoInformants,

    #[error("population size {0} is odd; child pairing requires an even size")]
    OddPopulation(usize),

    #[error("mutation scale {0} is negative")]
    NegativeMutationScale(f64),

    #[error("fitness evaluation failed in {function}: {reason}")]
    Evaluation {
        function: &'static str,
        reason: String,
    },
}

impl SearchError {
    /// Convenience constructor for the common dimension-mismatch case.
    pub fn dimension_mismatch(function: &'static str, expected: usize, actual: usize) -> Self {
        SearchError::Evaluation {
            function,
            reason: format!("expected a point of length {expected}, got {actual}"),
        }
    }
}
