use thiserror::Error as ThisError;

/// Errors raised while building a [`HarnessConfig`](crate::harness::HarnessConfig).
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum HarnessError {
    #[error("no values of n to measure")]
    EmptyRange,

    #[error("repetitions must be at least 1")]
    ZeroRepetitions,
}
