use thiserror::Error;

/// Error produced when a search fails.
///
/// Failing to find the goal is not an error; searches return `None`
/// for that case.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
