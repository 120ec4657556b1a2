use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// The requested city has no restaurants in the dataset. Callers should
    /// ask for a different city rather than treat this as fatal.
    #[error("No restaurants found in city '{0}'")]
    NotFound(String),

    #[error("Cannot compute {0} over an empty set of restaurants")]
    EmptySubset(String),
}
