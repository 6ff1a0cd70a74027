use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Carries the input exactly as the caller supplied it, before normalization.
    #[error("{0} is not a valid email address")]
    InvalidFormat(String),
}
