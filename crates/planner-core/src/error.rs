//! Error types for the planner core.

/// Errors raised by the planner stores and utilities.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The key-value backend refused a read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// A slot could not be encoded or decoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Month outside 1..=12.
    #[error("invalid month: {0}")]
    InvalidMonth(u32),

    /// Priority text that is not high, medium or low.
    #[error("invalid priority: {0}")]
    InvalidPriority(String),
}

/// Convenience alias for planner results.
pub type PlannerResult<T> = std::result::Result<T, PlannerError>;
