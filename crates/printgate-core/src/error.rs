//! Error type surfaced by gate invocations.

#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The call would push the cumulative argument count past the limit.
    #[error("output limit {limit} reached, call not allowed")]
    BudgetExceeded {
        /// The gate's configured limit.
        limit: usize,
    },

    /// The underlying sink failed to write. Passed through untouched; the
    /// gate adds no handling of its own.
    #[error("sink: {0}")]
    Sink(#[from] std::io::Error),
}
