//! Error types for the iris-catalog crate.

/// Error type for catalog name parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Returned when a region id does not match any catalog entry.
    #[error("unknown region: {name}")]
    UnknownRegion {
        /// The unrecognized id.
        name: String,
    },

    /// Returned when a metric id does not match any catalog entry.
    #[error("unknown metric: {name}")]
    UnknownMetric {
        /// The unrecognized id.
        name: String,
    },

    /// Returned when a period selector is neither a month, a season, nor `annual`.
    #[error("unknown period: {name} (expected a month, a season, or \"annual\")")]
    UnknownPeriod {
        /// The unrecognized selector.
        name: String,
    },
}
