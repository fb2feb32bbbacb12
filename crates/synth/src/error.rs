//! Error types for the iris-synth crate.

/// Error type for all fallible operations in the iris-synth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SynthError {
    /// Returned when a configured year span is inverted.
    #[error("invalid year span: start {start} is after end {end}")]
    InvalidYearSpan {
        /// First year of the span.
        start: i32,
        /// Last year of the span.
        end: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_year_span() {
        let e = SynthError::InvalidYearSpan {
            start: 2024,
            end: 2014,
        };
        assert_eq!(e.to_string(), "invalid year span: start 2024 is after end 2014");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SynthError>();
    }
}
