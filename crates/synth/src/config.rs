//! Configuration for dataset generation.

use crate::error::SynthError;

/// Configuration for [`crate::generate`].
///
/// # Example
///
/// ```
/// use iris_synth::GenerateConfig;
///
/// let config = GenerateConfig::new().with_seed(99).with_end_year(2030);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    seed: u32,
    start_year: i32,
    end_year: i32,
}

impl GenerateConfig {
    /// Creates a configuration with the defaults: `seed = 12345`,
    /// `start_year = 2014`, `end_year = 2024`.
    pub fn new() -> Self {
        Self {
            seed: 12345,
            start_year: 2014,
            end_year: 2024,
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the first generated year.
    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = year;
        self
    }

    /// Sets the last generated year (inclusive).
    pub fn with_end_year(mut self, year: i32) -> Self {
        self.end_year = year;
        self
    }

    /// Returns the RNG seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the first generated year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the last generated year (inclusive).
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Number of years in the span. Meaningful only for a valid config.
    pub fn n_years(&self) -> usize {
        (self.end_year - self.start_year + 1).max(0) as usize
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.end_year < self.start_year {
            return Err(SynthError::InvalidYearSpan {
                start: self.start_year,
                end: self.end_year,
            });
        }
        Ok(())
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GenerateConfig::new();
        assert_eq!(config.seed(), 12345);
        assert_eq!(config.start_year(), 2014);
        assert_eq!(config.end_year(), 2024);
        assert_eq!(config.n_years(), 11);
    }

    #[test]
    fn builder_chaining() {
        let config = GenerateConfig::new()
            .with_seed(7)
            .with_start_year(1900)
            .with_end_year(1999);
        assert_eq!(config.seed(), 7);
        assert_eq!(config.start_year(), 1900);
        assert_eq!(config.end_year(), 1999);
        assert_eq!(config.n_years(), 100);
    }

    #[test]
    fn single_year_span_is_valid() {
        let config = GenerateConfig::new()
            .with_start_year(2020)
            .with_end_year(2020);
        assert!(config.validate().is_ok());
        assert_eq!(config.n_years(), 1);
    }

    #[test]
    fn inverted_span_is_rejected() {
        let config = GenerateConfig::new()
            .with_start_year(2024)
            .with_end_year(2014);
        assert!(matches!(
            config.validate(),
            Err(SynthError::InvalidYearSpan {
                start: 2024,
                end: 2014
            })
        ));
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(GenerateConfig::default(), GenerateConfig::new());
    }
}
