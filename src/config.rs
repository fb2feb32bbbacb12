use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use iris_synth::GenerateConfig;
use serde::Deserialize;

/// Top-level iris configuration.
///
/// The region and metric catalogs are compiled in; the TOML file only
/// parameterizes dataset generation. A missing file means "all defaults".
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IrisConfig {
    /// Dataset generation settings.
    #[serde(default)]
    pub generate: GenerateToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateToml {
    /// RNG seed. Defaults to the compiled-in seed.
    pub seed: Option<u32>,

    /// First generated year.
    pub start_year: Option<i32>,

    /// Last generated year (inclusive).
    pub end_year: Option<i32>,
}

impl IrisConfig {
    /// Loads configuration from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: IrisConfig = toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Builds the generator config, applying the CLI seed override on top
    /// of the file values.
    pub fn generate_config(&self, seed_override: Option<u32>) -> GenerateConfig {
        let mut config = GenerateConfig::new();
        if let Some(seed) = seed_override.or(self.generate.seed) {
            config = config.with_seed(seed);
        }
        if let Some(year) = self.generate.start_year {
            config = config.with_start_year(year);
        }
        if let Some(year) = self.generate.end_year {
            config = config.with_end_year(year);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_keeps_defaults() {
        let config: IrisConfig = toml::from_str("").unwrap();
        let gen = config.generate_config(None);
        assert_eq!(gen, GenerateConfig::new());
    }

    #[test]
    fn file_values_apply() {
        let config: IrisConfig = toml::from_str(
            "[generate]\nseed = 99\nstart_year = 1990\nend_year = 2000\n",
        )
        .unwrap();
        let gen = config.generate_config(None);
        assert_eq!(gen.seed(), 99);
        assert_eq!(gen.start_year(), 1990);
        assert_eq!(gen.end_year(), 2000);
    }

    #[test]
    fn cli_seed_wins_over_file_seed() {
        let config: IrisConfig = toml::from_str("[generate]\nseed = 99\n").unwrap();
        let gen = config.generate_config(Some(7));
        assert_eq!(gen.seed(), 7);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<IrisConfig>("[generate]\nyears = 10\n").is_err());
    }
}
