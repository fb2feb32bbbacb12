//! # iris-synth
//!
//! Deterministic synthesis of the full UK regional weather dataset.
//!
//! Given a seed and an inclusive year span, [`generate`] produces one
//! [`AnnualRecord`] per (region, year) pair, bit-for-bit identical across
//! repeated invocations with the same inputs. All randomness comes from a
//! single [`Lcg`] stepped in one documented sequence; the per-region
//! climatological baselines and per-metric seasonal shapes are compiled-in
//! constants.
//!
//! # Quick start
//!
//! ```
//! use iris_synth::{generate, GenerateConfig};
//!
//! let config = GenerateConfig::new().with_start_year(2020).with_end_year(2024);
//! let dataset = generate(&config).unwrap();
//! assert_eq!(dataset.len(), 14 * 5);
//! ```

mod config;
mod dataset;
mod error;
mod generate;
mod lcg;
mod pattern;
mod profile;
mod series;

pub use config::GenerateConfig;
pub use dataset::Dataset;
pub use error::SynthError;
pub use generate::generate;
pub use lcg::Lcg;
pub use profile::RegionProfile;
pub use series::{AnnualRecord, MetricSeries};
