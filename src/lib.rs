//! rulemt - Rule Migration Tool
//!
//! Converts a legacy Quark WPR rule configuration into `RuleInfo` records.
//! The pipeline is two stages: the [`Segmenter`] cuts the input into raw
//! records at each sentinel, and the [`Migrator`] pulls fields out of every
//! record and renders a [`MigratedRule`].

pub mod cli;
pub mod config;
pub mod error;
pub mod rule;
pub mod segmenter;
pub mod transform;

pub use config::Config;
pub use error::MigrationError;
pub use rule::MigratedRule;
pub use segmenter::{ContainsToken, Segmenter, SkipPredicate};
pub use transform::{Conversion, ConversionStats, EnforcementType, GuardType, ImportRefs, Migrator};
