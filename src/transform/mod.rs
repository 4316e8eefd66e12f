//! Legacy rule to target rule transformation.
//!
//! [`Migrator`] owns the state of one conversion run: the naming rules, the
//! set of filter expressions seen so far, and the optional symbol side
//! channel. Each raw record goes through the same fixed sequence of field
//! extractions:
//!
//! 1. name
//! 2. description
//! 3. trigger statement (optional)
//! 4. filter expression (records new symbols)
//! 5. combined expression
//! 6. enforcement type and operation script
//!
//! # Module Structure
//!
//! - [`fields`] - Tag/tailmark tables and the generic extraction routine
//! - [`normalize`] - Per-field value rewriting
//! - [`enforcement`] - Enforcement taxonomy
//! - [`imports`] - Distinct expression symbols

pub mod enforcement;
pub mod fields;
mod imports;
pub mod normalize;

use std::io::Write;

use humansize::{format_size, DECIMAL};
use tracing::{debug, info};

pub use enforcement::{operation_script, EnforcementType, GuardType};
pub use imports::ImportRefs;

use crate::config::Config;
use crate::error::Result;
use crate::rule::MigratedRule;
use crate::segmenter::Segmenter;

/// Trigger statement that means "always".
const TRIGGER_ALWAYS: &str = "1";

/// Filter expression after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression {
    pub text: String,
    /// The legacy expression was wrapped in the integrity guard call
    pub unwrapped_guard: bool,
}

/// Totals for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Records migrated
    pub migrated: usize,
    /// Records dropped by skip predicates
    pub skipped: usize,
    /// Distinct filter expressions
    pub expressions: usize,
}

/// Output of a complete conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Concatenated target records in encounter order
    pub output: String,
    pub stats: ConversionStats,
}

/// One conversion run.
pub struct Migrator {
    config: Config,
    import_refs: ImportRefs,
    symbol_sink: Option<Box<dyn Write>>,
}

impl Migrator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            import_refs: ImportRefs::new(),
            symbol_sink: None,
        }
    }

    /// Write `<symbol>,` lines for new filter expressions to `sink`.
    pub fn with_symbol_sink(mut self, sink: Box<dyn Write>) -> Self {
        self.symbol_sink = Some(sink);
        self
    }

    pub fn import_refs(&self) -> &ImportRefs {
        &self.import_refs
    }

    /// Forget every expression seen so far.
    pub fn reset(&mut self) {
        self.import_refs.clear();
    }

    /// Segment and migrate a whole legacy buffer.
    ///
    /// Nothing is returned unless every accepted record migrates.
    pub fn convert(&mut self, input: &str) -> Result<Conversion> {
        info!(size = %format_size(input.len(), DECIMAL), "converting legacy rules");

        let mut segmenter = Segmenter::from_config(input, &self.config.segmenter);
        let mut output = String::with_capacity(input.len());
        let mut migrated = 0;

        for record in segmenter.by_ref() {
            output.push_str(&self.migrate(record?)?);
            migrated += 1;
        }

        let stats = ConversionStats {
            migrated,
            skipped: segmenter.skipped(),
            expressions: self.import_refs.len(),
        };
        info!(
            migrated = stats.migrated,
            skipped = stats.skipped,
            expressions = stats.expressions,
            "conversion complete"
        );

        if let Some(sink) = self.symbol_sink.as_mut() {
            sink.flush()?;
        }

        Ok(Conversion { output, stats })
    }

    /// Migrate one raw record to its target text.
    pub fn migrate(&mut self, record: &str) -> Result<String> {
        Ok(self.migrate_rule(record)?.to_string())
    }

    /// Migrate one raw record to a [`MigratedRule`].
    pub fn migrate_rule(&mut self, record: &str) -> Result<MigratedRule> {
        let name = self.rule_name(record)?;
        let description = description(record)?;
        let trigger = trigger_statement(record)?;
        let filter = self.filter_expression(record)?;
        let expression = combine(&trigger, &filter.text);
        let operation = fields::extract_required(record, &fields::OPERATION)?.value;

        let mut rule = MigratedRule::new(name, description, expression, operation);
        if filter.unwrapped_guard {
            rule.guard = GuardType::None;
        }
        Ok(rule)
    }

    fn rule_name(&self, record: &str) -> Result<String> {
        let legacy = fields::extract_required(record, &fields::NAME)?.value;
        Ok(normalize::rule_name(legacy, &self.config.naming))
    }

    /// Extract and normalize the filter expression, recording its symbol.
    pub fn filter_expression(&mut self, record: &str) -> Result<FilterExpression> {
        let raw = fields::extract_required(record, &fields::FILTER)?.value;

        let filter = match normalize::unwrap_guard(raw) {
            Some(text) => FilterExpression {
                text,
                unwrapped_guard: true,
            },
            None if raw.contains('(') => FilterExpression {
                text: normalize::adjust_indentation(raw),
                unwrapped_guard: false,
            },
            None => FilterExpression {
                text: raw.to_string(),
                unwrapped_guard: false,
            },
        };

        if let Some(symbol) = self.import_refs.record(&filter.text) {
            debug!(symbol, "new expression symbol");
            if let Some(sink) = self.symbol_sink.as_mut() {
                writeln!(sink, "{},", symbol)?;
            }
        }

        Ok(filter)
    }
}

/// Description literal: parenthesized multi-line form or quoted single line.
pub fn description(record: &str) -> Result<String> {
    let found = fields::extract_required(record, &fields::DESCRIPTION)?;
    if found.variant == fields::DESCRIPTION_MULTI_LINE {
        Ok(format!("({})", normalize::adjust_indentation(found.value)))
    } else {
        Ok(normalize::quote(found.value))
    }
}

/// Trigger statement, or an empty string when the record has none.
pub fn trigger_statement(record: &str) -> Result<String> {
    Ok(match fields::extract(record, &fields::TRIGGER)? {
        Some(found) if found.variant == fields::TRIGGER_BARE => format!("{{{}}}", found.value),
        Some(found) => found.value.to_string(),
        None => String::new(),
    })
}

/// Join trigger and filter into one target expression.
pub fn combine(trigger: &str, filter: &str) -> String {
    if trigger.is_empty() || trigger == TRIGGER_ALWAYS {
        return filter.to_string();
    }
    format!("f\"\"\"({}) and ({{{}}})\"\"\"", trigger, filter)
}
