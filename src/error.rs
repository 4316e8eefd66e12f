//! Migration errors.

/// Errors raised while segmenting or migrating legacy rules.
///
/// Every variant except [`MigrationError::Symbol`] is a malformed-record
/// fault: an expected literal was not found where the legacy format requires
/// it. None of them are recovered inside the pipeline; the first one ends the
/// run.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Tag: {tag} not found!{}", record_suffix(.record))]
    TagNotFound {
        tag: &'static str,
        /// Raw record text, attached for fields where it aids diagnosis.
        record: Option<String>,
    },

    #[error("Tailmark {tailmark:?} for tag {tag} not found")]
    TailmarkNotFound {
        tag: &'static str,
        tailmark: &'static str,
    },

    #[error("Tag: {sentinel} not found past offset {cursor}")]
    SentinelStalled { sentinel: String, cursor: usize },

    #[error("Failed to write expression symbol: {0}")]
    Symbol(#[from] std::io::Error),
}

impl MigrationError {
    /// Whether this error describes malformed legacy input.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Symbol(_))
    }
}

fn record_suffix(record: &Option<String>) -> String {
    match record {
        Some(text) => format!("\nrule string: {}", text),
        None => String::new(),
    }
}

/// Result alias for migration operations.
pub type Result<T> = std::result::Result<T, MigrationError>;
