//! Per-field value normalization.

use crate::config::NamingConfig;

/// Indentation of continuation lines in the legacy file.
const LEGACY_INDENT: &str = "                   ";
/// Indentation of continuation lines in the target file.
const TARGET_INDENT: &str = "       ";

/// Call wrapping guarded filter expressions.
pub const GUARD_CALL: &str = "apply_with_integrity_guard(";

pub fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

/// Re-level continuation lines to the target indentation.
pub fn adjust_indentation(value: &str) -> String {
    value.replace(LEGACY_INDENT, TARGET_INDENT)
}

/// Turn a legacy rule name into its namespaced, quoted target name.
///
/// Applied in order:
/// 1. First matching legacy prefix stripped
/// 2. Every legacy infix removed, wherever it occurs
/// 3. Trailing legacy suffixes stripped
/// 4. Namespace prefix prepended
pub fn rule_name(legacy: &str, naming: &NamingConfig) -> String {
    let mut name = naming
        .legacy_prefixes
        .iter()
        .find_map(|prefix| legacy.strip_prefix(prefix.as_str()))
        .unwrap_or(legacy)
        .to_string();

    for infix in &naming.legacy_infixes {
        if !infix.is_empty() {
            name = name.replace(infix.as_str(), "");
        }
    }

    for suffix in &naming.legacy_suffixes {
        if let Some(stripped) = name.strip_suffix(suffix.as_str()) {
            name = stripped.to_string();
        }
    }

    quote(&format!("{}{}", naming.namespace_prefix, name))
}

/// Remove the integrity guard call around a filter expression.
///
/// Returns `None` when the expression is not guard-wrapped.
pub fn unwrap_guard(expression: &str) -> Option<String> {
    if !expression.starts_with(GUARD_CALL) {
        return None;
    }

    let inner = expression.replace(GUARD_CALL, "");
    let inner = inner.trim_end_matches([' ', '\r', '\n']);
    // closing paren of the guard call
    let inner = match inner.char_indices().next_back() {
        Some((pos, _)) => &inner[..pos],
        None => inner,
    };

    Some(
        inner
            .trim_start()
            .trim_end_matches([' ', '\r', '\n'])
            .to_string(),
    )
}

/// Callable name referenced by an expression: text before the first `(`.
pub fn expression_symbol(expression: &str) -> &str {
    match expression.find('(') {
        Some(pos) => &expression[..pos],
        None => expression,
    }
}
