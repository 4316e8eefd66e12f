//! Enforcement taxonomy for migrated rules.

use std::fmt;

/// How a rule's match is acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnforcementType {
    /// Drop the result entirely
    Blocklist,
    /// Move the result to the bottom
    PushBottom,
    /// Move the module to the top
    BringTop,
    /// Anything else; driven by the retained operation script
    AdditiveDemotion,
}

impl EnforcementType {
    /// Classify a legacy operation script by exact literal.
    pub fn from_operation(op: &str) -> Self {
        match op {
            "removeResult()" => Self::Blocklist,
            "placeResultModule(100, 'result')" => Self::PushBottom,
            "placeResultModule(0, 'module')" => Self::BringTop,
            _ => Self::AdditiveDemotion,
        }
    }

    /// Member name in the target enumeration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blocklist => "BLOCKLIST",
            Self::PushBottom => "PUSH_BOTTOM",
            Self::BringTop => "BRING_TOP",
            Self::AdditiveDemotion => "ADDITIVE_DEMOTION",
        }
    }

    /// Whether rules of this kind keep their operation script.
    pub fn retains_script(&self) -> bool {
        matches!(self, Self::AdditiveDemotion)
    }
}

impl fmt::Display for EnforcementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an integrity guard still applies to the migrated rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardType {
    #[default]
    Default,
    /// The legacy guard call was unwrapped from the filter expression
    None,
}

/// Operation script kept for an additive-demotion rule.
///
/// Call-shaped scripts are quoted; bare identifiers pass through.
pub fn operation_script(op: &str) -> String {
    if op.contains('(') {
        format!("\"{}\"", op)
    } else {
        op.to_string()
    }
}
