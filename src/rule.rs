//! Target rule record and its textual form.

use std::fmt;

use crate::transform::{operation_script, EnforcementType, GuardType};

const HEAD: &str = "RuleInfo(";
const TAIL: &str = ")";
const INDENT: &str = "    ";
const ENFORCEMENT_QUALIFIER: &str = "IntegrityEnforcementType";

/// A rule in the target notation.
///
/// All string fields hold their final literal form (quotes, parentheses and
/// braces already applied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedRule {
    pub name: String,
    pub description: String,
    pub expression: String,
    pub guard: GuardType,
    enforcement_type: EnforcementType,
    operation_script: Option<String>,
}

impl MigratedRule {
    /// Build a rule, classifying the raw legacy operation script.
    ///
    /// The script is kept only when the rule is an additive demotion.
    pub fn new(name: String, description: String, expression: String, operation: &str) -> Self {
        let enforcement_type = EnforcementType::from_operation(operation);
        Self {
            name,
            description,
            expression,
            guard: GuardType::Default,
            enforcement_type,
            operation_script: enforcement_type
                .retains_script()
                .then(|| operation_script(operation)),
        }
    }

    pub fn enforcement_type(&self) -> EnforcementType {
        self.enforcement_type
    }

    pub fn operation_script(&self) -> Option<&str> {
        self.operation_script.as_deref()
    }
}

/// Writes one record line at `depth` indentation units.
fn line(
    f: &mut fmt::Formatter<'_>,
    depth: usize,
    text: fmt::Arguments<'_>,
    sep: bool,
) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    f.write_fmt(text)?;
    if sep {
        f.write_str(",")?;
    }
    f.write_str("\n")
}

impl fmt::Display for MigratedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        line(f, 1, format_args!("{}", HEAD), false)?;
        line(f, 2, format_args!("name={}", self.name), true)?;
        line(f, 2, format_args!("desc={}", self.description), true)?;
        line(f, 2, format_args!("quark_exp={}", self.expression), true)?;
        line(
            f,
            2,
            format_args!(
                "enforcement_type={}.{}",
                ENFORCEMENT_QUALIFIER, self.enforcement_type
            ),
            true,
        )?;
        if let Some(script) = &self.operation_script {
            line(f, 2, format_args!("op_str={}", script), true)?;
        }
        line(f, 1, format_args!("{}", TAIL), true)
    }
}
