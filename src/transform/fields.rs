//! Table-driven field extraction.
//!
//! Each legacy field is described by a [`FieldSpec`]: its candidate
//! tag/tailmark pairs in priority order. [`extract`] walks the table and
//! returns the raw value slice; field-specific post-processing lives with the
//! callers in [`super`].

use crate::error::{MigrationError, Result};

/// One way a field may be written in a legacy record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagVariant {
    /// Literal immediately preceding the value
    pub tag: &'static str,
    /// Literal immediately following the value
    pub tailmark: &'static str,
}

impl TagVariant {
    const fn new(tag: &'static str, tailmark: &'static str) -> Self {
        Self { tag, tailmark }
    }
}

/// Extraction rules for one legacy field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Variants tried in order; the first tag present wins
    pub variants: &'static [TagVariant],
    /// Whether a missing tag aborts the migration
    pub required: bool,
    /// Tag text reported when no variant is present
    pub fault_tag: &'static str,
    /// Attach the raw record to the fault
    pub report_record: bool,
}

/// Value located by [`extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Index of the winning variant
    pub variant: usize,
    pub value: &'a str,
}

pub const NAME: FieldSpec = FieldSpec {
    variants: &[TagVariant::new("ruleName=\"", "\",")],
    required: true,
    fault_tag: "ruleName=\"",
    report_record: false,
};

/// Multi-line form is variant 0, single-line form variant 1.
pub const DESCRIPTION: FieldSpec = FieldSpec {
    variants: &[
        TagVariant::new("docString=(", "),"),
        TagVariant::new("docString=\"", "\","),
    ],
    required: true,
    fault_tag: "docString=*",
    report_record: false,
};

/// Triple-quoted, single-quoted, then bare assignment.
pub const TRIGGER: FieldSpec = FieldSpec {
    variants: &[
        TagVariant::new("actionTriggerStatement=\"\"\"", "\"\"\""),
        TagVariant::new("actionTriggerStatement=\"", "\","),
        TagVariant::new("actionTriggerStatement=", ","),
    ],
    required: false,
    fault_tag: "actionTriggerStatement=",
    report_record: false,
};

pub const FILTER: FieldSpec = FieldSpec {
    variants: &[TagVariant::new("resultFilterStatement=", ",")],
    required: true,
    fault_tag: "resultFilterStatement=",
    report_record: false,
};

/// Quoted operation script first, then the bare form.
pub const OPERATION: FieldSpec = FieldSpec {
    variants: &[
        TagVariant::new("resultOperationScript=\"", "\","),
        TagVariant::new("resultOperationScript=", ","),
    ],
    required: true,
    fault_tag: "resultOperationScript=",
    report_record: true,
};

pub const TRIGGER_BARE: usize = 2;
pub const DESCRIPTION_MULTI_LINE: usize = 0;

/// Locate a field value in a raw record.
///
/// Returns `Ok(None)` only for optional fields whose tags are all absent.
/// The tailmark search starts one character after the value start, so a
/// value is never empty unless the record is cut short.
pub fn extract<'a>(record: &'a str, spec: &FieldSpec) -> Result<Option<Extracted<'a>>> {
    let found = spec.variants.iter().enumerate().find_map(|(index, variant)| {
        record
            .find(variant.tag)
            .map(|pos| (index, variant, pos + variant.tag.len()))
    });

    let Some((variant_index, variant, start)) = found else {
        if spec.required {
            return Err(MigrationError::TagNotFound {
                tag: spec.fault_tag,
                record: spec.report_record.then(|| record.to_string()),
            });
        }
        return Ok(None);
    };

    let search_from = record[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());

    let end = record[search_from..]
        .find(variant.tailmark)
        .map(|offset| search_from + offset)
        .ok_or(MigrationError::TailmarkNotFound {
            tag: variant.tag,
            tailmark: variant.tailmark,
        })?;

    Ok(Some(Extracted {
        variant: variant_index,
        value: &record[start..end],
    }))
}

/// Like [`extract`], for fields that must be present.
pub fn extract_required<'a>(record: &'a str, spec: &FieldSpec) -> Result<Extracted<'a>> {
    extract(record, spec)?.ok_or(MigrationError::TagNotFound {
        tag: spec.fault_tag,
        record: None,
    })
}
