//! Output formatting

use std::collections::BTreeMap;
use std::fmt::Write as _;

use colored::Colorize;
use formsmith_core::{FieldType, Validatable};
use formsmith_ir::{FieldError, FieldList};

/// Summary printed by `formsmith info`
pub fn info_report(list: &FieldList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "Fields:".bold(), list.len());

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for field in list {
        *counts.entry(field.field_type.as_str()).or_default() += 1;
    }
    for (tag, count) in &counts {
        let _ = writeln!(out, "  {:<10} {}", tag, count);
    }

    if !list.is_empty() {
        let _ = writeln!(out, "{}", "Names:".bold());
        for (index, field) in list.iter().enumerate() {
            let required = if field.required { " *" } else { "" };
            let _ = writeln!(
                out,
                "  {:>2}. {} ({}){}",
                index + 1,
                field.name,
                field.field_type,
                required
            );
        }
    }

    let warnings = warnings(list);
    if warnings.is_empty() {
        let _ = writeln!(out, "{}", "No warnings".green());
    } else {
        let _ = writeln!(out, "{} {}", "Warnings:".yellow().bold(), warnings.len());
        for warning in warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }
    out
}

/// Validation problems across a list, in field order
pub fn warnings(list: &FieldList) -> Vec<String> {
    let mut warnings: Vec<String> = list
        .iter()
        .flat_map(|field| field.validation_errors())
        .collect();
    for name in list.duplicate_names() {
        warnings.push(format!("Field name '{}' is used more than once", name));
    }
    warnings
}

/// The palette printed by `formsmith types`
pub fn types_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:<10} {:<8} {}", "TYPE", "NAME", "DEFAULT", "OPTIONS");
    for field_type in FieldType::palette() {
        let behavior = field_type.behavior();
        let _ = writeln!(
            out,
            "{:<10} {:<10} {:<8} {}",
            field_type.as_str(),
            field_type.display_name(),
            behavior.default_value.to_js(),
            if behavior.choice { "yes" } else { "-" }
        );
    }
    out
}

/// Per-field errors after a rejected submit
pub fn rejection_report(errors: &[FieldError]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} field(s) failed validation",
        "rejected:".red().bold(),
        errors.len()
    );
    for error in errors {
        let _ = writeln!(out, "  {}", error);
    }
    out
}
