//! Command handlers

use std::path::Path;

use anyhow::{Context, bail};
use colored::Colorize;
use formsmith_codegen::{Generator, GeneratorConfig};
use formsmith_core::FieldType;
use formsmith_ir::{FieldList, create_field, load_fields, to_json};
use formsmith_preview::{Notification, PreviewForm, SubmitOutcome};
use serde_json::{Map, Value};

use crate::output;

/// Load a field-list document
pub fn load(path: &Path) -> anyhow::Result<FieldList> {
    load_fields(path).with_context(|| format!("failed to load fields from {}", path.display()))
}

/// `formsmith new`: build a list from type tags and return its JSON
pub fn new_fields(types: &[String]) -> anyhow::Result<String> {
    let mut list = FieldList::new();
    for tag in types {
        let field_type: FieldType = tag.parse().with_context(|| {
            let known: Vec<&str> = FieldType::palette().iter().map(FieldType::as_str).collect();
            format!("expected one of: {}", known.join(", "))
        })?;
        list.append(create_field(field_type));
    }
    Ok(to_json(list.fields())?)
}

/// `formsmith generate`
pub fn generate(
    fields: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    component: Option<String>,
) -> anyhow::Result<()> {
    let list = load(fields)?;

    let mut config = match config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(name) = component {
        config.component_name = name;
    }

    let form = Generator::new(config).generate(list.fields());
    for warning in &form.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    match output {
        Some(path) => {
            form.write_to(path)?;
            eprintln!(
                "{} {} ({} fields) to {}",
                "Wrote".green().bold(),
                form.component_name,
                form.field_count,
                path.display()
            );
        }
        None => print!("{}", form.content),
    }
    Ok(())
}

/// `formsmith preview`. Returns `false` when submitted values were rejected.
pub fn preview(fields: &Path, values: Option<&Path>) -> anyhow::Result<bool> {
    let list = load(fields)?;
    let mut form = PreviewForm::render(list.fields());

    let Some(values_path) = values else {
        print!("{}", form.render_text());
        return Ok(true);
    };

    for (name, value) in read_values(values_path)? {
        form.set_value(&name, value)
            .with_context(|| format!("cannot set value for '{}'", name))?;
    }

    let mut notifications: Vec<Notification> = Vec::new();
    let outcome = form.submit(&mut notifications);
    print!("{}", form.render_text());
    println!();

    match outcome {
        SubmitOutcome::Accepted { .. } => {
            for notification in &notifications {
                println!("{}", notification.title.green().bold());
                println!("{}", notification.body);
            }
            Ok(true)
        }
        SubmitOutcome::Rejected { errors } => {
            eprint!("{}", output::rejection_report(&errors));
            Ok(false)
        }
    }
}

/// Read a values document: a JSON object keyed by field name
pub fn read_values(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read values from {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => bail!(
            "{} must contain a JSON object keyed by field name, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
