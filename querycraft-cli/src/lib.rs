//! Loading, building and printing for the `querycraft` binary.

use std::io::Read;

use anyhow::{Context, Result};
use clap::ValueEnum;
use querycraft_staging::options::{FIELD_OPTIONS, operator_options};
use querycraft_staging::{BuiltQuery, FormStaging};
use serde::Serialize;

/// Which output form(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Expression string only.
    Expression,
    /// Structured rules as JSON only.
    Json,
    /// Expression string, then the JSON rules.
    #[default]
    Both,
}

/// Reads a staging document (a JSON array of groups).
pub fn load_staging<R: Read>(mut reader: R) -> Result<FormStaging> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("Failed to read staging document")?;
    let staging = FormStaging::from_json(&raw).context("Invalid staging document")?;
    Ok(staging)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Formats a built query for stdout.
pub fn render_output(built: &BuiltQuery, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Expression => Ok(built.expression.clone()),
        OutputFormat::Json => to_json(&built.rules, pretty),
        OutputFormat::Both => Ok(format!(
            "{}\n{}",
            built.expression,
            to_json(&built.rules, pretty)?
        )),
    }
}

/// The field and operator tables printed by `querycraft fields`.
#[must_use]
pub fn render_options() -> String {
    let mut out = String::from("Fields:\n");
    for opt in FIELD_OPTIONS {
        out.push_str(&format!("  {:<12} {}\n", opt.value, opt.label));
    }
    out.push_str("Operators:\n");
    for (op, label) in operator_options() {
        out.push_str(&format!("  {:<12} {:<9} {}\n", op.name(), op.symbol(), label));
    }
    out
}
