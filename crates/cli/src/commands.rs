use anyhow::Context;
use rrhex_domain::{Config, RecordDescription, TypeRegistry};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::di::UseCases;

/// Encode input: a JSON array of records, or a single record object.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RecordsInput {
    Many(Vec<RecordDescription>),
    One(RecordDescription),
}

impl RecordsInput {
    pub fn into_records(self) -> Vec<RecordDescription> {
        match self {
            RecordsInput::Many(records) => records,
            RecordsInput::One(record) => vec![record],
        }
    }
}

pub fn parse_records(text: &str) -> anyhow::Result<Vec<RecordDescription>> {
    let input: RecordsInput = serde_json::from_str(text)
        .context("Input must be a JSON record object or an array of records")?;
    Ok(input.into_records())
}

pub fn encode(use_cases: &UseCases, input: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", encode_text(use_cases, &read_input(input)?)?);
    Ok(())
}

pub fn encode_text(use_cases: &UseCases, text: &str) -> anyhow::Result<String> {
    let records = parse_records(text)?;
    let hex = use_cases.encode.execute(&records)?;

    info!(records = records.len(), "Encoded records");
    Ok(hex)
}

pub fn decode(
    use_cases: &UseCases,
    hex: Option<&str>,
    input: Option<&Path>,
    compact: bool,
) -> anyhow::Result<()> {
    let text = match hex {
        Some(hex) => hex.to_string(),
        None => read_input(input)?,
    };

    println!("{}", decode_text(use_cases, &text, compact)?);
    Ok(())
}

pub fn decode_text(use_cases: &UseCases, text: &str, compact: bool) -> anyhow::Result<String> {
    let records = use_cases.decode.execute(text)?;
    info!(records = records.len(), "Decoded records");

    let json = if compact {
        serde_json::to_string(&records)?
    } else {
        serde_json::to_string_pretty(&records)?
    };
    Ok(json)
}

pub fn types(registry: &TypeRegistry) {
    print!("{}", format_types(registry));
}

/// One `NAME<TAB>CODE` line per enabled type, in code order.
pub fn format_types(registry: &TypeRegistry) -> String {
    registry
        .entries()
        .map(|(name, code)| format!("{}\t{}\n", name, code))
        .collect()
}

pub fn config(config: &Config, write: Option<&str>) -> anyhow::Result<()> {
    match write {
        Some(path) => {
            config.save(path)?;
            info!("Configuration written to {}", path);
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
