//! Shared helpers for CLI commands.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use qising_core::{InverseEmbedding, IsingProblem};

/// How a command prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown format: '{other}'. Available: text, json"),
        }
    }
}

/// Load a YAML or JSON document, chosen by file extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&source)
            .with_context(|| format!("Failed to parse JSON: {}", path.display())),
        _ => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Failed to parse YAML: {}", path.display())),
    }
}

/// Load an Ising problem (`h` and `J`) from a file.
pub fn load_problem(path: &Path) -> Result<IsingProblem> {
    load_document(path)
}

/// Load a physical → logical inverse embedding from a file.
pub fn load_embedding(path: &Path) -> Result<InverseEmbedding> {
    load_document(path)
}

/// Parse a comma- or whitespace-separated list of values.
pub fn parse_values<T>(input: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<T>()
                .map_err(|e| anyhow::anyhow!("Invalid value '{s}': {e}"))
        })
        .collect()
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
