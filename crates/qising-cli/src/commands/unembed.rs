//! Unembed command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use qising_core::{ising_solution, unembed_solution};

use super::common::{load_embedding, parse_values};

/// Execute the unembed command.
pub fn execute(solution: &str, embedding_path: &Path, ising: bool) -> Result<()> {
    let embedding = load_embedding(embedding_path)?;
    let raw: Vec<u8> = parse_values(solution)?;

    let logical = unembed_solution(&raw, &embedding)?;

    println!(
        "{} {} physical qubits → {} logical variables",
        style("→").cyan().bold(),
        embedding.len(),
        logical.len()
    );

    if ising {
        println!("  Spins: {:?}", ising_solution(&logical));
    } else {
        println!("  Solution: {logical:?}");
    }

    Ok(())
}
