//! Compile command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qising_core::{
    BiasIndexing, CompiledHamiltonian, HamiltonianCompiler, IdentityRemap, QubitRemap,
    ReservedQubitShift,
};

use super::common::{OutputFormat, load_problem, write_output};

/// Execute the compile command.
pub fn execute(
    problem_path: &Path,
    reserved_qubit: Option<usize>,
    bias_indexing: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let bias_indexing: BiasIndexing = bias_indexing.parse().map_err(anyhow::Error::msg)?;
    let problem = load_problem(problem_path)?;

    let remap: Box<dyn QubitRemap> = match reserved_qubit {
        Some(q) => Box::new(ReservedQubitShift::new(q)),
        None => Box::new(IdentityRemap),
    };
    let compiled = HamiltonianCompiler::new(remap)
        .with_bias_indexing(bias_indexing)
        .compile(&problem)?;

    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&compiled)
            .context("Failed to serialize compiled Hamiltonian")?,
        OutputFormat::Text => render(&compiled),
    };

    eprintln!(
        "{} Compiled {} onto {} qubits",
        style("✓").green().bold(),
        style(problem_path.display()).green(),
        style(compiled.num_qubits()).yellow()
    );

    write_output(&content, output)
}

fn render(compiled: &CompiledHamiltonian) -> String {
    let mut out = String::new();
    out.push_str(&format!("Qubits: {:?}\n", compiled.qubits()));
    out.push_str(&format!("Logical: {:?}\n", compiled.logical_variables()));
    out.push_str(&format!("Cost ({} terms):\n", compiled.cost().len()));
    for op in compiled.cost() {
        out.push_str(&format!("  {op}\n"));
    }
    out.push_str(&format!("Driver ({} terms):\n", compiled.driver().len()));
    for op in compiled.driver() {
        out.push_str(&format!("  {op}\n"));
    }
    out.truncate(out.trim_end().len());
    out
}
