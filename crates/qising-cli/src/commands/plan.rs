//! Plan command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use qising_qaoa::SolveOptions;

use super::common::{load_problem, write_output};

/// Execute the plan command.
pub fn execute(
    problem_path: &Path,
    config: Option<&Path>,
    steps: Option<usize>,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let problem = load_problem(problem_path)?;

    let mut options = SolveOptions::load(config).context("Failed to load solve options")?;
    if let Some(steps) = steps {
        options.steps = steps;
    }
    if let Some(seed) = seed {
        options.seed = Some(seed);
    }
    debug!(?options, "resolved solve options");

    let plan = qising_qaoa::plan(&problem, &options)?;
    let json = serde_json::to_string_pretty(&plan.request).context("Failed to serialize plan")?;

    if let Some(path) = output {
        eprintln!(
            "{} Planned {} qubits, {} steps → {}",
            style("✓").green().bold(),
            plan.request.num_qubits,
            plan.request.steps,
            style(path.display()).green()
        );
    }

    write_output(&json, output)
}
