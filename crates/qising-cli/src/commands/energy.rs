//! Energy command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::common::{load_problem, parse_values};

/// Execute the energy command.
pub fn execute(problem_path: &Path, solution: &str) -> Result<()> {
    let problem = load_problem(problem_path)?;
    let values: Vec<i8> = parse_values(solution)?;

    let spins = values.iter().all(|v| matches!(v, -1 | 1));
    let bits = values.iter().all(|v| matches!(v, 0 | 1));
    if !spins && !bits {
        anyhow::bail!("Solution must be all +1/-1 spins or all 0/1 bits");
    }

    let energy = problem.energy(&values)?;

    println!(
        "{} {} variables, {} couplings",
        style("→").cyan().bold(),
        problem.num_variables(),
        problem.couplings.len()
    );
    println!("  Energy: {}", style(energy).yellow());

    Ok(())
}
