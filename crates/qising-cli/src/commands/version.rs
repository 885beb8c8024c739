//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - k-local Ising problems compiled for QAOA",
        style("qising").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qising-core  Ising model, Hamiltonian compiler, mixer, post-processing");
    println!("  qising-qaoa  QAOA orchestration over a variational backend");
    println!("  qising-cli   Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
