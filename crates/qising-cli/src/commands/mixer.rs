//! Mixer command implementation.

use anyhow::{Context, Result};
use console::style;

use qising_core::OneHotMixer;

use super::common::{OutputFormat, write_output};

/// Execute the mixer command.
pub fn execute(num_qubits: usize, include_final_move: bool, format: OutputFormat) -> Result<()> {
    let mixer = OneHotMixer::new().with_final_move(include_final_move);
    let moves = mixer.mixed_moves(num_qubits)?;
    let operators = mixer.generate(num_qubits)?;

    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&operators).context("Failed to serialize mixer")?;
            write_output(&json, None)
        }
        OutputFormat::Text => {
            println!(
                "{} {} one-hot qubits, {} mixed moves, {} terms",
                style("→").cyan().bold(),
                num_qubits,
                style(moves).yellow(),
                operators.len()
            );
            for op in &operators {
                println!("  {op}");
            }
            Ok(())
        }
    }
}
