//! Plot command implementation.

use anyhow::{bail, Result};
use console::style;
use serde_json::json;
use std::fs;

use qso_runs::ExperimentRun;

/// Execute the plot command.
pub fn execute(input: &str, axis: &str, format: &str, output: Option<&str>) -> Result<()> {
    let run = ExperimentRun::from_path(input)?;
    let x = run.x_axis(axis)?;
    let costs = run.costs();

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&json!({
            "run_number": run.run_number,
            "axis": axis,
            "x": x.to_vec(),
            "cost": costs.to_vec(),
        }))?,
        "csv" => {
            let mut text = format!("{axis},cost\n");
            for (xi, cost) in x.iter().zip(costs.iter()) {
                text.push_str(&format!("{xi},{cost}\n"));
            }
            text
        }
        other => bail!("unknown format {other:?}, expected json or csv"),
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            println!(
                "{} Exported {} view of run {} to {}",
                style("✓").green().bold(),
                axis,
                run.run_number,
                style(path).green(),
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
