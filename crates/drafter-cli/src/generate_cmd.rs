//! One-shot pipeline commands: `plan`, `diagram`, and `generate`.
//!
//! These run the same stages the server exposes, but print to stdout or
//! write a `.drawio` file directly -- the CLI acting as the pipeline's
//! caller.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use drafter_core::Pipeline;

/// Default output filename for `drafter generate`.
pub const DEFAULT_OUTPUT: &str = "diagram.drawio";

/// Run the plan stage and print the plan.
pub async fn run_plan(pipeline: &Pipeline, instruction: &str) -> Result<()> {
    let plan = pipeline.plan_stage(instruction).await?;
    println!("{plan}");
    Ok(())
}

/// Run the diagram stage over plan text from a file (or stdin) and print
/// the validated XML.
pub async fn run_diagram(pipeline: &Pipeline, plan_file: Option<&Path>) -> Result<()> {
    let plan_text = read_plan(plan_file)?;
    let xml = pipeline.diagram_stage(&plan_text).await?;
    println!("{xml}");
    Ok(())
}

/// Run both stages and write the validated document to `output`.
pub async fn run_generate(pipeline: &Pipeline, instruction: &str, output: &Path) -> Result<()> {
    let plan = pipeline.plan_stage(instruction).await?;
    tracing::info!(lines = plan.lines().count(), "plan stage complete");

    let xml = pipeline.diagram_stage(&plan).await?;
    std::fs::write(output, &xml)
        .with_context(|| format!("failed to write diagram to {}", output.display()))?;

    println!("Diagram written to {}", output.display());
    Ok(())
}

fn read_plan(plan_file: Option<&Path>) -> Result<String> {
    match plan_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file at {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read plan from stdin")?;
            Ok(buffer)
        }
    }
}
