use std::io::Write;

use clap::Args;
use ecotrace_core::{questions_for_step, Catalog, Config, OutputFormat};

use crate::render;

#[derive(Args)]
pub struct QuestionsArgs {
    /// Only list this step (0-based)
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<i64>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: QuestionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = Catalog::standard();
    let json = args.json || config.output.format == OutputFormat::Json;

    if let Some(step) = args.step {
        let questions = questions_for_step(step)?;
        if json {
            println!("{}", serde_json::to_string_pretty(questions)?);
            return Ok(());
        }
        let mut out = std::io::stdout().lock();
        for question in questions {
            render::question(&mut out, question, None)?;
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.steps())?);
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    for (i, step) in catalog.steps().iter().enumerate() {
        writeln!(out, "Step {}: {}", i, step.title)?;
        for question in step.questions {
            render::question(&mut out, question, None)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
