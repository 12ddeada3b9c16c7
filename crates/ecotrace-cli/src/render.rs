//! Plain-text rendering of catalog questions and results.

use std::io::{self, Write};

use ecotrace_core::storage::OutputConfig;
use ecotrace_core::{Footprint, Question, QuestionKind};

pub fn question<W: Write>(
    out: &mut W,
    question: &Question,
    current: Option<i64>,
) -> io::Result<()> {
    writeln!(out, "{} [{}]", question.prompt, question.id)?;
    match &question.kind {
        QuestionKind::Range(spec) => {
            write!(
                out,
                "  {}..{} {} (step {})",
                spec.min, spec.max, spec.unit, spec.step
            )?;
            match current {
                Some(value) => writeln!(out, ", current: {value}"),
                None => writeln!(out, ", default: {}", spec.default_value),
            }
        }
        QuestionKind::Choice { options } => {
            for (i, option) in options.iter().enumerate() {
                let marker = if current == Some(option.value) { "*" } else { " " };
                writeln!(out, " {marker}{}) {}", i + 1, option.label)?;
            }
            Ok(())
        }
    }
}

pub fn footprint<W: Write>(
    out: &mut W,
    result: &Footprint,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(out, "Your carbon footprint")?;
    writeln!(
        out,
        "  {} tonnes of CO2e per year ({})",
        result.footprint_tonnes,
        result.category.label()
    )?;
    writeln!(out, "  {}", result.message)?;

    if config.show_breakdown {
        writeln!(out)?;
        writeln!(out, "Breakdown (household total):")?;
        for contribution in &result.breakdown {
            writeln!(
                out,
                "  {:<26} {:>6.2} t",
                contribution.term.label(),
                contribution.tonnes
            )?;
        }
        writeln!(out, "  {:<26} {:>6.2} t", "Total", result.total_tonnes)?;
        if result.household > 1 {
            writeln!(
                out,
                "  {:<26} {:>6.2} t",
                format!("Per person (/{})", result.household),
                result.per_person_tonnes
            )?;
        }
    }

    if config.show_recommendations && !result.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Personalized recommendations:")?;
        for recommendation in &result.recommendations {
            writeln!(out, "  - {recommendation}")?;
        }
    }
    Ok(())
}
