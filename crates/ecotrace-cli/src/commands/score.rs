use clap::Args;
use ecotrace_core::{AnswerSet, Catalog, Config, CoreError, OutputFormat, QuestionId, ScoringEngine};

use crate::render;

#[derive(Args)]
pub struct ScoreArgs {
    /// Answer as <question>=<value>, e.g. car_km=12000 (repeatable)
    #[arg(short, long = "answer", value_name = "QUESTION=VALUE")]
    pub answers: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse one `question=value` pair and check it against the catalog.
pub fn parse_answer(catalog: &Catalog, text: &str) -> ecotrace_core::Result<(QuestionId, i64)> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| CoreError::InvalidAnswer(text.to_string()))?;
    let id: QuestionId = key.trim().parse()?;
    let value: i64 = value
        .trim()
        .parse()
        .map_err(|_| CoreError::InvalidAnswer(text.to_string()))?;
    catalog.validate_answer(id, value)?;
    Ok((id, value))
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = Catalog::standard();

    let answers = args
        .answers
        .iter()
        .map(|text| parse_answer(&catalog, text))
        .collect::<Result<AnswerSet, _>>()?;
    let result = ScoringEngine::new(catalog).score(&answers);

    if args.json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let mut out = std::io::stdout().lock();
        render::footprint(&mut out, &result, &config.output)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotrace_core::CatalogError;

    #[test]
    fn parse_answer_accepts_valid_pairs() {
        let catalog = Catalog::standard();
        assert_eq!(
            parse_answer(&catalog, "car_km=20000").unwrap(),
            (QuestionId::CarKm, 20_000)
        );
        assert_eq!(
            parse_answer(&catalog, " local_food = 25 ").unwrap(),
            (QuestionId::LocalFood, 25)
        );
    }

    #[test]
    fn parse_answer_rejects_malformed_text() {
        let catalog = Catalog::standard();
        assert!(matches!(
            parse_answer(&catalog, "car_km"),
            Err(CoreError::InvalidAnswer(_))
        ));
        assert!(matches!(
            parse_answer(&catalog, "car_km=far"),
            Err(CoreError::InvalidAnswer(_))
        ));
        assert!(matches!(
            parse_answer(&catalog, "bike_km=10"),
            Err(CoreError::Catalog(CatalogError::UnknownQuestion(_)))
        ));
        assert!(matches!(
            parse_answer(&catalog, "energy_type=7"),
            Err(CoreError::Catalog(CatalogError::InvalidChoice { .. }))
        ));
    }
}
