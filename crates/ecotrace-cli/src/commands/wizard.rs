use std::io::{self, BufRead, Write};

use clap::Args;
use ecotrace_core::{
    Config, Footprint, OutputFormat, Question, QuestionKind, WizardController, WizardState,
    WizardStep,
};

use crate::render;

#[derive(Args)]
pub struct WizardArgs {
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the user typed at a question prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Keep the current value (or leave a choice unanswered).
    Keep,
    Value(i64),
    Back,
    Quit,
}

fn parse_input(question: &Question, line: &str) -> Result<Input, String> {
    let line = line.trim();
    match line {
        "" => return Ok(Input::Keep),
        "b" | "back" => return Ok(Input::Back),
        "q" | "quit" => return Ok(Input::Quit),
        _ => {}
    }

    let number: i64 = line
        .parse()
        .map_err(|_| format!("'{line}' is not a number"))?;
    match question.kind {
        QuestionKind::Range(_) => Ok(Input::Value(number)),
        QuestionKind::Choice { options } => usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .map(|option| Input::Value(option.value))
            .ok_or_else(|| format!("choose an option between 1 and {}", options.len())),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, Box<dyn std::error::Error>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("input closed before the wizard finished".into());
    }
    Ok(line)
}

fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

/// Run one interactive session.
///
/// Returns `None` when the user quits before reaching the results.
pub fn run_session<R: BufRead, W: Write>(
    ctl: &WizardController,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Footprint>, Box<dyn std::error::Error>> {
    let mut state = WizardState::new();

    if config.wizard.show_intro {
        writeln!(out, "EcoTrace - carbon footprint simulator")?;
        writeln!(
            out,
            "Answer {} short steps to estimate your yearly footprint.",
            ctl.catalog().len()
        )?;
        writeln!(out, "At any prompt: Enter keeps the value, 'b' goes back, 'q' quits.")?;
        prompt(out, "Press Enter to start: ")?;
        if matches!(read_line(input)?.trim(), "q" | "quit") {
            return Ok(None);
        }
    }
    state = ctl.start(&state)?;

    'steps: loop {
        let step = match state.current_step() {
            WizardStep::Intro => {
                state = ctl.start(&state)?;
                continue;
            }
            WizardStep::Results => return Ok(ctl.result(&state)),
            WizardStep::Question(step) => step,
        };

        let progress = ctl.progress(&state);
        writeln!(out)?;
        writeln!(
            out,
            "Step {}/{}: {}",
            step + 1,
            progress.total_steps,
            progress.step_title.unwrap_or_default()
        )?;

        for question in ctl.catalog().questions_for_step(step)? {
            loop {
                render::question(out, question, ctl.effective_value(&state, question.id))?;
                prompt(out, "> ")?;
                let line = read_line(input)?;
                match parse_input(question, &line) {
                    Ok(Input::Keep) => break,
                    Ok(Input::Back) => {
                        state = ctl.go_back(&state)?;
                        continue 'steps;
                    }
                    Ok(Input::Quit) => return Ok(None),
                    Ok(Input::Value(value)) => match ctl.record_answer(&state, question.id, value) {
                        Ok(next) => {
                            state = next;
                            break;
                        }
                        Err(e) => writeln!(out, "  {e}")?,
                    },
                    Err(message) => writeln!(out, "  {message}")?,
                }
            }
        }

        if progress.is_last_step && config.wizard.confirm_finish {
            prompt(out, "Finish and see your results? [y/N] ")?;
            if !matches!(read_line(input)?.trim(), "y" | "Y" | "yes") {
                continue;
            }
        }

        state = ctl.advance(&state)?;
        if state.validation_failed() {
            for id in ctl.unanswered_choices(&state) {
                if let Some(question) = ctl.catalog().question(id) {
                    writeln!(out, "  Please select an option: {}", question.prompt)?;
                }
            }
        }
    }
}

pub fn run(args: WizardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let ctl = WizardController::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let Some(result) = run_session(&ctl, &config, &mut input, &mut out)? else {
        writeln!(out, "wizard aborted")?;
        return Ok(());
    };

    writeln!(out)?;
    if args.json || config.output.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        render::footprint(&mut out, &result, &config.output)?;
    }
    Ok(())
}
