//! Wizard step state machine.
//!
//! The controller never owns session state. Every operation takes the
//! caller's [`WizardState`] and returns the next one, so the front end decides
//! how long a session lives and simply re-renders whatever it gets back.
//!
//! ## State Transitions
//!
//! ```text
//! Intro --start--> Question(0) --advance--> ... Question(N-1) --advance--> Results
//!                  Question(i) <--go_back-- Question(i+1)
//! any --restart--> Intro
//! ```
//!
//! `advance` is gated: every choice question of the current step must have an
//! answer. Range questions always have an effective value (the recorded one
//! or the catalog default) and never block.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::answers::AnswerSet;
use crate::catalog::{Catalog, QuestionId};
use crate::error::WizardError;
use crate::scoring::{Footprint, ScoringEngine};

/// Position of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum WizardStep {
    /// Landing screen, before the first step.
    Intro,
    /// A live question step, indexing the catalog.
    Question(usize),
    /// All steps passed.
    Results,
}

impl WizardStep {
    /// Numeric view: `-1` for the intro, `i` for a question step and
    /// `step_count` for the results screen.
    pub fn index(self, step_count: usize) -> i64 {
        match self {
            WizardStep::Intro => -1,
            WizardStep::Question(i) => i as i64,
            WizardStep::Results => step_count as i64,
        }
    }
}

/// Session state of one wizard run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    current_step: WizardStep,
    answers: AnswerSet,
    validation_failed: bool,
}

impl WizardState {
    /// A fresh session on the intro screen.
    pub fn new() -> Self {
        Self {
            current_step: WizardStep::Intro,
            answers: AnswerSet::new(),
            validation_failed: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Set when the last `advance` was blocked by the gate.
    pub fn validation_failed(&self) -> bool {
        self.validation_failed
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress information for a wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    /// `-1` on the intro, `total_steps` on the results screen.
    pub step_index: i64,
    pub total_steps: usize,
    /// Title of the current step, if on a question step.
    pub step_title: Option<&'static str>,
    /// Questions with a recorded answer.
    pub answered_questions: usize,
    pub total_questions: usize,
    /// The next `advance` leads to the results ("Finish" rather than "Next").
    pub is_last_step: bool,
    pub is_complete: bool,
    pub validation_failed: bool,
}

/// Drives [`WizardState`] through the catalog steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct WizardController {
    catalog: Catalog,
}

impl WizardController {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn invalid(operation: &'static str, state: &WizardState, catalog: &Catalog) -> WizardError {
        WizardError::InvalidTransition {
            operation,
            step: state.current_step.index(catalog.len()),
        }
    }

    /// Numeric step index of the state, `-1..=N`.
    pub fn step_index(&self, state: &WizardState) -> i64 {
        state.current_step.index(self.catalog.len())
    }

    /// Leave the intro screen for the first step.
    pub fn start(&self, state: &WizardState) -> Result<WizardState, WizardError> {
        if state.current_step != WizardStep::Intro {
            return Err(Self::invalid("start", state, &self.catalog));
        }

        let mut next = state.clone();
        next.current_step = if self.catalog.is_empty() {
            WizardStep::Results
        } else {
            WizardStep::Question(0)
        };
        next.validation_failed = false;
        debug!(step = self.step_index(&next), "wizard started");
        Ok(next)
    }

    /// Choice questions of the current step that still lack an answer.
    ///
    /// Empty outside question steps.
    pub fn unanswered_choices(&self, state: &WizardState) -> Vec<QuestionId> {
        let WizardStep::Question(step) = state.current_step else {
            return Vec::new();
        };
        self.catalog
            .questions_for_step(step)
            .unwrap_or_default()
            .iter()
            .filter(|q| q.is_choice() && !state.answers.contains(q.id))
            .map(|q| q.id)
            .collect()
    }

    /// Move to the next step if the gate passes; otherwise stay and flag the
    /// failure.
    pub fn advance(&self, state: &WizardState) -> Result<WizardState, WizardError> {
        let WizardStep::Question(step) = state.current_step else {
            return Err(Self::invalid("advance", state, &self.catalog));
        };
        let questions = self.catalog.questions_for_step(step)?;

        let mut next = state.clone();
        let gate_passes = questions
            .iter()
            .filter(|q| q.is_choice())
            .all(|q| state.answers.contains(q.id));

        if !gate_passes {
            next.validation_failed = true;
            debug!(
                step,
                missing = ?self.unanswered_choices(state),
                "advance blocked by unanswered choices"
            );
            return Ok(next);
        }

        next.current_step = if step + 1 >= self.catalog.len() {
            WizardStep::Results
        } else {
            WizardStep::Question(step + 1)
        };
        next.validation_failed = false;
        debug!(from = step, to = self.step_index(&next), "wizard advanced");
        Ok(next)
    }

    /// Return to the previous step. A no-op on the first step.
    pub fn go_back(&self, state: &WizardState) -> Result<WizardState, WizardError> {
        let WizardStep::Question(step) = state.current_step else {
            return Err(Self::invalid("go back", state, &self.catalog));
        };
        if step == 0 {
            return Ok(state.clone());
        }

        let mut next = state.clone();
        next.current_step = WizardStep::Question(step - 1);
        next.validation_failed = false;
        debug!(from = step, to = step - 1, "wizard went back");
        Ok(next)
    }

    /// Insert or overwrite an answer.
    ///
    /// Allowed on any question step. The value must be acceptable to the
    /// catalog. Neither the step nor the validation flag change.
    pub fn record_answer(
        &self,
        state: &WizardState,
        id: QuestionId,
        value: i64,
    ) -> Result<WizardState, WizardError> {
        if !matches!(state.current_step, WizardStep::Question(_)) {
            return Err(Self::invalid("record an answer", state, &self.catalog));
        }
        self.catalog.validate_answer(id, value)?;

        let mut next = state.clone();
        next.answers.insert(id, value);
        debug!(question = %id, value, "answer recorded");
        Ok(next)
    }

    /// Back to the intro with no answers.
    pub fn restart(&self, state: &WizardState) -> WizardState {
        debug!(from = self.step_index(state), "wizard restarted");
        WizardState::new()
    }

    /// Recorded answer, or the default for an untouched range question.
    pub fn effective_value(&self, state: &WizardState, id: QuestionId) -> Option<i64> {
        state
            .answers
            .get(id)
            .or_else(|| self.catalog.default_value(id).ok())
    }

    pub fn progress(&self, state: &WizardState) -> WizardProgress {
        let step_title = match state.current_step {
            WizardStep::Question(step) => self.catalog.step_title(step).ok(),
            _ => None,
        };
        let is_last_step = match state.current_step {
            WizardStep::Question(step) => step + 1 == self.catalog.len(),
            _ => false,
        };

        WizardProgress {
            step_index: self.step_index(state),
            total_steps: self.catalog.len(),
            step_title,
            answered_questions: self
                .catalog
                .questions()
                .filter(|q| state.answers.contains(q.id))
                .count(),
            total_questions: self.catalog.questions().count(),
            is_last_step,
            is_complete: state.current_step == WizardStep::Results,
            validation_failed: state.validation_failed,
        }
    }

    /// The footprint, once the results screen is reached.
    pub fn result(&self, state: &WizardState) -> Option<Footprint> {
        (state.current_step == WizardStep::Results)
            .then(|| ScoringEngine::new(self.catalog).score(&state.answers))
    }
}
