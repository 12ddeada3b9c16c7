//! # EcoTrace Core Library
//!
//! This library provides the core logic of the EcoTrace carbon footprint
//! questionnaire. Front ends (the `ecotrace-cli` binary, or any GUI) only
//! render what the core hands back.
//!
//! ## Architecture
//!
//! - **Catalog**: a compiled-in table of five question steps
//! - **Wizard**: a state machine over caller-owned [`WizardState`] values,
//!   with a gate that blocks advancing past unanswered choice questions
//! - **Scoring**: a pure function from answers to a categorized footprint
//!   with recommendations
//! - **Storage**: TOML-based front-end configuration
//!
//! ## Key Components
//!
//! - [`Catalog`]: question registry and answer validation
//! - [`WizardController`]: step transitions
//! - [`score`]: footprint estimation
//! - [`Config`]: application configuration management

pub mod answers;
pub mod catalog;
pub mod error;
pub mod scoring;
pub mod storage;
pub mod wizard;

pub use answers::AnswerSet;
pub use catalog::{
    questions_for_step, Catalog, ChoiceOption, Question, QuestionId, QuestionKind, RangeSpec, Step,
};
pub use error::{CatalogError, ConfigError, CoreError, Result, WizardError};
pub use scoring::{
    score, Accent, Category, Contribution, Footprint, Recommendation, ScoringEngine, Term,
};
pub use storage::{Config, OutputFormat};
pub use wizard::{WizardController, WizardProgress, WizardState, WizardStep};
