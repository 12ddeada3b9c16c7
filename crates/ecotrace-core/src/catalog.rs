//! Static question catalog.
//!
//! The catalog is a compiled-in table of five wizard steps. Each step groups
//! a handful of questions, either bounded numeric ranges (answered implicitly
//! through their default) or single-choice selections over integer codes.
//!
//! | Step | Questions |
//! |------|-----------|
//! | 0 Personal info | `household`, `age` |
//! | 1 Transport | `car_km`, `public_transport` |
//! | 2 Housing | `home_size`, `energy_type` |
//! | 3 Food | `meat_consumption`, `local_food` |
//! | 4 Consumption | `shopping_habits`, `electronic_devices` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Identifier of a catalog question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Household,
    Age,
    CarKm,
    PublicTransport,
    HomeSize,
    EnergyType,
    MeatConsumption,
    LocalFood,
    ShoppingHabits,
    ElectronicDevices,
}

impl QuestionId {
    pub const ALL: [QuestionId; 10] = [
        QuestionId::Household,
        QuestionId::Age,
        QuestionId::CarKm,
        QuestionId::PublicTransport,
        QuestionId::HomeSize,
        QuestionId::EnergyType,
        QuestionId::MeatConsumption,
        QuestionId::LocalFood,
        QuestionId::ShoppingHabits,
        QuestionId::ElectronicDevices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::Household => "household",
            QuestionId::Age => "age",
            QuestionId::CarKm => "car_km",
            QuestionId::PublicTransport => "public_transport",
            QuestionId::HomeSize => "home_size",
            QuestionId::EnergyType => "energy_type",
            QuestionId::MeatConsumption => "meat_consumption",
            QuestionId::LocalFood => "local_food",
            QuestionId::ShoppingHabits => "shopping_habits",
            QuestionId::ElectronicDevices => "electronic_devices",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownQuestion(s.to_string()))
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Integer code recorded in the answer set.
    pub value: i64,
    /// Display label.
    pub label: &'static str,
}

/// Bounds and default of a range question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSpec {
    pub min: i64,
    pub max: i64,
    /// Slider increment, always > 0.
    pub step: i64,
    /// Effective value when the user never touched the slider.
    pub default_value: i64,
    pub unit: &'static str,
}

impl RangeSpec {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Input kind of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Range(RangeSpec),
    Choice { options: &'static [ChoiceOption] },
}

/// A single question of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

impl Question {
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::Choice { .. })
    }

    pub fn range(&self) -> Option<&RangeSpec> {
        match &self.kind {
            QuestionKind::Range(spec) => Some(spec),
            QuestionKind::Choice { .. } => None,
        }
    }

    /// Options of a choice question; empty for range questions.
    pub fn options(&self) -> &'static [ChoiceOption] {
        match self.kind {
            QuestionKind::Choice { options } => options,
            QuestionKind::Range(_) => &[],
        }
    }

    pub fn option(&self, value: i64) -> Option<&'static ChoiceOption> {
        self.options().iter().find(|o| o.value == value)
    }

    /// Check that `value` is an acceptable answer for this question.
    pub fn validate(&self, value: i64) -> Result<(), CatalogError> {
        match &self.kind {
            QuestionKind::Range(spec) if spec.contains(value) => Ok(()),
            QuestionKind::Range(spec) => Err(CatalogError::ValueOutOfRange {
                question: self.id,
                value,
                min: spec.min,
                max: spec.max,
            }),
            QuestionKind::Choice { .. } if self.option(value).is_some() => Ok(()),
            QuestionKind::Choice { .. } => Err(CatalogError::InvalidChoice {
                question: self.id,
                value,
            }),
        }
    }
}

/// One page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub title: &'static str,
    /// Never empty.
    pub questions: &'static [Question],
}

const PUBLIC_TRANSPORT_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: 0, label: "Never" },
    ChoiceOption { value: 1, label: "Occasionally" },
    ChoiceOption { value: 2, label: "Regularly" },
    ChoiceOption { value: 3, label: "Daily" },
];

const ENERGY_TYPE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: 4, label: "Electricity" },
    ChoiceOption { value: 3, label: "Natural gas" },
    ChoiceOption { value: 2, label: "Heating oil" },
    ChoiceOption { value: 1, label: "Renewable energy" },
];

const MEAT_CONSUMPTION_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: 4, label: "Daily" },
    ChoiceOption { value: 3, label: "Several times a week" },
    ChoiceOption { value: 2, label: "Occasionally" },
    ChoiceOption { value: 1, label: "Never (vegetarian/vegan)" },
];

const LOCAL_FOOD_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: 100, label: "I always favour local, seasonal produce" },
    ChoiceOption { value: 75, label: "I buy local and seasonal whenever I can" },
    ChoiceOption {
        value: 50,
        label: "I sometimes buy local and seasonal, but it is not a priority",
    },
    ChoiceOption { value: 25, label: "I don't really pay attention to origin or season" },
];

const SHOPPING_HABITS_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption { value: 4, label: "Very often (several times a month)" },
    ChoiceOption { value: 3, label: "Regularly (once a month)" },
    ChoiceOption { value: 2, label: "Occasionally (a few times a year)" },
    ChoiceOption { value: 1, label: "Rarely (once a year or less)" },
];

const PERSONAL_INFO: &[Question] = &[
    Question {
        id: QuestionId::Household,
        prompt: "How many people live in your household?",
        kind: QuestionKind::Range(RangeSpec {
            min: 1,
            max: 10,
            step: 1,
            default_value: 1,
            unit: "person(s)",
        }),
    },
    Question {
        id: QuestionId::Age,
        prompt: "How old are you?",
        kind: QuestionKind::Range(RangeSpec {
            min: 18,
            max: 100,
            step: 1,
            default_value: 30,
            unit: "years",
        }),
    },
];

const TRANSPORT: &[Question] = &[
    Question {
        id: QuestionId::CarKm,
        prompt: "How many kilometres do you drive per year?",
        kind: QuestionKind::Range(RangeSpec {
            min: 0,
            max: 50_000,
            step: 1_000,
            default_value: 10_000,
            unit: "km",
        }),
    },
    Question {
        id: QuestionId::PublicTransport,
        prompt: "How often do you use public transport?",
        kind: QuestionKind::Choice { options: PUBLIC_TRANSPORT_OPTIONS },
    },
];

const HOUSING: &[Question] = &[
    Question {
        id: QuestionId::HomeSize,
        prompt: "What is the floor area of your home (in m²)?",
        kind: QuestionKind::Range(RangeSpec {
            min: 0,
            max: 300,
            step: 10,
            default_value: 80,
            unit: "m²",
        }),
    },
    Question {
        id: QuestionId::EnergyType,
        prompt: "Which energy do you use for heating?",
        kind: QuestionKind::Choice { options: ENERGY_TYPE_OPTIONS },
    },
];

const FOOD: &[Question] = &[
    Question {
        id: QuestionId::MeatConsumption,
        prompt: "How often do you eat meat?",
        kind: QuestionKind::Choice { options: MEAT_CONSUMPTION_OPTIONS },
    },
    Question {
        id: QuestionId::LocalFood,
        prompt: "How do you choose your food?",
        kind: QuestionKind::Choice { options: LOCAL_FOOD_OPTIONS },
    },
];

const CONSUMPTION: &[Question] = &[
    Question {
        id: QuestionId::ShoppingHabits,
        prompt: "How often do you buy new clothes?",
        kind: QuestionKind::Choice { options: SHOPPING_HABITS_OPTIONS },
    },
    Question {
        id: QuestionId::ElectronicDevices,
        prompt: "How many electronic devices do you own?",
        kind: QuestionKind::Range(RangeSpec {
            min: 0,
            max: 20,
            step: 1,
            default_value: 5,
            unit: "device(s)",
        }),
    },
];

static STANDARD_STEPS: [Step; 5] = [
    Step { title: "Personal info", questions: PERSONAL_INFO },
    Step { title: "Transport", questions: TRANSPORT },
    Step { title: "Housing", questions: HOUSING },
    Step { title: "Food", questions: FOOD },
    Step { title: "Consumption", questions: CONSUMPTION },
];

/// Read-only registry of wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    steps: &'static [Step],
}

impl Catalog {
    /// The built-in five-step footprint questionnaire.
    pub fn standard() -> Self {
        Self { steps: &STANDARD_STEPS }
    }

    /// Build a catalog over a custom step table.
    pub fn new(steps: &'static [Step]) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn step(&self, step: usize) -> Result<&'static Step, CatalogError> {
        self.steps.get(step).ok_or(CatalogError::StepOutOfRange {
            step: step as i64,
            len: self.steps.len(),
        })
    }

    /// Questions of one step, in display order.
    pub fn questions_for_step(&self, step: usize) -> Result<&'static [Question], CatalogError> {
        Ok(self.step(step)?.questions)
    }

    pub fn step_title(&self, step: usize) -> Result<&'static str, CatalogError> {
        Ok(self.step(step)?.title)
    }

    /// All questions across all steps, in wizard order.
    pub fn questions(&self) -> impl Iterator<Item = &'static Question> {
        self.steps.iter().flat_map(|s| s.questions.iter())
    }

    pub fn question(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions().find(|q| q.id == id)
    }

    /// Step index holding the given question.
    pub fn step_of(&self, id: QuestionId) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.questions.iter().any(|q| q.id == id))
    }

    /// Default of a range question.
    pub fn default_value(&self, id: QuestionId) -> Result<i64, CatalogError> {
        let question = self
            .question(id)
            .ok_or_else(|| CatalogError::UnknownQuestion(id.to_string()))?;
        question
            .range()
            .map(|r| r.default_value)
            .ok_or(CatalogError::NotARangeQuestion(id))
    }

    pub fn validate_answer(&self, id: QuestionId, value: i64) -> Result<(), CatalogError> {
        self.question(id)
            .ok_or_else(|| CatalogError::UnknownQuestion(id.to_string()))?
            .validate(value)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Questions of a step of the standard catalog.
///
/// Negative or too-large indices are a caller bug and fail with
/// [`CatalogError::StepOutOfRange`].
pub fn questions_for_step(step: i64) -> Result<&'static [Question], CatalogError> {
    let catalog = Catalog::standard();
    let index = usize::try_from(step).map_err(|_| CatalogError::StepOutOfRange {
        step,
        len: catalog.len(),
    })?;
    catalog.questions_for_step(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_catalog_has_five_non_empty_steps() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 5);
        for step in catalog.steps() {
            assert!(!step.questions.is_empty(), "{} is empty", step.title);
        }
        assert_eq!(catalog.step_title(0).unwrap(), "Personal info");
        assert_eq!(catalog.step_title(4).unwrap(), "Consumption");
    }

    #[test]
    fn test_question_ids_are_unique_and_complete() {
        let catalog = Catalog::standard();
        let ids: Vec<QuestionId> = catalog.questions().map(|q| q.id).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids, QuestionId::ALL.to_vec());
    }

    #[test]
    fn test_range_invariants_hold() {
        for question in Catalog::standard().questions() {
            if let Some(spec) = question.range() {
                assert!(spec.step > 0, "{}", question.id);
                assert!(spec.min <= spec.default_value, "{}", question.id);
                assert!(spec.default_value <= spec.max, "{}", question.id);
            }
        }
    }

    #[test]
    fn test_choice_values_unique_within_question() {
        for question in Catalog::standard().questions().filter(|q| q.is_choice()) {
            let values: HashSet<i64> = question.options().iter().map(|o| o.value).collect();
            assert_eq!(values.len(), question.options().len(), "{}", question.id);
        }
    }

    #[test]
    fn test_questions_for_step_out_of_range() {
        assert!(matches!(
            questions_for_step(-1),
            Err(CatalogError::StepOutOfRange { step: -1, len: 5 })
        ));
        assert!(matches!(
            questions_for_step(5),
            Err(CatalogError::StepOutOfRange { step: 5, len: 5 })
        ));
        assert_eq!(questions_for_step(1).unwrap()[0].id, QuestionId::CarKm);
    }

    #[test]
    fn test_question_id_parse() {
        assert_eq!("car_km".parse::<QuestionId>().unwrap(), QuestionId::CarKm);
        assert_eq!(QuestionId::LocalFood.to_string(), "local_food");
        assert!(matches!(
            "bike_km".parse::<QuestionId>(),
            Err(CatalogError::UnknownQuestion(_))
        ));
    }

    #[test]
    fn test_default_value_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.default_value(QuestionId::CarKm).unwrap(), 10_000);
        assert_eq!(catalog.default_value(QuestionId::Household).unwrap(), 1);
        assert_eq!(
            catalog.default_value(QuestionId::LocalFood),
            Err(CatalogError::NotARangeQuestion(QuestionId::LocalFood))
        );
    }

    #[test]
    fn test_validate_answer() {
        let catalog = Catalog::standard();
        assert!(catalog.validate_answer(QuestionId::CarKm, 0).is_ok());
        assert!(catalog.validate_answer(QuestionId::CarKm, 50_000).is_ok());
        assert!(matches!(
            catalog.validate_answer(QuestionId::CarKm, 50_001),
            Err(CatalogError::ValueOutOfRange { max: 50_000, .. })
        ));
        assert!(catalog.validate_answer(QuestionId::LocalFood, 75).is_ok());
        assert!(matches!(
            catalog.validate_answer(QuestionId::LocalFood, 60),
            Err(CatalogError::InvalidChoice { value: 60, .. })
        ));
    }

    #[test]
    fn test_step_of() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.step_of(QuestionId::Household), Some(0));
        assert_eq!(catalog.step_of(QuestionId::EnergyType), Some(2));
        assert_eq!(catalog.step_of(QuestionId::ElectronicDevices), Some(4));
    }

    #[test]
    fn test_question_serializes_with_kind_tag() {
        let q = &questions_for_step(1).unwrap()[1];
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json["id"], "public_transport");
        assert_eq!(json["kind"]["type"], "choice");
        assert_eq!(json["kind"]["options"][3]["label"], "Daily");
    }
}
