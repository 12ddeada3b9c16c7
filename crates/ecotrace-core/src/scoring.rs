//! Carbon footprint scoring engine.
//!
//! The engine turns an [`AnswerSet`] into a [`Footprint`]: an additive model
//! over weighted contributions, divided across the household and rounded to
//! whole tonnes.
//!
//! Contributions are summed in integer micro-tonnes so that exact halves
//! (6.5 t, 3.5 t per person, ...) round up. The `f64` fields of the result are
//! for display only.
//!
//! ## Contributions
//!
//! | Term | Formula (t CO₂e / year) |
//! |------|-------------------------|
//! | Car travel | `car_km × 0.12 / 1000` |
//! | Public transport | `{0: 0, 1: 0.1, 2: 0.25, 3: 0.5}` |
//! | Home size | `home_size × 0.02` |
//! | Heating energy | `{1: 0.5, 2: 3, 3: 2, 4: 1.5}` |
//! | Meat consumption | `{1: 0.5, 2: 1.2, 3: 2, 4: 3}` |
//! | Local food | `{25: 1.2, 50: 0.9, 75: 0.5, 100: 0.3}` |
//! | Shopping habits | `{1: 0.3, 2: 0.8, 3: 1.5, 4: 2.5}` |
//! | Electronics | `electronic_devices × 0.1` |
//! | Baseline | `1.5` |
//!
//! Range questions left unanswered take their catalog default. Choice
//! questions left unanswered, or answered with an unknown code, contribute 0.
//!
//! ## Categories
//!
//! | Footprint | Category |
//! |-----------|----------|
//! | ≤ 6.5 | Excellent |
//! | ≤ 10 | Moderate |
//! | otherwise | Poor |

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::answers::AnswerSet;
use crate::catalog::{Catalog, QuestionId};

const MICRO_PER_TONNE: i128 = 1_000_000;

/// Micro-tonnes per kilometre driven (0.12 t per 1000 km).
const CAR_MICRO_PER_KM: i128 = 120;
/// Micro-tonnes per square metre of living space.
const HOME_MICRO_PER_M2: i128 = 20_000;
/// Micro-tonnes per electronic device owned.
const DEVICE_MICRO: i128 = 100_000;
/// Per-person floor for hot water, waste and public services.
const BASELINE_MICRO: i128 = 1_500_000;

const EXCELLENT_MAX_TONNES: f64 = 6.5;
const MODERATE_MAX_TONNES: f64 = 10.0;

const CAR_KM_THRESHOLD: i64 = 15_000;
const MEAT_THRESHOLD: i64 = 2;
const LOCAL_FOOD_THRESHOLD: i64 = 50;
const SHOPPING_THRESHOLD: i64 = 2;
const DEVICES_THRESHOLD: i64 = 10;

/// A closed set of integer codes for one choice question, with the
/// emission factor of each code.
trait CodedImpact: Sized + Copy {
    const QUESTION: QuestionId;

    fn from_code(code: i64) -> Option<Self>;

    fn micro_tonnes(self) -> i128;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PublicTransport {
    Never,
    Occasionally,
    Regularly,
    Daily,
}

impl CodedImpact for PublicTransport {
    const QUESTION: QuestionId = QuestionId::PublicTransport;

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Never),
            1 => Some(Self::Occasionally),
            2 => Some(Self::Regularly),
            3 => Some(Self::Daily),
            _ => None,
        }
    }

    fn micro_tonnes(self) -> i128 {
        match self {
            Self::Never => 0,
            Self::Occasionally => 100_000,
            Self::Regularly => 250_000,
            Self::Daily => 500_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeatingEnergy {
    Renewable,
    HeatingOil,
    NaturalGas,
    Electricity,
}

impl CodedImpact for HeatingEnergy {
    const QUESTION: QuestionId = QuestionId::EnergyType;

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Renewable),
            2 => Some(Self::HeatingOil),
            3 => Some(Self::NaturalGas),
            4 => Some(Self::Electricity),
            _ => None,
        }
    }

    fn micro_tonnes(self) -> i128 {
        match self {
            Self::Renewable => 500_000,
            Self::HeatingOil => 3_000_000,
            Self::NaturalGas => 2_000_000,
            Self::Electricity => 1_500_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MeatConsumption {
    Never,
    Occasionally,
    SeveralTimesAWeek,
    Daily,
}

impl CodedImpact for MeatConsumption {
    const QUESTION: QuestionId = QuestionId::MeatConsumption;

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Never),
            2 => Some(Self::Occasionally),
            3 => Some(Self::SeveralTimesAWeek),
            4 => Some(Self::Daily),
            _ => None,
        }
    }

    fn micro_tonnes(self) -> i128 {
        match self {
            Self::Never => 500_000,
            Self::Occasionally => 1_200_000,
            Self::SeveralTimesAWeek => 2_000_000,
            Self::Daily => 3_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocalFood {
    Rarely,
    Sometimes,
    WhenPossible,
    Always,
}

impl CodedImpact for LocalFood {
    const QUESTION: QuestionId = QuestionId::LocalFood;

    fn from_code(code: i64) -> Option<Self> {
        match code {
            25 => Some(Self::Rarely),
            50 => Some(Self::Sometimes),
            75 => Some(Self::WhenPossible),
            100 => Some(Self::Always),
            _ => None,
        }
    }

    fn micro_tonnes(self) -> i128 {
        match self {
            Self::Rarely => 1_200_000,
            Self::Sometimes => 900_000,
            Self::WhenPossible => 500_000,
            Self::Always => 300_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShoppingHabits {
    Rarely,
    Occasionally,
    Regularly,
    VeryOften,
}

impl CodedImpact for ShoppingHabits {
    const QUESTION: QuestionId = QuestionId::ShoppingHabits;

    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Rarely),
            2 => Some(Self::Occasionally),
            3 => Some(Self::Regularly),
            4 => Some(Self::VeryOften),
            _ => None,
        }
    }

    fn micro_tonnes(self) -> i128 {
        match self {
            Self::Rarely => 300_000,
            Self::Occasionally => 800_000,
            Self::Regularly => 1_500_000,
            Self::VeryOften => 2_500_000,
        }
    }
}

/// Named term of the additive model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    CarTravel,
    PublicTransport,
    HomeSize,
    HeatingEnergy,
    MeatConsumption,
    LocalFood,
    ShoppingHabits,
    Electronics,
    Baseline,
}

impl Term {
    pub fn label(self) -> &'static str {
        match self {
            Term::CarTravel => "Car travel",
            Term::PublicTransport => "Public transport",
            Term::HomeSize => "Home size",
            Term::HeatingEnergy => "Heating energy",
            Term::MeatConsumption => "Meat consumption",
            Term::LocalFood => "Local and seasonal food",
            Term::ShoppingHabits => "Shopping habits",
            Term::Electronics => "Electronics",
            Term::Baseline => "Baseline services",
        }
    }
}

/// Household-level contribution of one term, before dividing per person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub term: Term,
    pub tonnes: f64,
}

/// Qualitative result category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Excellent,
    Moderate,
    Poor,
}

/// Display accent of a category. Picking the actual artwork is up to the
/// front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Good,
    Medium,
    Bad,
}

impl Category {
    pub fn for_tonnes(tonnes: u32) -> Self {
        let tonnes = f64::from(tonnes);
        if tonnes <= EXCELLENT_MAX_TONNES {
            Category::Excellent
        } else if tonnes <= MODERATE_MAX_TONNES {
            Category::Moderate
        } else {
            Category::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::Moderate => "Moderate",
            Category::Poor => "Poor",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Category::Excellent => {
                "Well done! You are on track for the 2-tonne target set for 2050. Keep it up!"
            }
            Category::Moderate => {
                "You are within today's average, but still far from the 2-tonne climate target. \
                 There is room for improvement!"
            }
            Category::Poor => {
                "You are above average. It is urgent to act to reduce your climate impact. \
                 Follow our recommendations to bring it down!"
            }
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Category::Excellent => Accent::Good,
            Category::Moderate => Accent::Medium,
            Category::Poor => Accent::Bad,
        }
    }
}

/// Personalized advice, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    DriveLess,
    EatLessMeat,
    BuyLocal,
    BuySecondHand,
    FewerDevices,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::DriveLess => {
                "Try to drive less by carpooling or using public transport."
            }
            Recommendation::EatLessMeat => {
                "Eating less meat would significantly reduce your carbon footprint."
            }
            Recommendation::BuyLocal => {
                "Favour local, seasonal produce to cut the impact of food transport."
            }
            Recommendation::BuySecondHand => {
                "Consider buying second-hand clothes or making your clothes last longer."
            }
            Recommendation::FewerDevices => {
                "Limit purchases of new electronic devices and favour repair."
            }
        }
    }
}

/// Scoring output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Per-person footprint rounded half-up to whole tonnes.
    pub footprint_tonnes: u32,
    pub category: Category,
    pub accent: Accent,
    pub message: String,
    pub recommendations: Vec<String>,
    /// Household size the total was divided by (never below 1).
    pub household: i64,
    /// Unrounded household total.
    pub total_tonnes: f64,
    /// Unrounded per-person footprint.
    pub per_person_tonnes: f64,
    pub breakdown: Vec<Contribution>,
}

/// Scores answer sets against a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    catalog: Catalog,
}

impl ScoringEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Recorded value of a range question, or its catalog default.
    fn effective(&self, answers: &AnswerSet, id: QuestionId) -> i64 {
        answers
            .get(id)
            .or_else(|| self.catalog.default_value(id).ok())
            .unwrap_or(0)
    }

    fn lookup<T: CodedImpact>(answers: &AnswerSet) -> i128 {
        let question = T::QUESTION;
        let Some(code) = answers.get(question) else {
            return 0;
        };
        match T::from_code(code) {
            Some(level) => level.micro_tonnes(),
            None => {
                warn!(%question, code, "unmapped answer code contributes 0");
                0
            }
        }
    }

    /// Exact household-level contributions in micro-tonnes, in table order.
    fn micro_terms(&self, answers: &AnswerSet) -> [(Term, i128); 9] {
        let car_km = i128::from(self.effective(answers, QuestionId::CarKm));
        let home_size = i128::from(self.effective(answers, QuestionId::HomeSize));
        let devices = i128::from(self.effective(answers, QuestionId::ElectronicDevices));

        [
            (Term::CarTravel, car_km * CAR_MICRO_PER_KM),
            (Term::PublicTransport, Self::lookup::<PublicTransport>(answers)),
            (Term::HomeSize, home_size * HOME_MICRO_PER_M2),
            (Term::HeatingEnergy, Self::lookup::<HeatingEnergy>(answers)),
            (Term::MeatConsumption, Self::lookup::<MeatConsumption>(answers)),
            (Term::LocalFood, Self::lookup::<LocalFood>(answers)),
            (Term::ShoppingHabits, Self::lookup::<ShoppingHabits>(answers)),
            (Term::Electronics, devices * DEVICE_MICRO),
            (Term::Baseline, BASELINE_MICRO),
        ]
    }

    /// Household-level contributions, one per term in table order.
    pub fn breakdown(&self, answers: &AnswerSet) -> Vec<Contribution> {
        contributions(self.micro_terms(answers))
    }

    /// Effective household size; zero or negative counts as one person.
    pub fn household(&self, answers: &AnswerSet) -> i64 {
        let household = self.effective(answers, QuestionId::Household);
        if household <= 0 {
            1
        } else {
            household
        }
    }

    /// Recommendations whose predicate holds, in fixed order.
    ///
    /// Choice answers compare raw (absent counts as 0), so a missing
    /// `local_food` answer still triggers the local-food advice. Range
    /// answers compare on their effective value.
    pub fn recommendations(&self, answers: &AnswerSet) -> Vec<Recommendation> {
        let raw = |id| answers.get(id).unwrap_or(0);
        let car_km = self.effective(answers, QuestionId::CarKm);
        let devices = self.effective(answers, QuestionId::ElectronicDevices);
        let rules = [
            (car_km > CAR_KM_THRESHOLD, Recommendation::DriveLess),
            (
                raw(QuestionId::MeatConsumption) > MEAT_THRESHOLD,
                Recommendation::EatLessMeat,
            ),
            (
                raw(QuestionId::LocalFood) < LOCAL_FOOD_THRESHOLD,
                Recommendation::BuyLocal,
            ),
            (
                raw(QuestionId::ShoppingHabits) > SHOPPING_THRESHOLD,
                Recommendation::BuySecondHand,
            ),
            (devices > DEVICES_THRESHOLD, Recommendation::FewerDevices),
        ];
        rules
            .into_iter()
            .filter_map(|(fires, rec)| fires.then_some(rec))
            .collect()
    }

    pub fn score(&self, answers: &AnswerSet) -> Footprint {
        let terms = self.micro_terms(answers);
        let total_micro: i128 = terms.iter().map(|(_, micro)| micro).sum();
        let household = self.household(answers);
        let footprint_tonnes = round_per_person(total_micro, household);

        let breakdown = contributions(terms);
        let total_tonnes = to_tonnes(total_micro);
        let per_person_tonnes = total_tonnes / household as f64;
        let category = Category::for_tonnes(footprint_tonnes);
        let recommendations = self.recommendations(answers);

        debug!(
            total_tonnes,
            household,
            footprint_tonnes,
            category = category.label(),
            recommendations = recommendations.len(),
            "scored answer set"
        );

        Footprint {
            footprint_tonnes,
            category,
            accent: category.accent(),
            message: category.message().to_string(),
            recommendations: recommendations.iter().map(|r| r.message().to_string()).collect(),
            household,
            total_tonnes,
            per_person_tonnes,
            breakdown,
        }
    }
}

fn contributions(terms: [(Term, i128); 9]) -> Vec<Contribution> {
    terms
        .into_iter()
        .map(|(term, micro)| Contribution {
            term,
            tonnes: to_tonnes(micro),
        })
        .collect()
}

fn to_tonnes(micro: i128) -> f64 {
    micro as f64 / MICRO_PER_TONNE as f64
}

/// Divide a household total across `household` people and round half-up to
/// whole tonnes. Totals at or below zero give 0.
fn round_per_person(total_micro: i128, household: i64) -> u32 {
    if total_micro <= 0 {
        return 0;
    }
    let divisor = MICRO_PER_TONNE * i128::from(household.max(1));
    let rounded = (2 * total_micro + divisor) / (2 * divisor);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Score an answer set against the standard catalog.
pub fn score(answers: &AnswerSet) -> Footprint {
    ScoringEngine::default().score(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn scenario_a() -> AnswerSet {
        AnswerSet::from([
            (QuestionId::CarKm, 0),
            (QuestionId::PublicTransport, 0),
            (QuestionId::HomeSize, 0),
            (QuestionId::EnergyType, 1),
            (QuestionId::MeatConsumption, 1),
            (QuestionId::LocalFood, 100),
            (QuestionId::ShoppingHabits, 1),
            (QuestionId::ElectronicDevices, 0),
            (QuestionId::Household, 1),
        ])
    }

    fn contribution(footprint: &Footprint, term: Term) -> f64 {
        footprint
            .breakdown
            .iter()
            .find(|c| c.term == term)
            .map(|c| c.tonnes)
            .unwrap()
    }

    #[test]
    fn test_scenario_a_low_impact_household() {
        let result = score(&scenario_a());
        assert!(approx(result.total_tonnes, 3.1));
        assert_eq!(result.footprint_tonnes, 3);
        assert_eq!(result.category, Category::Excellent);
        assert_eq!(result.accent, Accent::Good);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_scenario_b_two_person_household() {
        let mut answers = scenario_a();
        answers.insert(QuestionId::Household, 2);
        let result = score(&answers);
        assert!(approx(result.per_person_tonnes, 1.55));
        assert_eq!(result.footprint_tonnes, 2);
        assert_eq!(result.household, 2);
    }

    #[test]
    fn test_scenario_c_heavy_driver() {
        let answers = AnswerSet::from([(QuestionId::CarKm, 20_000)]);
        let result = score(&answers);

        assert!(approx(contribution(&result, Term::CarTravel), 2.4));
        // Range defaults: 80 m² and 5 devices.
        assert!(approx(contribution(&result, Term::HomeSize), 1.6));
        assert!(approx(contribution(&result, Term::Electronics), 0.5));
        assert!(approx(result.total_tonnes, 6.0));
        assert_eq!(result.footprint_tonnes, 6);
        assert_eq!(
            result.recommendations.first().map(String::as_str),
            Some(Recommendation::DriveLess.message())
        );
    }

    #[test]
    fn test_scenario_d_missing_local_food_recommends_local() {
        let answers: AnswerSet = scenario_a()
            .iter()
            .filter(|(id, _)| *id != QuestionId::LocalFood)
            .collect();
        let engine = ScoringEngine::default();
        assert_eq!(engine.recommendations(&answers), vec![Recommendation::BuyLocal]);
    }

    #[test]
    fn test_household_zero_or_absent_matches_one() {
        let mut zero = scenario_a();
        zero.insert(QuestionId::Household, 0);
        let absent: AnswerSet = scenario_a()
            .iter()
            .filter(|(id, _)| *id != QuestionId::Household)
            .collect();
        let one = score(&scenario_a());

        assert_eq!(score(&zero), one);
        assert_eq!(score(&absent), one);
    }

    #[test]
    fn test_negative_household_counts_as_one() {
        let mut answers = scenario_a();
        answers.insert(QuestionId::Household, -3);
        assert_eq!(ScoringEngine::default().household(&answers), 1);
        assert_eq!(score(&answers).footprint_tonnes, 3);
    }

    #[test]
    fn test_explicit_zero_is_not_defaulted() {
        let zero = AnswerSet::from([(QuestionId::CarKm, 0)]);
        let absent = AnswerSet::new();
        assert!(approx(contribution(&score(&zero), Term::CarTravel), 0.0));
        assert!(approx(contribution(&score(&absent), Term::CarTravel), 1.2));
    }

    #[test]
    fn test_unmapped_codes_contribute_zero() {
        let answers = AnswerSet::from([
            (QuestionId::PublicTransport, 7),
            (QuestionId::EnergyType, 0),
            (QuestionId::LocalFood, 60),
        ]);
        let result = score(&answers);
        assert!(approx(contribution(&result, Term::PublicTransport), 0.0));
        assert!(approx(contribution(&result, Term::HeatingEnergy), 0.0));
        assert!(approx(contribution(&result, Term::LocalFood), 0.0));
    }

    #[test]
    fn test_every_catalog_option_has_a_factor() {
        let catalog = Catalog::standard();
        for question in catalog.questions().filter(|q| q.is_choice()) {
            for option in question.options() {
                let mapped = match question.id {
                    QuestionId::PublicTransport => {
                        PublicTransport::from_code(option.value).is_some()
                    }
                    QuestionId::EnergyType => HeatingEnergy::from_code(option.value).is_some(),
                    QuestionId::MeatConsumption => {
                        MeatConsumption::from_code(option.value).is_some()
                    }
                    QuestionId::LocalFood => LocalFood::from_code(option.value).is_some(),
                    QuestionId::ShoppingHabits => {
                        ShoppingHabits::from_code(option.value).is_some()
                    }
                    other => panic!("unexpected choice question {other}"),
                };
                assert!(mapped, "{} option {} has no factor", question.id, option.value);
            }
        }
    }

    #[test]
    fn test_exact_half_rounds_up_into_moderate() {
        // 0.2 + 0.1 + 1.5 + 0.5 + 0.9 + 1.5 + 0.3 + 1.5 = 6.5
        let answers = AnswerSet::from([
            (QuestionId::CarKm, 0),
            (QuestionId::PublicTransport, 1),
            (QuestionId::HomeSize, 10),
            (QuestionId::EnergyType, 4),
            (QuestionId::MeatConsumption, 1),
            (QuestionId::LocalFood, 50),
            (QuestionId::ShoppingHabits, 3),
            (QuestionId::ElectronicDevices, 3),
            (QuestionId::Household, 1),
        ]);
        let result = score(&answers);
        assert!(approx(result.total_tonnes, 6.5));
        assert_eq!(result.footprint_tonnes, 7);
        assert_eq!(result.category, Category::Moderate);
        assert_eq!(result.accent, Accent::Medium);
    }

    #[test]
    fn test_exact_half_per_person_rounds_up() {
        // Same answers with 35 m²: 7.0 t across two people.
        let answers = AnswerSet::from([
            (QuestionId::CarKm, 0),
            (QuestionId::PublicTransport, 1),
            (QuestionId::HomeSize, 35),
            (QuestionId::EnergyType, 4),
            (QuestionId::MeatConsumption, 1),
            (QuestionId::LocalFood, 50),
            (QuestionId::ShoppingHabits, 3),
            (QuestionId::ElectronicDevices, 3),
            (QuestionId::Household, 2),
        ]);
        let result = score(&answers);
        assert!(approx(result.per_person_tonnes, 3.5));
        assert_eq!(result.footprint_tonnes, 4);
    }

    #[test]
    fn test_round_per_person() {
        assert_eq!(round_per_person(6_499_999, 1), 6);
        assert_eq!(round_per_person(6_500_000, 1), 7);
        assert_eq!(round_per_person(3_100_000, 2), 2);
        assert_eq!(round_per_person(2_900_000, 2), 1);
        assert_eq!(round_per_person(400_000, 1), 0);
        assert_eq!(round_per_person(-2_000_000, 1), 0);
        assert_eq!(round_per_person(0, 3), 0);
    }

    #[test]
    fn test_category_messages_and_accents() {
        let cases = [
            (3, Category::Excellent, Accent::Good, "Well done!"),
            (8, Category::Moderate, Accent::Medium, "within today's average"),
            (12, Category::Poor, Accent::Bad, "above average"),
        ];
        for (tonnes, category, accent, fragment) in cases {
            assert_eq!(Category::for_tonnes(tonnes), category);
            assert_eq!(category.accent(), accent);
            assert!(category.message().contains(fragment));
        }
        assert_eq!(
            Category::Excellent.message(),
            "Well done! You are on track for the 2-tonne target set for 2050. Keep it up!"
        );
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(Category::for_tonnes(0), Category::Excellent);
        assert_eq!(Category::for_tonnes(6), Category::Excellent);
        assert_eq!(Category::for_tonnes(7), Category::Moderate);
        assert_eq!(Category::for_tonnes(10), Category::Moderate);
        assert_eq!(Category::for_tonnes(11), Category::Poor);
        assert_eq!(Category::Poor.accent(), Accent::Bad);
    }

    #[test]
    fn test_all_recommendations_in_order() {
        let answers = AnswerSet::from([
            (QuestionId::CarKm, 30_000),
            (QuestionId::MeatConsumption, 4),
            (QuestionId::LocalFood, 25),
            (QuestionId::ShoppingHabits, 3),
            (QuestionId::ElectronicDevices, 15),
        ]);
        assert_eq!(
            ScoringEngine::default().recommendations(&answers),
            vec![
                Recommendation::DriveLess,
                Recommendation::EatLessMeat,
                Recommendation::BuyLocal,
                Recommendation::BuySecondHand,
                Recommendation::FewerDevices,
            ]
        );
    }

    #[test]
    fn test_recommendation_thresholds_are_strict() {
        let answers = AnswerSet::from([
            (QuestionId::CarKm, 15_000),
            (QuestionId::MeatConsumption, 2),
            (QuestionId::LocalFood, 50),
            (QuestionId::ShoppingHabits, 2),
            (QuestionId::ElectronicDevices, 10),
        ]);
        assert!(ScoringEngine::default().recommendations(&answers).is_empty());
    }

    #[test]
    fn test_poor_category_for_heavy_footprint() {
        let answers = AnswerSet::from([
            (QuestionId::CarKm, 50_000),
            (QuestionId::PublicTransport, 3),
            (QuestionId::HomeSize, 300),
            (QuestionId::EnergyType, 2),
            (QuestionId::MeatConsumption, 4),
            (QuestionId::LocalFood, 25),
            (QuestionId::ShoppingHabits, 4),
            (QuestionId::ElectronicDevices, 20),
        ]);
        // 6 + 0.5 + 6 + 3 + 3 + 1.2 + 2.5 + 2 + 1.5 = 25.7
        let result = score(&answers);
        assert_eq!(result.footprint_tonnes, 26);
        assert_eq!(result.category, Category::Poor);
        assert_eq!(result.recommendations.len(), 5);
    }
}
