//! Pooled Cohort Equations coefficient tables
//!
//! One constant record per cohort, copied from the published 2013 ACC/AHA
//! equations. Each record carries its own term list; terms are never shared
//! or derived across cohorts.

use serde::Serialize;
use types::patient::{Race, Sex};

// ── Cohorts ──────────────────────────────────────────────────────────────

/// Demographic cohort keying the coefficient tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cohort {
    FemaleNonBlack,
    FemaleBlack,
    MaleNonBlack,
    MaleBlack,
}

impl Cohort {
    pub const ALL: [Cohort; 4] = [
        Cohort::FemaleNonBlack,
        Cohort::FemaleBlack,
        Cohort::MaleNonBlack,
        Cohort::MaleBlack,
    ];

    /// Total over both inputs; there is no fallback cohort.
    pub fn of(sex: Sex, race: Race) -> Self {
        match (sex, race) {
            (Sex::Female, Race::NonBlack) => Cohort::FemaleNonBlack,
            (Sex::Female, Race::Black) => Cohort::FemaleBlack,
            (Sex::Male, Race::NonBlack) => Cohort::MaleNonBlack,
            (Sex::Male, Race::Black) => Cohort::MaleBlack,
        }
    }

    pub fn coefficients(self) -> &'static CoefficientSet {
        match self {
            Cohort::FemaleNonBlack => &FEMALE_NON_BLACK,
            Cohort::FemaleBlack => &FEMALE_BLACK,
            Cohort::MaleNonBlack => &MALE_NON_BLACK,
            Cohort::MaleBlack => &MALE_BLACK,
        }
    }
}

// ── Terms ────────────────────────────────────────────────────────────────

/// Transformed risk factor a coefficient multiplies
///
/// Treated and untreated SBP are separate factors: exactly one of each pair
/// is non-zero for a given patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    LnAge,
    LnAgeSquared,
    LnTotalCholesterol,
    LnAgeByLnTotalCholesterol,
    LnHdl,
    LnAgeByLnHdl,
    LnTreatedSbp,
    LnAgeByLnTreatedSbp,
    LnUntreatedSbp,
    LnAgeByLnUntreatedSbp,
    Smoker,
    LnAgeBySmoker,
    Diabetic,
}

/// One `coefficient × factor` summand of the linear predictor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Term {
    pub coefficient: f64,
    pub factor: Factor,
}

const fn term(coefficient: f64, factor: Factor) -> Term {
    Term {
        coefficient,
        factor,
    }
}

/// Constant coefficient record for one cohort
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoefficientSet {
    pub cohort: Cohort,
    /// Baseline 10-year survival (S10)
    pub baseline_survival: f64,
    /// Cohort mean of the linear predictor
    pub mean_linear_predictor: f64,
    pub terms: &'static [Term],
}

// ── Tables ───────────────────────────────────────────────────────────────

static FEMALE_NON_BLACK: CoefficientSet = CoefficientSet {
    cohort: Cohort::FemaleNonBlack,
    baseline_survival: 0.9665,
    mean_linear_predictor: -29.18,
    terms: &[
        term(-29.799, Factor::LnAge),
        term(4.884, Factor::LnAgeSquared),
        term(13.540, Factor::LnTotalCholesterol),
        term(-3.114, Factor::LnAgeByLnTotalCholesterol),
        term(-13.578, Factor::LnHdl),
        term(3.149, Factor::LnAgeByLnHdl),
        term(2.019, Factor::LnTreatedSbp),
        term(1.957, Factor::LnUntreatedSbp),
        term(7.574, Factor::Smoker),
        term(-1.665, Factor::LnAgeBySmoker),
        term(0.661, Factor::Diabetic),
    ],
};

static FEMALE_BLACK: CoefficientSet = CoefficientSet {
    cohort: Cohort::FemaleBlack,
    baseline_survival: 0.9533,
    mean_linear_predictor: 86.61,
    terms: &[
        term(17.114, Factor::LnAge),
        term(0.940, Factor::LnTotalCholesterol),
        term(-18.920, Factor::LnHdl),
        term(4.475, Factor::LnAgeByLnHdl),
        term(29.291, Factor::LnTreatedSbp),
        term(-6.432, Factor::LnAgeByLnTreatedSbp),
        term(27.820, Factor::LnUntreatedSbp),
        term(-6.087, Factor::LnAgeByLnUntreatedSbp),
        term(0.691, Factor::Smoker),
        term(0.874, Factor::Diabetic),
    ],
};

static MALE_NON_BLACK: CoefficientSet = CoefficientSet {
    cohort: Cohort::MaleNonBlack,
    baseline_survival: 0.9144,
    mean_linear_predictor: 61.18,
    terms: &[
        term(12.344, Factor::LnAge),
        term(11.853, Factor::LnTotalCholesterol),
        term(-2.664, Factor::LnAgeByLnTotalCholesterol),
        term(-7.990, Factor::LnHdl),
        term(1.769, Factor::LnAgeByLnHdl),
        term(1.797, Factor::LnTreatedSbp),
        term(1.764, Factor::LnUntreatedSbp),
        term(7.837, Factor::Smoker),
        term(-1.795, Factor::LnAgeBySmoker),
        term(0.658, Factor::Diabetic),
    ],
};

static MALE_BLACK: CoefficientSet = CoefficientSet {
    cohort: Cohort::MaleBlack,
    baseline_survival: 0.8954,
    mean_linear_predictor: 19.54,
    terms: &[
        term(2.469, Factor::LnAge),
        term(0.302, Factor::LnTotalCholesterol),
        term(-0.307, Factor::LnHdl),
        term(1.916, Factor::LnTreatedSbp),
        term(1.809, Factor::LnUntreatedSbp),
        term(0.549, Factor::Smoker),
        term(0.645, Factor::Diabetic),
    ],
};

// ── Lookup ───────────────────────────────────────────────────────────────

/// Coefficient set for a sex/race combination
pub fn select_coefficients(sex: Sex, race: Race) -> &'static CoefficientSet {
    Cohort::of(sex, race).coefficients()
}

/// All four coefficient sets, in `Cohort::ALL` order
pub fn all_coefficient_sets() -> [&'static CoefficientSet; 4] {
    Cohort::ALL.map(Cohort::coefficients)
}
