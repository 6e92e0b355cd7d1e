//! Patient risk factor types
//!
//! Inputs to the Pooled Cohort Equations. Built fresh per request by the
//! caller; the engine only ever borrows them.

use serde::{Deserialize, Serialize};

/// Biological sex as used by the cohort tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Map the boundary's `is_male` flag
    pub fn from_is_male(is_male: bool) -> Self {
        if is_male {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

/// Race bucket; the equations only distinguish these two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Black,
    NonBlack,
}

impl Race {
    /// Map the boundary's `is_black` flag
    pub fn from_is_black(is_black: bool) -> Self {
        if is_black {
            Race::Black
        } else {
            Race::NonBlack
        }
    }
}

/// Patient risk factors
///
/// `age`, `total_cholesterol`, `hdl_cholesterol` and `systolic_bp` must be
/// strictly positive; the engine rejects anything else before taking
/// logarithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Age in years
    pub age: u32,
    pub sex: Sex,
    pub race: Race,
    /// Total cholesterol, mg/dL
    pub total_cholesterol: f64,
    /// HDL cholesterol, mg/dL
    pub hdl_cholesterol: f64,
    /// Systolic blood pressure, mmHg
    pub systolic_bp: f64,
    pub on_hypertension_treatment: bool,
    pub is_smoker: bool,
    pub is_diabetic: bool,
}

impl RiskFactors {
    /// Create risk factors with all boolean flags cleared
    pub fn new(
        age: u32,
        sex: Sex,
        race: Race,
        total_cholesterol: f64,
        hdl_cholesterol: f64,
        systolic_bp: f64,
    ) -> Self {
        Self {
            age,
            sex,
            race,
            total_cholesterol,
            hdl_cholesterol,
            systolic_bp,
            on_hypertension_treatment: false,
            is_smoker: false,
            is_diabetic: false,
        }
    }

    pub fn with_hypertension_treatment(mut self, treated: bool) -> Self {
        self.on_hypertension_treatment = treated;
        self
    }

    pub fn with_smoker(mut self, smoker: bool) -> Self {
        self.is_smoker = smoker;
        self
    }

    pub fn with_diabetes(mut self, diabetic: bool) -> Self {
        self.is_diabetic = diabetic;
        self
    }
}
