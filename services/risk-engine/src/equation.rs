//! Pooled Cohort Equations evaluation
//!
//! Linear predictor over a cohort's term list, then the baseline survival
//! transform:
//!
//! `risk = 1 − S10 ^ exp(lp − mean_lp)`
//!
//! Callers must validate the factors first (see `validator`); logarithms of
//! non-positive inputs are not guarded here.

use rust_decimal::prelude::*;
use types::patient::RiskFactors;

use crate::coefficients::{CoefficientSet, Factor};

/// Decimal places of the reported percentage
pub const PERCENT_DP: u32 = 2;

/// Log-transformed inputs, computed once per evaluation
#[derive(Debug, Clone, Copy)]
struct LogFactors {
    ln_age: f64,
    ln_total_cholesterol: f64,
    ln_hdl: f64,
    ln_sbp: f64,
    treated: bool,
    smoker: bool,
    diabetic: bool,
}

impl LogFactors {
    fn new(factors: &RiskFactors) -> Self {
        Self {
            ln_age: f64::from(factors.age).ln(),
            ln_total_cholesterol: factors.total_cholesterol.ln(),
            ln_hdl: factors.hdl_cholesterol.ln(),
            ln_sbp: factors.systolic_bp.ln(),
            treated: factors.on_hypertension_treatment,
            smoker: factors.is_smoker,
            diabetic: factors.is_diabetic,
        }
    }

    fn value(&self, factor: Factor) -> f64 {
        let treated_sbp = if self.treated { self.ln_sbp } else { 0.0 };
        let untreated_sbp = if self.treated { 0.0 } else { self.ln_sbp };
        let smoker = indicator(self.smoker);

        match factor {
            Factor::LnAge => self.ln_age,
            Factor::LnAgeSquared => self.ln_age * self.ln_age,
            Factor::LnTotalCholesterol => self.ln_total_cholesterol,
            Factor::LnAgeByLnTotalCholesterol => self.ln_age * self.ln_total_cholesterol,
            Factor::LnHdl => self.ln_hdl,
            Factor::LnAgeByLnHdl => self.ln_age * self.ln_hdl,
            Factor::LnTreatedSbp => treated_sbp,
            Factor::LnAgeByLnTreatedSbp => self.ln_age * treated_sbp,
            Factor::LnUntreatedSbp => untreated_sbp,
            Factor::LnAgeByLnUntreatedSbp => self.ln_age * untreated_sbp,
            Factor::Smoker => smoker,
            Factor::LnAgeBySmoker => self.ln_age * smoker,
            Factor::Diabetic => indicator(self.diabetic),
        }
    }
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Weighted sum of the cohort's terms for one patient
pub fn linear_predictor(coeffs: &CoefficientSet, factors: &RiskFactors) -> f64 {
    let logs = LogFactors::new(factors);
    coeffs
        .terms
        .iter()
        .map(|t| t.coefficient * logs.value(t.factor))
        .sum()
}

/// Map a linear predictor onto the cohort's baseline survival curve.
///
/// Returns a probability. Not clamped: a very large predictor underflows
/// `S10^x` and the result saturates at 1.0.
pub fn survival_transform(linear_predictor: f64, coeffs: &CoefficientSet) -> f64 {
    let relative_hazard = (linear_predictor - coeffs.mean_linear_predictor).exp();
    1.0 - coeffs.baseline_survival.powf(relative_hazard)
}

/// Convert a probability to a percentage rounded to two decimal places.
///
/// Rounds the exact binary value half-to-even. Returns None for
/// non-finite input.
pub fn to_percent(probability: f64) -> Option<Decimal> {
    let percent = probability * 100.0;
    if !percent.is_finite() {
        return None;
    }
    // Rounds to zero anyway; Decimal cannot hold every tiny f64 exactly.
    if percent.abs() < 0.001 {
        return Some(Decimal::ZERO);
    }
    let exact = Decimal::from_f64_retain(percent)?;
    Some(exact.round_dp_with_strategy(PERCENT_DP, RoundingStrategy::MidpointNearestEven))
}
