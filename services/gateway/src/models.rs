use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::RiskError;
use types::model::ModelVersion;
use types::patient::{Race, RiskFactors, Sex};
use types::risk::RiskResult;

fn default_model_version() -> String {
    ModelVersion::default().as_str().to_string()
}

/// Query string of `GET /v1/calculate/ascvd`
///
/// Clinical values and the cohort flags are optional here so that a missing
/// one surfaces as a precondition failure rather than a parse error, after
/// the model has been resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct AscvdQuery {
    pub age: Option<i64>,
    pub is_male: Option<bool>,
    pub is_black: Option<bool>,
    pub total_chol: Option<f64>,
    pub hdl: Option<f64>,
    pub sbp: Option<f64>,
    #[serde(default = "default_model_version")]
    pub model_version: String,
    #[serde(default)]
    pub on_htn_meds: bool,
    #[serde(default)]
    pub is_smoker: bool,
    #[serde(default)]
    pub is_diabetic: bool,
}

impl AscvdQuery {
    pub fn risk_factors(&self) -> Result<RiskFactors, RiskError> {
        let age = self.age.ok_or_else(|| RiskError::missing("age"))?;
        let age = u32::try_from(age).map_err(|_| RiskError::PreconditionViolation {
            field: "age",
            value: age.to_string(),
        })?;
        let is_male = self.is_male.ok_or_else(|| RiskError::missing("is_male"))?;
        let is_black = self.is_black.ok_or_else(|| RiskError::missing("is_black"))?;
        let total_chol = self.total_chol.ok_or_else(|| RiskError::missing("total_cholesterol"))?;
        let hdl = self.hdl.ok_or_else(|| RiskError::missing("hdl_cholesterol"))?;
        let sbp = self.sbp.ok_or_else(|| RiskError::missing("systolic_bp"))?;

        Ok(RiskFactors::new(
            age,
            Sex::from_is_male(is_male),
            Race::from_is_black(is_black),
            total_chol,
            hdl,
            sbp,
        )
        .with_hypertension_treatment(self.on_htn_meds)
        .with_smoker(self.is_smoker)
        .with_diabetes(self.is_diabetic))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AscvdResponse {
    pub ten_year_risk: String,
    pub risk_category: String,
    pub model_version: ModelVersion,
    pub disclaimer: String,
}

impl From<RiskResult> for AscvdResponse {
    fn from(result: RiskResult) -> Self {
        Self {
            ten_year_risk: format_percent(result.risk_percent),
            risk_category: result.risk_category.label().to_string(),
            model_version: result.model_version,
            disclaimer: result.disclaimer,
        }
    }
}

/// "5.38%", "5.3%", "5.0%": trailing zeros dropped, one fractional digit kept
pub fn format_percent(percent: Decimal) -> String {
    let normalized = percent.normalize();
    if normalized.scale() == 0 {
        format!("{}.0%", normalized)
    } else {
        format!("{}%", normalized)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoefficientsQuery {
    pub sex: Sex,
    pub race: Race,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}
