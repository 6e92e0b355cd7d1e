//! Risk factor precondition checks
//!
//! Every input that goes through a logarithm must be strictly positive and
//! finite. Runs before any arithmetic; nothing is coerced or defaulted.

use types::errors::RiskError;
use types::patient::RiskFactors;

/// Validate risk factors before evaluating the equations.
///
/// Checks performed (in order, first failure wins):
/// 1. age > 0
/// 2. total cholesterol positive and finite
/// 3. HDL cholesterol positive and finite
/// 4. systolic blood pressure positive and finite
pub fn validate_factors(factors: &RiskFactors) -> Result<(), RiskError> {
    if factors.age == 0 {
        return Err(RiskError::PreconditionViolation {
            field: "age",
            value: factors.age.to_string(),
        });
    }

    check_positive("total_cholesterol", factors.total_cholesterol)?;
    check_positive("hdl_cholesterol", factors.hdl_cholesterol)?;
    check_positive("systolic_bp", factors.systolic_bp)?;

    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), RiskError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RiskError::PreconditionViolation {
            field,
            value: value.to_string(),
        })
    }
}
