//! Risk Engine — entry point
//!
//! Dispatches on the model selector and runs the PCE pipeline:
//! validate → select coefficients → linear predictor → survival transform
//! → round to percent → classify.

use types::errors::RiskError;
use types::model::ModelVersion;
use types::patient::RiskFactors;
use types::risk::RiskResult;

use crate::classification;
use crate::coefficients;
use crate::equation;
use crate::validator;

/// Compute 10-year ASCVD risk for a model selector string.
///
/// The selector is resolved before the factors are looked at: `prevent2023`
/// always fails with `NotImplemented` and an unknown selector always fails
/// with `InvalidInput`, whatever the factors contain.
pub fn compute_risk(factors: &RiskFactors, model_version: &str) -> Result<RiskResult, RiskError> {
    let model: ModelVersion = model_version.parse()?;
    compute_risk_for(factors, model)
}

/// Compute risk for an already-parsed model selector.
pub fn compute_risk_for(
    factors: &RiskFactors,
    model: ModelVersion,
) -> Result<RiskResult, RiskError> {
    match model {
        ModelVersion::Pce2013 => compute_pce2013(factors),
        ModelVersion::Prevent2023 => Err(RiskError::NotImplemented { model }),
    }
}

/// Fail early for a recognized model that has no implementation.
///
/// Lets a boundary reject `prevent2023` before it has assembled factors.
pub fn ensure_implemented(model: ModelVersion) -> Result<(), RiskError> {
    match model {
        ModelVersion::Pce2013 => Ok(()),
        ModelVersion::Prevent2023 => Err(RiskError::NotImplemented { model }),
    }
}

/// 2013 Pooled Cohort Equations
pub fn compute_pce2013(factors: &RiskFactors) -> Result<RiskResult, RiskError> {
    validator::validate_factors(factors)?;

    let coeffs = coefficients::select_coefficients(factors.sex, factors.race);
    let lp = equation::linear_predictor(coeffs, factors);
    let probability = equation::survival_transform(lp, coeffs);

    // Validated inputs keep every term finite, so this only trips on a bug.
    let risk_percent =
        equation::to_percent(probability).ok_or_else(|| RiskError::PreconditionViolation {
            field: "risk_factors",
            value: probability.to_string(),
        })?;

    // Classified after rounding: 7.495 reports and classifies as 7.5.
    let category = classification::classify(risk_percent);

    Ok(RiskResult::new(risk_percent, category, ModelVersion::Pce2013))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use types::patient::{Race, Sex};
    use types::risk::{RiskCategory, DISCLAIMER};

    fn reference(sex: Sex, race: Race) -> RiskFactors {
        RiskFactors::new(55, sex, race, 213.0, 50.0, 120.0)
    }

    fn percent_f64(result: &RiskResult) -> f64 {
        result.risk_percent.to_string().parse().unwrap()
    }

    // ── End-to-end tests ──

    #[test]
    fn test_white_male_reference() {
        let result = compute_risk(&reference(Sex::Male, Race::NonBlack), "pce2013").unwrap();
        assert_eq!(result.risk_percent, Decimal::new(538, 2));
        assert_eq!(result.risk_category, RiskCategory::Borderline);
        assert_eq!(result.risk_category.label(), "Borderline (5-7.4%)");
        assert_eq!(result.model_version, ModelVersion::Pce2013);
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_reference_examples_all_cohorts() {
        let cases = [
            (Sex::Female, Race::NonBlack, 2.05, RiskCategory::Low),
            (Sex::Female, Race::Black, 3.03, RiskCategory::Low),
            (Sex::Male, Race::NonBlack, 5.38, RiskCategory::Borderline),
            (Sex::Male, Race::Black, 6.07, RiskCategory::Borderline),
        ];
        for (sex, race, expected, category) in cases {
            let result = compute_risk(&reference(sex, race), "pce2013").unwrap();
            assert!((percent_f64(&result) - expected).abs() <= 0.01);
            assert_eq!(result.risk_category, category);
        }
    }

    #[test]
    fn test_high_risk_profile() {
        let factors = RiskFactors::new(70, Sex::Male, Race::NonBlack, 260.0, 35.0, 160.0)
            .with_hypertension_treatment(true)
            .with_smoker(true)
            .with_diabetes(true);
        let result = compute_risk(&factors, "pce2013").unwrap();
        assert_eq!(result.risk_category, RiskCategory::High);
    }

    #[test]
    fn test_percent_has_two_decimal_places_at_most() {
        let result = compute_risk(&reference(Sex::Female, Race::Black), "pce2013").unwrap();
        assert!(result.risk_percent.scale() <= 2);
    }

    // ── Dispatch tests ──

    #[test]
    fn test_prevent2023_not_implemented() {
        let err = compute_risk(&reference(Sex::Male, Race::Black), "prevent2023").unwrap_err();
        assert_eq!(
            err,
            RiskError::NotImplemented {
                model: ModelVersion::Prevent2023
            }
        );
    }

    #[test]
    fn test_unknown_model_invalid_input() {
        let err = compute_risk(&reference(Sex::Male, Race::Black), "xyz").unwrap_err();
        assert_eq!(
            err,
            RiskError::InvalidInput {
                given: "xyz".to_string()
            }
        );
    }

    #[test]
    fn test_model_checked_before_preconditions() {
        let mut factors = reference(Sex::Female, Race::NonBlack);
        factors.age = 0;
        assert!(matches!(
            compute_risk(&factors, "prevent2023"),
            Err(RiskError::NotImplemented { .. })
        ));
        assert!(matches!(
            compute_risk(&factors, "xyz"),
            Err(RiskError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_ensure_implemented() {
        assert_eq!(ensure_implemented(ModelVersion::Pce2013), Ok(()));
        assert!(matches!(
            ensure_implemented(ModelVersion::Prevent2023),
            Err(RiskError::NotImplemented { .. })
        ));
    }

    // ── Treatment tests ──

    fn treated_and_untreated(factors: RiskFactors) -> (Decimal, Decimal) {
        let treated = factors.clone().with_hypertension_treatment(true);
        let untreated = factors.with_hypertension_treatment(false);
        (
            compute_pce2013(&treated).unwrap().risk_percent,
            compute_pce2013(&untreated).unwrap().risk_percent,
        )
    }

    #[test]
    fn test_treatment_lowers_risk_for_older_black_women() {
        // age x treated SBP outweighs the treated SBP term past age ~71
        let factors = RiskFactors::new(75, Sex::Female, Race::Black, 213.0, 50.0, 140.0);
        let (treated, untreated) = treated_and_untreated(factors);
        assert_eq!(untreated, Decimal::new(1919, 2));
        assert_eq!(treated, Decimal::new(1767, 2));
        assert!(treated < untreated);
    }

    #[test]
    fn test_treatment_raises_risk_for_other_cohorts_at_75() {
        for (sex, race) in [
            (Sex::Female, Race::NonBlack),
            (Sex::Male, Race::NonBlack),
            (Sex::Male, Race::Black),
        ] {
            let factors = RiskFactors::new(75, sex, race, 213.0, 50.0, 140.0);
            let (treated, untreated) = treated_and_untreated(factors);
            assert!(treated > untreated, "{:?}/{:?}: {} <= {}", sex, race, treated, untreated);
        }
    }

    // ── Precondition tests ──

    #[test]
    fn test_zero_age_is_precondition_violation() {
        let mut factors = reference(Sex::Male, Race::NonBlack);
        factors.age = 0;
        assert!(matches!(
            compute_risk(&factors, "pce2013"),
            Err(RiskError::PreconditionViolation { field: "age", .. })
        ));
    }

    #[test]
    fn test_zero_total_cholesterol_is_precondition_violation() {
        let mut factors = reference(Sex::Male, Race::NonBlack);
        factors.total_cholesterol = 0.0;
        assert!(matches!(
            compute_risk(&factors, "pce2013"),
            Err(RiskError::PreconditionViolation {
                field: "total_cholesterol",
                ..
            })
        ));
    }

    // ── Properties ──

    fn cohort() -> impl Strategy<Value = (Sex, Race)> {
        prop_oneof![
            Just((Sex::Female, Race::NonBlack)),
            Just((Sex::Female, Race::Black)),
            Just((Sex::Male, Race::NonBlack)),
            Just((Sex::Male, Race::Black)),
        ]
    }

    prop_compose! {
        fn well_formed()(
            (sex, race) in cohort(),
            age in 1u32..=120,
            tc in 50.0f64..400.0,
            hdl in 10.0f64..120.0,
            sbp in 80.0f64..220.0,
            treated in any::<bool>(),
            smoker in any::<bool>(),
            diabetic in any::<bool>(),
        ) -> RiskFactors {
            RiskFactors::new(age, sex, race, tc, hdl, sbp)
                .with_hypertension_treatment(treated)
                .with_smoker(smoker)
                .with_diabetes(diabetic)
        }
    }

    proptest! {
        #[test]
        fn pce2013_well_formed_never_fails(factors in well_formed()) {
            let result = compute_risk(&factors, "pce2013");
            prop_assert!(result.is_ok(), "{:?}", result);
            let result = result.unwrap();
            prop_assert!(result.risk_percent >= Decimal::ZERO);
            prop_assert!(result.risk_percent <= Decimal::ONE_HUNDRED);
            prop_assert_eq!(
                result.risk_category,
                classification::classify(result.risk_percent)
            );
        }

        #[test]
        fn prevent2023_always_not_implemented(factors in well_formed(), age in 0u32..200) {
            let mut factors = factors;
            factors.age = age;
            let result = compute_risk(&factors, "prevent2023");
            let not_implemented = matches!(result, Err(RiskError::NotImplemented { .. }));
            prop_assert!(not_implemented, "expected NotImplemented, got {:?}", result);
        }

        #[test]
        fn unknown_model_always_invalid(factors in well_formed()) {
            let result = compute_risk(&factors, "xyz");
            let invalid = matches!(result, Err(RiskError::InvalidInput { .. }));
            prop_assert!(invalid, "expected InvalidInput, got {:?}", result);
        }

        #[test]
        fn treatment_strictly_increases_risk(
            (sex, race) in cohort(),
            age in 40u32..=70,
            tc in 130.0f64..320.0,
            hdl in 20.0f64..100.0,
            sbp in 90.0f64..200.0,
            smoker in any::<bool>(),
            diabetic in any::<bool>(),
        ) {
            let untreated = RiskFactors::new(age, sex, race, tc, hdl, sbp)
                .with_smoker(smoker)
                .with_diabetes(diabetic);
            let treated = untreated.clone().with_hypertension_treatment(true);

            let coeffs = coefficients::select_coefficients(sex, race);
            let risk_untreated = equation::survival_transform(
                equation::linear_predictor(coeffs, &untreated),
                coeffs,
            );
            let risk_treated = equation::survival_transform(
                equation::linear_predictor(coeffs, &treated),
                coeffs,
            );
            prop_assert!(risk_treated > risk_untreated);
        }
    }
}
