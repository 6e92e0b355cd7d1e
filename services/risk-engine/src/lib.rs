//! Risk Engine
//!
//! 10-year ASCVD risk from the 2013 ACC/AHA Pooled Cohort Equations:
//! - cohort coefficient tables (`coefficients`)
//! - linear predictor and survival transform (`equation`)
//! - clinical band thresholds (`classification`)
//! - input preconditions (`validator`)
//! - model dispatch (`engine`)
//!
//! Pure functions over constant tables. No state, no I/O, no logging.

pub mod coefficients;
pub mod equation;
pub mod classification;
pub mod validator;
pub mod engine;

pub use classification::classify;
pub use coefficients::{all_coefficient_sets, select_coefficients, CoefficientSet, Cohort};
pub use engine::{compute_pce2013, compute_risk, compute_risk_for, ensure_implemented};
pub use equation::{linear_predictor, survival_transform};
