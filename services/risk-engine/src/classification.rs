//! Risk band classification
//!
//! Threshold ladder over the rounded 10-year risk percentage. Lower bounds
//! are inclusive.

use rust_decimal::Decimal;
use types::risk::RiskCategory;

// ── Band thresholds ──────────────────────────────────────────────────────

/// Lower bound of the Borderline band (5.0%)
pub const BORDERLINE_THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
/// Lower bound of the Intermediate band (7.5%)
pub const INTERMEDIATE_THRESHOLD: Decimal = Decimal::from_parts(75, 0, 0, false, 1);
/// Lower bound of the High band (20.0%)
pub const HIGH_THRESHOLD: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Classify a risk percentage, highest band first
pub fn classify(risk_percent: Decimal) -> RiskCategory {
    if risk_percent >= HIGH_THRESHOLD {
        RiskCategory::High
    } else if risk_percent >= INTERMEDIATE_THRESHOLD {
        RiskCategory::Intermediate
    } else if risk_percent >= BORDERLINE_THRESHOLD {
        RiskCategory::Borderline
    } else {
        RiskCategory::Low
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
