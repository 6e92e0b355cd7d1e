//! Types library for the ASCVD risk calculator
//!
//! Core type definitions shared by the risk engine and the HTTP gateway.
//! Everything here is plain data: constructed per request, never mutated
//! after construction, never shared.
//!
//! # Modules
//! - `patient`: Risk factor inputs (RiskFactors, Sex, Race)
//! - `model`: Risk model selector
//! - `risk`: Risk results and clinical bands
//! - `errors`: Error taxonomy

pub mod patient;
pub mod model;
pub mod risk;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::patient::*;
    pub use crate::model::*;
    pub use crate::risk::*;
    pub use crate::errors::*;
}
