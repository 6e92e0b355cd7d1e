pub mod ascvd;
pub mod coefficients;
pub mod status;
