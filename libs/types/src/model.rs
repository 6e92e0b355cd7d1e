//! Risk model selector

use crate::errors::RiskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk model version
///
/// Wire names are matched exactly (case-sensitive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelVersion {
    /// 2013 ACC/AHA Pooled Cohort Equations
    #[default]
    #[serde(rename = "pce2013")]
    Pce2013,
    /// AHA PREVENT equations (recognized, not implemented)
    #[serde(rename = "prevent2023")]
    Prevent2023,
}

impl ModelVersion {
    /// Every selector the boundary accepts, in display order
    pub const ALL: [ModelVersion; 2] = [ModelVersion::Pce2013, ModelVersion::Prevent2023];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVersion::Pce2013 => "pce2013",
            ModelVersion::Prevent2023 => "prevent2023",
        }
    }

    /// Human-readable model name
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelVersion::Pce2013 => "PCE 2013",
            ModelVersion::Prevent2023 => "PREVENT 2023",
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVersion {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelVersion::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| RiskError::InvalidInput {
                given: s.to_string(),
            })
    }
}
