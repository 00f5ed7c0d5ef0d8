use crate::config::AlertBand;
use crate::core::model::{Asset, HazardType, IntensityLevel};
use crate::core::weights::NormalizedWeights;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskBand {
    pub fn for_score(score: f64) -> Self {
        if score < 30.0 {
            Self::Low
        } else if score < 60.0 {
            Self::Moderate
        } else if score < 80.0 {
            Self::High
        } else {
            Self::Severe
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }

    pub fn meets_alert(self, alert_band: AlertBand) -> bool {
        match alert_band {
            AlertBand::None => false,
            AlertBand::Moderate => matches!(self, Self::Moderate | Self::High | Self::Severe),
            AlertBand::High => matches!(self, Self::High | Self::Severe),
            AlertBand::Severe => matches!(self, Self::Severe),
        }
    }

    pub fn colored(self) -> String {
        match self {
            Self::Low => self.as_str().green().to_string(),
            Self::Moderate => self.as_str().yellow().to_string(),
            Self::High => self.as_str().red().to_string(),
            Self::Severe => self.as_str().red().bold().to_string(),
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn score_asset(
    asset: &Asset,
    hazard: HazardType,
    intensity: IntensityLevel,
    weights: &NormalizedWeights,
) -> f64 {
    let modifiers = hazard.modifiers();

    let base = asset.exposure * modifiers.exposure * weights.exposure
        + asset.vulnerability * modifiers.vulnerability * weights.vulnerability
        + asset.criticality * weights.criticality;

    (base * intensity.factor()).min(100.0)
}
