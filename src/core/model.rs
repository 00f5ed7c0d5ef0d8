use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub exposure: f64,
    pub vulnerability: f64,
    pub criticality: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardModifiers {
    pub exposure: f64,
    pub vulnerability: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HazardType {
    Flood,
    Wildfire,
    Earthquake,
    Storm,
}

impl HazardType {
    pub const ALL: [Self; 4] = [Self::Flood, Self::Wildfire, Self::Earthquake, Self::Storm];

    pub fn modifiers(self) -> HazardModifiers {
        match self {
            Self::Flood => HazardModifiers {
                exposure: 1.2,
                vulnerability: 1.0,
            },
            Self::Wildfire => HazardModifiers {
                exposure: 1.0,
                vulnerability: 1.25,
            },
            Self::Earthquake => HazardModifiers {
                exposure: 1.1,
                vulnerability: 1.35,
            },
            Self::Storm => HazardModifiers {
                exposure: 1.15,
                vulnerability: 1.1,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Wildfire => "wildfire",
            Self::Earthquake => "earthquake",
            Self::Storm => "storm",
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntensityLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl IntensityLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Extreme];

    pub fn factor(self) -> f64 {
        match self {
            Self::Low => 0.75,
            Self::Medium => 1.0,
            Self::High => 1.3,
            Self::Extreme => 1.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
