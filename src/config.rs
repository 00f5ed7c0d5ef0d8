use crate::core::model::{Asset, HazardType, IntensityLevel};
use crate::core::weights::WeightInput;
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub weights: WeightInput,
    pub scenario: ScenarioConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub alert_band: AlertBand,
    pub json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            alert_band: AlertBand::Severe,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AlertBand {
    None,
    Moderate,
    High,
    #[default]
    Severe,
}

impl fmt::Display for AlertBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
            Self::Severe => write!(f, "severe"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub hazard: HazardType,
    pub intensities: Vec<IntensityLevel>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            hazard: HazardType::Flood,
            intensities: IntensityLevel::ALL.to_vec(),
        }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
        });
    }

    let local_path = cwd.join("riskgrid.toml");
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = default_config_toml().unwrap();
        let parsed = toml::from_str::<Config>(&serialized).unwrap();

        assert_eq!(parsed.general.alert_band, AlertBand::Severe);
        assert!(!parsed.general.json);
        assert_eq!(parsed.weights, WeightInput::default());
        assert_eq!(parsed.scenario.hazard, HazardType::Flood);
        assert_eq!(parsed.scenario.intensities, IntensityLevel::ALL.to_vec());
        assert!(parsed.assets.is_empty());
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let parsed = toml::from_str::<Config>(
            r#"
[general]
alert_band = "high"

[weights]
exposure = 3.0
"#,
        )
        .unwrap();

        assert_eq!(parsed.general.alert_band, AlertBand::High);
        assert_eq!(parsed.weights.exposure, 3.0);
        assert_eq!(parsed.weights.vulnerability, 1.0);
        assert_eq!(parsed.scenario.hazard, HazardType::Flood);
    }

    #[test]
    fn asset_override_parses_type_key() {
        let parsed = toml::from_str::<Config>(
            r#"
[scenario]
hazard = "earthquake"
intensities = ["low", "extreme"]

[[assets]]
name = "Substation 12"
type = "Power Support"
exposure = 55.0
vulnerability = 48.0
criticality = 90.0
"#,
        )
        .unwrap();

        assert_eq!(parsed.assets.len(), 1);
        assert_eq!(parsed.assets[0].kind, "Power Support");
        assert_eq!(
            parsed.scenario.intensities,
            vec![IntensityLevel::Low, IntensityLevel::Extreme]
        );
    }
}
