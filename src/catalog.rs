use crate::config::Config;
use crate::core::model::Asset;
use once_cell::sync::Lazy;

static BUILTIN_ASSETS: Lazy<Vec<Asset>> = Lazy::new(|| {
    vec![
        Asset {
            name: "River Intake Pump Station".to_string(),
            kind: "Pump Station".to_string(),
            exposure: 78.0,
            vulnerability: 56.0,
            criticality: 92.0,
        },
        Asset {
            name: "North Treatment Plant".to_string(),
            kind: "Treatment Plant".to_string(),
            exposure: 62.0,
            vulnerability: 61.0,
            criticality: 95.0,
        },
        Asset {
            name: "Elevated Storage Tank 3".to_string(),
            kind: "Storage".to_string(),
            exposure: 48.0,
            vulnerability: 41.0,
            criticality: 74.0,
        },
        Asset {
            name: "Interceptor Main Segment A".to_string(),
            kind: "Sewer Main".to_string(),
            exposure: 70.0,
            vulnerability: 68.0,
            criticality: 84.0,
        },
        Asset {
            name: "Backup Generator - South Zone".to_string(),
            kind: "Power Support".to_string(),
            exposure: 40.0,
            vulnerability: 37.0,
            criticality: 81.0,
        },
    ]
});

pub fn resolve_assets(cfg: &Config) -> Vec<Asset> {
    if cfg.assets.is_empty() {
        BUILTIN_ASSETS.clone()
    } else {
        cfg.assets.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_builtin_catalog() {
        let assets = resolve_assets(&Config::default());
        assert_eq!(assets.len(), 5);
        assert_eq!(assets[0].name, "River Intake Pump Station");
        assert_eq!(assets[4].kind, "Power Support");
    }

    #[test]
    fn config_assets_replace_the_catalog() {
        let mut cfg = Config::default();
        cfg.assets = vec![Asset {
            name: "Substation 12".to_string(),
            kind: "Power Support".to_string(),
            exposure: 55.0,
            vulnerability: 48.0,
            criticality: 90.0,
        }];

        let assets = resolve_assets(&cfg);
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "Substation 12");
    }
}
