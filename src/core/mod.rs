pub mod model;
pub mod report;
pub mod score;
pub mod weights;

use crate::config::Config;
use crate::core::model::{Asset, HazardType, IntensityLevel};
use crate::core::report::{AssessmentReport, AssetRow, ConfigSummary, RiskCell};
use crate::core::score::RiskBand;
use crate::core::weights::WeightInput;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct AssessmentRequest {
    pub hazard: HazardType,
    pub intensities: Vec<IntensityLevel>,
    pub weights: WeightInput,
}

pub fn run_assessment(
    request: &AssessmentRequest,
    assets: &[Asset],
    cfg: &Config,
) -> AssessmentReport {
    let normalized = weights::normalize(&request.weights);

    let rows: Vec<AssetRow> = assets
        .iter()
        .map(|asset| AssetRow {
            asset: asset.name.clone(),
            kind: asset.kind.clone(),
            criticality: asset.criticality,
            cells: request
                .intensities
                .iter()
                .map(|&intensity| {
                    let score = score::score_asset(asset, request.hazard, intensity, &normalized);
                    RiskCell {
                        intensity,
                        score,
                        band: RiskBand::for_score(score),
                    }
                })
                .collect(),
        })
        .collect();

    let exit = report::evaluate_exit(&rows, cfg);

    AssessmentReport {
        hazard: request.hazard,
        intensities: request.intensities.clone(),
        weights: normalized,
        rows,
        config: ConfigSummary {
            alert_band: cfg.general.alert_band,
        },
        exit,
    }
}

pub fn dedupe_intensities(intensities: &mut Vec<IntensityLevel>) {
    let mut seen = HashSet::new();
    intensities.retain(|intensity| seen.insert(*intensity));
}
