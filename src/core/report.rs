use crate::config::{AlertBand, Config};
use crate::core::model::{Asset, HazardType, IntensityLevel};
use crate::core::score::RiskBand;
use crate::core::weights::NormalizedWeights;
use colored::Colorize;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiskCell {
    pub intensity: IntensityLevel,
    pub score: f64,
    pub band: RiskBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetRow {
    pub asset: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub criticality: f64,
    pub cells: Vec<RiskCell>,
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub alert_band: AlertBand,
}

#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub hazard: HazardType,
    pub intensities: Vec<IntensityLevel>,
    pub weights: NormalizedWeights,
    pub rows: Vec<AssetRow>,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

impl AssessmentReport {
    pub fn worst_band(&self) -> Option<RiskBand> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().map(|cell| cell.band))
            .max()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub hazard: HazardType,
    pub intensities: Vec<IntensityLevel>,
    pub weights: NormalizedWeights,
    pub rows: Vec<AssetRow>,
    pub config: ConfigSummary,
}

impl From<&AssessmentReport> for JsonReport {
    fn from(report: &AssessmentReport) -> Self {
        Self {
            hazard: report.hazard,
            intensities: report.intensities.clone(),
            weights: report.weights,
            rows: report.rows.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(rows: &[AssetRow], cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if cfg.general.alert_band != AlertBand::None {
        for row in rows {
            for cell in &row.cells {
                if cell.band.meets_alert(cfg.general.alert_band) {
                    reasons.push(format!(
                        "{} scored {:.1} ({}) at {} intensity",
                        row.asset,
                        cell.score,
                        cell.band.as_str(),
                        cell.intensity
                    ));
                }
            }
        }
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &AssessmentReport) {
    println!(
        "Hazard Assessment: {} ({} asset{})",
        report.hazard.as_str().bold(),
        report.rows.len(),
        if report.rows.len() == 1 { "" } else { "s" }
    );
    println!(
        "Weights: exposure {:.2} | vulnerability {:.2} | criticality {:.2}",
        report.weights.exposure, report.weights.vulnerability, report.weights.criticality
    );
    if let Some(worst) = report.worst_band() {
        println!("Highest band: {}", worst.colored());
    }

    println!();
    println!("{}", assessment_table(report));

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: ALERT ({})", report.exit.reason_line());
    }
}

pub fn print_no_intensities() {
    println!("Select at least one intensity level to compare risk.");
}

pub fn print_asset_catalog(assets: &[Asset]) {
    let mut table = Table::new();
    table.set_header(vec![
        "Asset",
        "Type",
        "Exposure",
        "Vulnerability",
        "Criticality",
    ]);

    for asset in assets {
        table.add_row(vec![
            Cell::new(&asset.name),
            Cell::new(&asset.kind),
            numeric_cell(format!("{}", asset.exposure)),
            numeric_cell(format!("{}", asset.vulnerability)),
            numeric_cell(format!("{}", asset.criticality)),
        ]);
    }

    println!("{}", table);
}

pub fn print_hazard_tables() {
    let mut hazards = Table::new();
    hazards.set_header(vec!["Hazard", "Exposure Modifier", "Vulnerability Modifier"]);
    for hazard in HazardType::ALL {
        let modifiers = hazard.modifiers();
        hazards.add_row(vec![
            Cell::new(hazard.as_str()),
            numeric_cell(format!("{:.2}", modifiers.exposure)),
            numeric_cell(format!("{:.2}", modifiers.vulnerability)),
        ]);
    }

    let mut intensities = Table::new();
    intensities.set_header(vec!["Intensity", "Factor"]);
    for intensity in IntensityLevel::ALL {
        intensities.add_row(vec![
            Cell::new(intensity.as_str()),
            numeric_cell(format!("{:.2}", intensity.factor())),
        ]);
    }

    println!("{}", hazards);
    println!();
    println!("{}", intensities);
}

fn assessment_table(report: &AssessmentReport) -> Table {
    let mut table = Table::new();

    let mut header = vec![
        Cell::new("Asset"),
        Cell::new("Type"),
        Cell::new("Criticality"),
    ];
    for intensity in &report.intensities {
        header.push(Cell::new(format!("{} Risk", intensity.title())));
    }
    table.set_header(header);

    for row in &report.rows {
        let mut cells = vec![
            Cell::new(&row.asset),
            Cell::new(&row.kind),
            numeric_cell(format!("{}", row.criticality)),
        ];
        for cell in &row.cells {
            cells.push(score_cell(cell));
        }
        table.add_row(cells);
    }

    table
}

fn score_cell(cell: &RiskCell) -> Cell {
    let text = format!("{:.1}", cell.score);
    let colored = match cell.band {
        RiskBand::Low => Cell::new(text).fg(Color::Green),
        RiskBand::Moderate => Cell::new(text).fg(Color::Yellow),
        RiskBand::High => Cell::new(text).fg(Color::Red),
        RiskBand::Severe => Cell::new(text).fg(Color::Red).add_attribute(Attribute::Bold),
    };
    colored.set_alignment(CellAlignment::Right)
}

fn numeric_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}
