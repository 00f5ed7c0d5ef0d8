use crate::config::AlertBand;
use crate::core::model::{HazardType, IntensityLevel};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "riskgrid",
    version,
    about = "Hazard risk scoring for infrastructure asset portfolios"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Assess(AssessArgs),
    Init(InitArgs),
    Assets {
        #[command(subcommand)]
        command: AssetsSubcommand,
    },
    Hazards {
        #[command(subcommand)]
        command: HazardsSubcommand,
    },
}

#[derive(Debug, Args, Clone)]
pub struct AssessArgs {
    #[arg(long, value_enum)]
    pub hazard: Option<HazardType>,
    #[arg(long = "intensity", value_enum, value_delimiter = ',')]
    pub intensities: Option<Vec<IntensityLevel>>,
    #[arg(long)]
    pub exposure_weight: Option<f64>,
    #[arg(long)]
    pub vulnerability_weight: Option<f64>,
    #[arg(long)]
    pub criticality_weight: Option<f64>,
    #[arg(long, value_enum)]
    pub alert_band: Option<AlertBand>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ListArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum AssetsSubcommand {
    List(ListArgs),
}

#[derive(Debug, Subcommand)]
pub enum HazardsSubcommand {
    List,
}
