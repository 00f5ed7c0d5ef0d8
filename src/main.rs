mod catalog;
mod cli;
mod config;
mod core;

use anyhow::Result;
use clap::Parser;
use cli::{AssessArgs, Cli, Commands, ListArgs};
use core::AssessmentRequest;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess(args) => run_assess(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `riskgrid init`; writing ./riskgrid.toml"
                );
            }

            let path = std::env::current_dir()?.join("riskgrid.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
        Commands::Assets { command } => match command {
            cli::AssetsSubcommand::List(args) => run_assets_list(args),
        },
        Commands::Hazards { command } => match command {
            cli::HazardsSubcommand::List => {
                core::report::print_hazard_tables();
                Ok(0)
            }
        },
    }
}

fn run_assess(args: AssessArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let mut cfg = loaded.config;

    if let Some(band) = args.alert_band {
        cfg.general.alert_band = band;
    }

    let mut weights = cfg.weights;
    if let Some(value) = args.exposure_weight {
        weights.exposure = value;
    }
    if let Some(value) = args.vulnerability_weight {
        weights.vulnerability = value;
    }
    if let Some(value) = args.criticality_weight {
        weights.criticality = value;
    }

    let hazard = args.hazard.unwrap_or(cfg.scenario.hazard);
    let mut intensities = args
        .intensities
        .unwrap_or_else(|| cfg.scenario.intensities.clone());
    core::dedupe_intensities(&mut intensities);

    if intensities.is_empty() {
        core::report::print_no_intensities();
        return Ok(0);
    }

    let assets = catalog::resolve_assets(&cfg);
    let request = AssessmentRequest {
        hazard,
        intensities,
        weights,
    };
    let report = core::run_assessment(&request, &assets, &cfg);

    let output_json = args.json || cfg.general.json;
    if output_json {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn run_assets_list(args: ListArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let assets = catalog::resolve_assets(&loaded.config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assets)?);
    } else {
        core::report::print_asset_catalog(&assets);
    }

    Ok(0)
}
