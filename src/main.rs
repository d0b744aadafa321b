use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;

use srte_ls::config_loader::{self, CliOverrides};
use srte_ls::{run_local_search, synth, Config};

/// Link-guided local search for segment-routing traffic engineering
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the synthetic node count
    #[arg(long)]
    nodes: Option<usize>,

    /// Override the synthetic demand count
    #[arg(long)]
    demands: Option<usize>,

    /// Override the number of search iterations
    #[arg(long)]
    iterations: Option<usize>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the run report as JSON to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let mut config = match &args.config {
        Some(path) => config_loader::load_config(path)?,
        None => Config::default(),
    };
    let overrides = CliOverrides {
        nodes: args.nodes,
        demands: args.demands,
        iterations: args.iterations,
        seed: args.seed,
    };
    config_loader::apply_overrides(&mut config, &overrides)?;

    info!("Generating synthetic instance with seed {}", config.run.seed);
    let instance = synth::generate(&config.synth, config.run.seed);
    info!("Instance: {}", instance.summary());

    let mut solver = instance
        .build_solver(&config.solver)
        .wrap_err("Failed to build solver from instance")?;

    let report = run_local_search(&mut solver, &config.run).wrap_err("Local search failed")?;

    info!(
        "Max utilization {:.4} -> {:.4} ({} moves, most utilized edge {})",
        report.initial_max_utilization,
        report.final_max_utilization,
        report.moves_applied,
        report.most_utilized_edge
    );

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)
            .wrap_err_with(|| format!("Failed to write report '{}'", path.display()))?;
        info!("Wrote run report to {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["srte-ls", "--nodes", "20", "--seed", "4"]);

        assert_eq!(args.config, None);
        assert_eq!(args.nodes, Some(20));
        assert_eq!(args.seed, Some(4));
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_report_and_config_args() {
        let args = Args::parse_from([
            "srte-ls",
            "--config", "srte.yaml",
            "--report", "out.json",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("srte.yaml")));
        assert_eq!(args.report, Some(PathBuf::from("out.json")));
    }
}
