use std::path::PathBuf;

use anyhow::{Context, Result};
use buildings_fmu::Registry;
use buildings_fmu::io::{read_manifest, write_snapshot};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Replays the zone declarations of a model through the building/zone registry.
#[derive(Parser, Debug)]
#[command(name = "buildings-fmu")]
#[command(about = "Check EnergyPlus zone declarations of a Modelica model", long_about = None)]
struct Args {
    /// Path to the JSON zone manifest
    manifest: PathBuf,

    /// Write a JSON snapshot of the resulting registry
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "buildings_fmu=info")]
    log_filter: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let manifest = read_manifest(&args.manifest)?;
    let registry = Registry::from_manifest(manifest)
        .with_context(|| format!("Invalid zone declarations in: {}", args.manifest.display()))?;

    for building in registry.buildings() {
        println!("{}: {}", building.name, building.zone_names().join(", "));
    }
    info!(
        buildings = registry.num_buildings(),
        zones = registry.num_zones(),
        "Registry built"
    );

    if let Some(path) = args.snapshot {
        write_snapshot(&path, &registry)?;
        info!("Snapshot written to {}", path.display());
    }
    Ok(())
}
