use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand};
use liveloc_application::prelude::*;
use liveloc_core::entities::{AcquisitionStatus, Actor, Coordinate, Role};
use strum::IntoEnumIterator;

use crate::{
    config::Config,
    gateways::{self, PositionGw},
};

#[derive(Parser, Debug)]
#[command(name = "liveloc", version)]
#[command(about = "Acquire the current position and report it to the marketplace backend")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short = 'c', global = true)]
    config_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single acquire-and-report cycle
    Report(ReportArgs),
    /// Validate and print the effective configuration
    CheckConfig,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Role of the reporting user, e.g. "maid" or "home_nurse"
    #[arg(long)]
    role: String,
    /// Latitude of a manually entered position
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude of a manually entered position
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
    /// Accuracy of a manually entered position in meters
    #[arg(long, requires = "lat")]
    accuracy: Option<f64>,
    /// Read the position from a gpsd daemon (host:port)
    #[arg(long, conflicts_with = "lat", num_args = 0..=1, default_missing_value = "")]
    gpsd: Option<String>,
    #[arg(long)]
    no_reverse_geocode: bool,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config_file.as_ref())?;
    match cli.command {
        Command::Report(args) => report(cfg, args).await,
        Command::CheckConfig => {
            println!("{cfg:#?}");
            Ok(())
        }
    }
}

fn position_gateway(cfg: &Config, args: &ReportArgs) -> Result<PositionGw> {
    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            let mut pos = Coordinate::try_from_lat_lng_deg(lat, lng)
                .ok_or_else(|| anyhow!("Invalid position: {lat},{lng}"))?;
            if let Some(accuracy) = args.accuracy {
                pos = pos.with_accuracy(accuracy);
            }
            Ok(PositionGw::fixed(pos))
        }
        _ => {
            let addr = args
                .gpsd
                .as_deref()
                .filter(|addr| !addr.is_empty())
                .unwrap_or(&cfg.position.gpsd_address);
            log::debug!("Reading position from gpsd at {addr}");
            Ok(PositionGw::gpsd(addr))
        }
    }
}

async fn report(cfg: Config, args: ReportArgs) -> Result<()> {
    let actor = Actor::new(args.role.as_str());
    if actor.role().is_none() {
        log::warn!(
            "Unknown role '{}' (expected one of: {})",
            actor.user_type,
            Role::iter()
                .map(|role| role.as_ref().to_owned())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    let position = position_gateway(&cfg, &args)?;
    let geocoding = if args.no_reverse_geocode {
        None
    } else {
        gateways::geocoding_gateway(&cfg)?
    };
    let mut options = cfg.cycle_options();
    options.reverse_geocoding &= geocoding.is_some();
    let reporter = gateways::backend_api(&cfg);

    let mut updater = LiveLocationUpdater::new(position, geocoding, reporter, options);
    if let Some(cycle) = updater.set_actor(Some(actor)) {
        cycle.await?;
    }
    let LocationState {
        status,
        coords,
        place_name,
        error_message,
        ..
    } = updater.shutdown();
    match status {
        AcquisitionStatus::Ok => {
            if let Some(coords) = coords {
                println!("{coords}");
            }
            if let Some(place_name) = place_name {
                println!("{place_name}");
            }
            Ok(())
        }
        AcquisitionStatus::Error => {
            bail!(error_message.unwrap_or_else(|| "Unable to update your location".to_string()))
        }
        AcquisitionStatus::Idle | AcquisitionStatus::Updating => {
            bail!("Location cycle ended unexpectedly in state '{status}'")
        }
    }
}
