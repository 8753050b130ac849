use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dashboard_core::{
    Config, CurrentPanel, DerivedMetrics, DetailsPanel, ForecastPayload, GeoCoordinate,
    HourlyPanel, LatestReading, LocationPanel, ObservationSample, placeholder::placeholder_source,
};
use inquire::{CustomType, Text};
use std::{fs, io::Read};
use tracing::{debug, info};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default device, station location and placeholder seed.
    Configure,

    /// Show current conditions, details and location for a latest reading.
    Show(ShowArgs),

    /// Show the hourly forecast from a prediction payload.
    Hourly {
        /// JSON file with the prediction payload, or "-" for stdin.
        #[arg(long, default_value = "-")]
        input: String,
    },
}

#[derive(Debug, Default, Args)]
pub struct ShowArgs {
    /// JSON file with the latest reading, or "-" for stdin.
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Station latitude; overrides the configured location.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Station longitude; overrides the configured location.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Device id for the location badge.
    #[arg(long)]
    pub device: Option<String>,

    /// Seed for wind direction, air quality and missing pressure/visibility.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show(args) => {
                let cfg = Config::load()?;
                let input = read_input(&args.input)?;
                let reading: Option<LatestReading> =
                    serde_json::from_str(&input).context("Failed to parse latest reading JSON")?;

                println!("{}", render_show(&cfg, &args, reading)?);
            }
            Command::Hourly { input } => {
                let payload: ForecastPayload = serde_json::from_str(&read_input(&input)?)
                    .context("Failed to parse forecast payload JSON")?;

                println!("{}", render_hourly(&payload)?);
            }
        }

        Ok(())
    }
}

/// Current, details and location panels separated by blank lines.
///
/// Flags win over the reading, and the reading over the config: the device
/// id comes from `--device`, then the reading, then `default_device`; the
/// placeholder seed from `--seed`, then `[placeholders] seed`.
pub fn render_show(
    cfg: &Config,
    args: &ShowArgs,
    reading: Option<LatestReading>,
) -> Result<String> {
    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon)?),
        _ => cfg.default_location()?,
    };

    let device = args
        .device
        .clone()
        .or_else(|| reading.as_ref().map(|r| r.device_id.clone()))
        .or_else(|| cfg.default_device.clone());

    let sample = match reading {
        Some(reading) => {
            debug!(
                device = %reading.device_id,
                ts = %reading.ts,
                "read latest reading"
            );
            reading.into_sample()
        }
        None => {
            info!("no latest reading, showing an empty dashboard");
            ObservationSample::default()
        }
    };

    let mut placeholders = match args.seed {
        Some(seed) => placeholder_source(Some(seed)),
        None => cfg.placeholder_source(),
    };

    let derived = DerivedMetrics::from_sample(&sample);
    let current = CurrentPanel::build(&sample, &derived);
    let details = DetailsPanel::build(&sample, &derived, placeholders.as_mut());
    let location = LocationPanel::build(location, device.as_deref());

    Ok(format!("{current}\n\n{details}\n\n{location}"))
}

pub fn render_hourly(payload: &ForecastPayload) -> Result<String> {
    info!(
        device = %payload.device_id,
        model_version = %payload.model_version,
        "read forecast payload"
    );

    let points = payload.hourly_points()?;
    Ok(HourlyPanel::build(&points).to_string())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(input).with_context(|| format!("Failed to read input file: {input}"))
}

fn configure() -> Result<()> {
    let mut cfg = Config::load()?;

    let device = Text::new("Default device id:")
        .with_default(cfg.default_device.as_deref().unwrap_or(""))
        .with_help_message("Shown on the location card; leave empty for none")
        .prompt()?;
    cfg.set_default_device(&device);

    let latitude = CustomType::<f64>::new("Station latitude:")
        .with_help_message("-90 to 90, Esc to keep the current location")
        .prompt_skippable()?;

    if let Some(latitude) = latitude {
        let longitude = CustomType::<f64>::new("Station longitude:")
            .with_help_message("-180 to 180")
            .prompt()?;
        cfg.set_location(GeoCoordinate::new(latitude, longitude)?);
    }

    let seed = CustomType::<u64>::new("Placeholder seed:")
        .with_help_message("Fixes wind direction and air quality between runs; Esc for random")
        .prompt_skippable()?;
    cfg.set_seed(seed);

    cfg.save()?;

    let path = Config::config_file_path()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
