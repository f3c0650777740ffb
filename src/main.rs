//! Command-line frontend for the autoclock configuration core.
//!
//! Derives canonical names and render-service URLs for a clock
//! configuration given on the command line, without going through the
//! web configurator.

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use autoclock::config::{ClockConfig, Settings};
use autoclock::render::RenderEndpoints;
use autoclock::tracing_config;

#[derive(Parser)]
#[command(name = "autoclock")]
#[command(about = "Derive canonical names and render URLs for clock configurations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical name for a configuration
    Name {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the full-clock render URL
    ClockUrl {
        #[command(flatten)]
        config: ConfigArgs,
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
    /// Print the dial preview render URL
    DialUrl {
        #[command(flatten)]
        config: ConfigArgs,
        #[command(flatten)]
        endpoint: EndpointArgs,
    },
}

/// Field flags shared by every subcommand. Style values are the wire
/// names (e.g. ARCS, CURVED_MATCHING_WHEEL, LINES_ARC).
#[derive(Args)]
struct ConfigArgs {
    /// Gear style
    #[arg(long, default_value = "ARCS")]
    gear_style: String,

    /// Anchor style
    #[arg(long, default_value = "STRAIGHT")]
    anchor_style: String,

    /// Pendulum period in seconds
    #[arg(long, default_value_t = 2.0)]
    pendulum_period_s: f64,

    /// Run duration between windings, in days
    #[arg(long, default_value_t = 8)]
    days: u32,

    /// Put the second hand on the centre arbor
    #[arg(long)]
    centred_second_hand: bool,

    /// Give the clock a dial
    #[arg(long)]
    has_dial: bool,

    /// Dial style
    #[arg(long, default_value = "LINES_ARC")]
    dial_style: String,

    /// Seconds sub-dial style
    #[arg(long, default_value = "LINES_ARC")]
    dial_seconds_style: String,

    /// Hand style
    #[arg(long, default_value = "SIMPLE_ROUND")]
    hand_style: String,

    /// Print the hands without a contrasting outline
    #[arg(long)]
    no_hand_outline: bool,
}

impl ConfigArgs {
    fn to_config(&self) -> Result<ClockConfig, Box<dyn Error>> {
        Ok(ClockConfig {
            gear_style: self.gear_style.parse()?,
            anchor_style: self.anchor_style.parse()?,
            pendulum_period_s: self.pendulum_period_s,
            days: self.days,
            centred_second_hand: self.centred_second_hand,
            has_dial: self.has_dial,
            dial_style: self.dial_style.parse()?,
            dial_seconds_style: self.dial_seconds_style.parse()?,
            hand_style: self.hand_style.parse()?,
            hand_has_outline: !self.no_hand_outline,
            ..ClockConfig::default()
        })
    }
}

/// Where to find the rendering service.
#[derive(Args)]
struct EndpointArgs {
    /// Base URL of the rendering service (overrides the settings file)
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl EndpointArgs {
    fn endpoints(&self) -> Result<RenderEndpoints, Box<dyn Error>> {
        if let Some(base_url) = &self.base_url {
            return Ok(RenderEndpoints::new(base_url.clone()));
        }

        let settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        Ok(RenderEndpoints::from(settings.render))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_config::init_cli_mode()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Name { config } => {
            println!("{}", config.to_config()?.name());
        }
        Commands::ClockUrl { config, endpoint } => {
            let endpoints = endpoint.endpoints()?;
            println!("{}", endpoints.clock_url(&config.to_config()?));
        }
        Commands::DialUrl { config, endpoint } => {
            let endpoints = endpoint.endpoints()?;
            println!("{}", endpoints.dial_url(&config.to_config()?));
        }
    }

    Ok(())
}
