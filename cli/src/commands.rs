pub mod estimate;
pub mod form;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};
use footprintr_common::model::inputs::LpgUse;

#[derive(Parser)]
#[command(name = "footprintr")]
#[command(about = "Estimate your household's yearly carbon footprint.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Skip the emissions chart
    #[arg(long, global = true)]
    pub no_chart: bool,

    /// Reduce decorative output (repeat for less)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the emission factors and assumptions behind the estimate
    #[command(alias = "i")]
    Info,
    /// Fill in the household form interactively
    #[command(alias = "f")]
    Form,
    /// Compute an estimate from flags
    #[command(alias = "e")]
    Estimate {
        /// Monthly electricity use (kWh)
        #[arg(long, default_value_t = 0.0)]
        electricity: f64,

        /// Weekly travel distance by car/bus/bike (km)
        #[arg(long, default_value_t = 0.0)]
        travel: f64,

        /// Number of flights in the last 3 months
        #[arg(long, default_value_t = 0)]
        flights: u32,

        /// Whether the household cooks with LPG (yes/no)
        #[arg(long, default_value = "no")]
        lpg: LpgUse,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
