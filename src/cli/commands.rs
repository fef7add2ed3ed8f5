use clap::{Parser, Subcommand};
use std::ffi::OsString;

#[derive(Parser)]
#[command(
    name = "aya",
    version,
    about = "Current weather and a 24 hour temperature graph for any city"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get the weather for a city
    ///
    /// Examples: `aya weather criciuma`, `aya weather san-diego`,
    /// `aya weather london --graph`. Without a city, the one derived from
    /// your public IP is used.
    Weather {
        /// City name; hyphens and accents are fine
        city: Option<OsString>,
        /// Plot the temperature forecast for the next 24 hours
        #[arg(short, long)]
        graph: bool,
    },
    /// Reset the config file (default city, last IP, cached locations)
    #[command(alias = "clearConfig")]
    ClearConfig,
}
