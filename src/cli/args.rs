//! Command-line argument definitions.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser, Subcommand};

/// svcbycountry - Query and summarize services by country
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the services CSV file (overrides config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Directory holding config.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Displays services provided by a specific country.
    #[command(name = "query:country", visible_alias = "query")]
    QueryCountry {
        /// The country code to query (case-insensitive)
        #[arg(value_name = "countryCode", value_parser = NonEmptyStringValueParser::new())]
        country_code: String,
    },
    /// Displays a summary of services by country.
    #[command(name = "summary:services", visible_alias = "summary")]
    SummaryServices,
}
