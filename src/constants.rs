//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout svcbycountry,
//! including file names, column titles, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml), also the config subdirectory name.
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

// === Path Configuration ===

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Services file looked up in the working directory when nothing else is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "services.csv";

// === Dataset Layout ===

/// Column queries match on and summaries group by.
pub const COUNTRY_COLUMN: &str = "Country";
/// Second column title of the summary table.
pub const TOTAL_SERVICES_COLUMN: &str = "Total Services";

// === Messages: CLI Output ===

/// Prefix for every fatal line written by a command.
pub const CLI_MSG_ERROR: &str = "Error: ";
/// Followed by the upper-cased country code.
pub const CLI_MSG_NO_SERVICES: &str = "No services found for country code: ";
pub const CLI_MSG_NO_DATA: &str = "No data found in the services file.";

// === Error Messages ===

pub const ERR_CONFIG_READ: &str = "Failed to read configuration file";
pub const ERR_CONFIG_PARSE: &str = "Invalid configuration file";
