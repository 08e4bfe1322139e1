//! Command handlers: run a query or summary and write the result.
//!
//! Data errors end here. They become one `Error:` line on the output and a
//! failure status; only writer failures bubble up to the caller.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::warn;

use crate::cli::args::Commands;
use crate::constants;
use crate::data::{DataSource, DataSourceError};
use crate::query;
use crate::summary;
use crate::table;

/// Outcome of a command, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => ExitCode::SUCCESS,
            CommandStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Dispatches a parsed subcommand.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn run(
    command: &Commands,
    source: &dyn DataSource,
    out: &mut dyn Write,
) -> io::Result<CommandStatus> {
    match command {
        Commands::QueryCountry { country_code } => query_country(source, country_code, out),
        Commands::SummaryServices => summary_services(source, out),
    }
}

/// `query:country` - prints every service row for `country_code`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn query_country(
    source: &dyn DataSource,
    country_code: &str,
    out: &mut dyn Write,
) -> io::Result<CommandStatus> {
    let result = match query::find_services(source, country_code) {
        Ok(result) => result,
        Err(e) => return report_error(out, &e),
    };

    if result.is_empty() {
        writeln!(out, "{}{}", constants::CLI_MSG_NO_SERVICES, result.country_code)?;
        return Ok(CommandStatus::Success);
    }

    let mut rows = table::with_titles(result.header.names());
    for record in &result.records {
        table::push_row(&mut rows, record.values());
    }
    table::render(&rows, out)?;

    Ok(CommandStatus::Success)
}

/// `summary:services` - prints the number of services per country.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn summary_services(source: &dyn DataSource, out: &mut dyn Write) -> io::Result<CommandStatus> {
    let summary = match summary::summarize(source) {
        Ok(summary) => summary,
        Err(e) => return report_error(out, &e),
    };

    if summary.is_empty() {
        writeln!(out, "{}", constants::CLI_MSG_NO_DATA)?;
        return Ok(CommandStatus::Success);
    }

    let mut rows = table::with_titles([constants::COUNTRY_COLUMN, constants::TOTAL_SERVICES_COLUMN]);
    for (country, count) in summary.iter() {
        table::push_row(&mut rows, [country.to_string(), count.to_string()]);
    }
    table::render(&rows, out)?;

    Ok(CommandStatus::Success)
}

fn report_error(out: &mut dyn Write, err: &DataSourceError) -> io::Result<CommandStatus> {
    match err {
        DataSourceError::FileUnreadable { source, .. } => warn!(%source, "{err}"),
        _ => warn!("{err}"),
    }
    writeln!(out, "{}{err}", constants::CLI_MSG_ERROR)?;
    Ok(CommandStatus::Failure)
}
