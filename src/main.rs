use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::debug;

use svcbycountry::cli::args::Args;
use svcbycountry::cli::commands;
use svcbycountry::config::{self, Config, ConfigDir};
use svcbycountry::data::CsvSource;
use svcbycountry::logging;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(args.verbose);

    let config_dir = ConfigDir::resolve(args.config_dir.as_deref());
    let config = match &config_dir {
        Some(dir) => Config::load(&dir.path)?,
        None => Config::default(),
    };
    if let Some(dir) = &config_dir {
        debug!(path = %dir.path.display(), source = %dir.source, "config directory");
    }

    let cwd = std::env::current_dir().wrap_err("Failed to determine working directory")?;
    let data_path = config::resolve_data_path(
        args.data.as_deref(),
        &config,
        config_dir.as_ref().map(|dir| dir.path.as_path()),
        &cwd,
    );

    let source = CsvSource::new(data_path);
    debug!(path = %source.path().display(), "services file");
    let mut stdout = io::stdout().lock();
    let status = commands::run(&args.command, &source, &mut stdout)?;
    stdout.flush()?;

    Ok(status.into())
}
