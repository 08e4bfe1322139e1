//! Tabular data access shared by every command.
//!
//! A [`DataSource`] yields a [`Table`]: the parsed header plus a lazy stream
//! of records. Commands only ever see this trait, so the CSV file is one
//! implementation among possible others.

mod csv_source;
mod record;

pub use csv_source::CsvSource;
pub use record::{Header, ServiceRecord};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the services dataset.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// The file is missing, cannot be opened, or failed while being read.
    #[error("Cannot read services file: {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file contains no header line.
    #[error("Failed to read headers from services file.")]
    HeaderMissing,

    /// A column required by the command is not in the header.
    #[error("\"{0}\" column not found in services file.")]
    HeaderMissingColumn(String),

    /// The CSV structure could not be parsed.
    #[error("Malformed row in services file: {0}")]
    Malformed(#[source] csv::Error),
}

/// Lazy stream of records; dropping it releases the underlying handle.
pub type Records = Box<dyn Iterator<Item = Result<ServiceRecord, DataSourceError>>>;

/// An opened dataset.
pub struct Table {
    pub header: Header,
    pub records: Records,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Anything that can be opened as a header plus records.
pub trait DataSource {
    /// Opens the dataset and parses its header.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError::FileUnreadable`] when the backing file cannot
    /// be opened or read, and [`DataSourceError::HeaderMissing`] when it has no
    /// header line.
    fn open(&self) -> Result<Table, DataSourceError>;
}
