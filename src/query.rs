//! Country lookup: every service row for one country code.
//!
//! Matching is case-insensitive on the `Country` column. A dataset without
//! that column is not rejected here; it simply never matches.

use tracing::debug;

use crate::constants;
use crate::data::{DataSource, DataSourceError, Header, ServiceRecord, Table};

/// Rows matching a country code, in file order.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Upper-cased code the rows were matched against.
    pub country_code: String,
    pub header: Header,
    pub records: Vec<ServiceRecord>,
}

impl QueryResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalizes a country code for comparison.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.to_ascii_uppercase()
}

/// Scans `source` for rows whose `Country` equals `country_code`, ignoring case.
///
/// # Errors
///
/// Returns a [`DataSourceError`] if the dataset cannot be opened or a row
/// cannot be read. No partial result is returned.
pub fn find_services(
    source: &dyn DataSource,
    country_code: &str,
) -> Result<QueryResult, DataSourceError> {
    let wanted = normalize_code(country_code);
    let Table { header, records } = source.open()?;

    let mut matches = Vec::new();
    let mut scanned = 0usize;
    for record in records {
        let record = record?;
        scanned += 1;
        let hit = record
            .get(constants::COUNTRY_COLUMN)
            .is_some_and(|country| normalize_code(country) == wanted);
        if hit {
            matches.push(record);
        }
    }

    debug!(country = %wanted, scanned, matched = matches.len(), "country query finished");

    Ok(QueryResult {
        country_code: wanted,
        header,
        records: matches,
    })
}
