//! Per-country service counts.
//!
//! Buckets use the raw `Country` value, so `FR` and `fr` are counted apart
//! even though a query treats them as the same code.

use std::collections::HashMap;

use tracing::debug;

use crate::constants;
use crate::data::{DataSource, DataSourceError, Table};

/// Row counts per country value, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySummary {
    buckets: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl CountrySummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one row for `country`.
    pub fn record(&mut self, country: &str) {
        if let Some(&slot) = self.index.get(country) {
            self.buckets[slot].1 += 1;
        } else {
            self.index.insert(country.to_string(), self.buckets.len());
            self.buckets.push((country.to_string(), 1));
        }
    }

    #[must_use]
    pub fn count(&self, country: &str) -> Option<usize> {
        self.index.get(country).map(|&slot| self.buckets[slot].1)
    }

    /// Sum over all buckets; equals the number of rows recorded.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct country values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.buckets.iter().map(|(country, n)| (country.as_str(), *n))
    }
}

/// Tallies every row of `source` by its `Country` value.
///
/// A row too short to reach the `Country` cell is counted under `""`.
///
/// # Errors
///
/// Returns [`DataSourceError::HeaderMissingColumn`] when the header has no
/// `Country` column, or any error raised while opening or reading the source.
pub fn summarize(source: &dyn DataSource) -> Result<CountrySummary, DataSourceError> {
    let Table { header, records } = source.open()?;
    let column = header
        .position(constants::COUNTRY_COLUMN)
        .ok_or_else(|| DataSourceError::HeaderMissingColumn(constants::COUNTRY_COLUMN.to_string()))?;

    let mut summary = CountrySummary::new();
    for record in records {
        let record = record?;
        summary.record(record.value_at(column).unwrap_or_default());
    }

    debug!(rows = summary.total(), countries = summary.len(), "summary finished");
    Ok(summary)
}
