//! Header and row types produced by a data source.

use std::rc::Rc;

/// Ordered column names taken from the first line of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Rc<[String]>,
}

impl Header {
    /// Creates a header from column names in file order.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Index of the first column called `name`, compared exactly.
    ///
    /// With duplicate names the leftmost column wins.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|column| column == name)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Keys a row of cells by position.
    ///
    /// A row shorter than the header yields a record with only the leading
    /// columns; cells beyond the header's width are dropped.
    #[must_use]
    pub fn record<I, S>(&self, cells: I) -> ServiceRecord
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = cells
            .into_iter()
            .take(self.names.len())
            .map(Into::into)
            .collect();

        ServiceRecord {
            columns: Rc::clone(&self.names),
            values,
        }
    }
}

/// One data row keyed by the header's column names.
///
/// Behaves as an ordered mapping: values follow header order and a
/// column is present only if the row had a cell for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    columns: Rc<[String]>,
    values: Vec<String>,
}

impl ServiceRecord {
    /// Value of `column`, or `None` when the column is unknown or the row is too short.
    ///
    /// Resolves duplicate column names the same way as [`Header::position`].
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.value_at(index)
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Cell values in header order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of columns this record carries a value for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
