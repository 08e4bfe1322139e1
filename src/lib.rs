//! Query and summarize a services-by-country CSV dataset.
//!
//! The binary exposes two read-only commands over one CSV file:
//! `query:country <code>` lists the rows for a country, and
//! `summary:services` counts rows per country. Both read the file through the
//! [`data::DataSource`] trait.

pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod logging;
pub mod query;
pub mod summary;
pub mod table;
