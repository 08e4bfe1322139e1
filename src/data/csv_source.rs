//! CSV file backed data source.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use super::{DataSource, DataSourceError, Header, Table};

/// Reads the services dataset from a CSV file on disk.
///
/// The file is opened on every [`DataSource::open`] call and stays open only
/// while the returned records are alive.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvSource {
    fn open(&self) -> Result<Table, DataSourceError> {
        let file = File::open(&self.path).map_err(|source| DataSourceError::FileUnreadable {
            path: self.path.clone(),
            source,
        })?;

        // Rows may be shorter or longer than the header.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let header = match reader.byte_headers() {
            Ok(names) => header_from(names),
            Err(e) => return Err(classify(&self.path, e)),
        };
        if header.is_empty() {
            return Err(DataSourceError::HeaderMissing);
        }
        debug!(path = %self.path.display(), columns = header.len(), "opened services file");

        let keys = header.clone();
        let path = self.path.clone();
        let records = reader.into_byte_records().map(move |row| match row {
            Ok(cells) => Ok(keys.record(decode(&cells))),
            Err(e) => Err(classify(&path, e)),
        });

        Ok(Table {
            header,
            records: Box::new(records),
        })
    }
}

fn header_from(names: &ByteRecord) -> Header {
    Header::new(decode(names))
}

/// Cells are decoded leniently: bytes that are not UTF-8 (Latin-1 exports)
/// become U+FFFD instead of failing the row.
fn decode(cells: &ByteRecord) -> impl Iterator<Item = String> + '_ {
    cells
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).into_owned())
}

fn classify(path: &Path, err: csv::Error) -> DataSourceError {
    if err.is_io_error() {
        DataSourceError::FileUnreadable {
            path: path.to_path_buf(),
            source: io::Error::from(err),
        }
    } else {
        DataSourceError::Malformed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    fn collect(table: Table) -> Vec<Vec<String>> {
        table
            .records
            .map(|r| r.unwrap().values().to_vec())
            .collect()
    }

    #[test]
    fn test_open_parses_header_and_rows() {
        let file = csv_file(b"Ref,Country,Centre,Service\n1,FR,Paris,Support\n2,DE,Berlin,Sales\n");
        let table = CsvSource::new(file.path()).open().unwrap();
        assert_eq!(table.header.names(), ["Ref", "Country", "Centre", "Service"]);

        let rows = collect(table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["1", "FR", "Paris", "Support"]);
        assert_eq!(rows[1], ["2", "DE", "Berlin", "Sales"]);
    }

    #[test]
    fn test_open_missing_file() {
        let source = CsvSource::new("/nonexistent/path/services.csv");
        let err = source.open().unwrap_err();
        assert!(matches!(err, DataSourceError::FileUnreadable { .. }));
        assert!(err.to_string().contains("Cannot read services file"));
    }

    #[test]
    fn test_open_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvSource::new(dir.path()).open().unwrap_err();
        assert!(matches!(err, DataSourceError::FileUnreadable { .. }));
    }

    #[test]
    fn test_open_empty_file_has_no_header() {
        let file = csv_file(b"");
        let err = CsvSource::new(file.path()).open().unwrap_err();
        assert!(matches!(err, DataSourceError::HeaderMissing));
    }

    #[test]
    fn test_quoted_fields_and_short_rows() {
        let file = csv_file(
            b"Ref,Country,Centre,Service\n1,FR,\"Paris, La Defense\",\"Support \"\"L2\"\"\"\n2,DE\n",
        );
        let table = CsvSource::new(file.path()).open().unwrap();
        let records: Vec<_> = table.records.map(Result::unwrap).collect();

        assert_eq!(records[0].get("Centre"), Some("Paris, La Defense"));
        assert_eq!(records[0].get("Service"), Some("Support \"L2\""));
        assert_eq!(records[1].get("Country"), Some("DE"));
        assert_eq!(records[1].get("Centre"), None);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let file = csv_file(b"Ref,Country\n1,FR\n\n2,DE\n");
        let rows = collect(CsvSource::new(file.path()).open().unwrap());
        assert_eq!(rows, vec![vec!["1", "FR"], vec!["2", "DE"]]);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let file = csv_file(b"\xEF\xBB\xBFCountry,Service\nFR,Support\n");
        let table = CsvSource::new(file.path()).open().unwrap();
        assert_eq!(table.header.position("Country"), Some(0));
    }

    #[test]
    fn test_latin1_cell_is_decoded_lossily() {
        let file = csv_file(b"Ref,Country,Centre\n1,FR,Paris\n2,CH,Z\xFCrich\n");
        let rows = collect(CsvSource::new(file.path()).open().unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ["2", "CH", "Z\u{FFFD}rich"]);
    }
}
