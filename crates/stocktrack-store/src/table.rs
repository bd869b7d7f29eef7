//! # Tabular Store Adapter
//!
//! Reads and writes a rectangular table (rows of named columns) as a CSV
//! file. Used for both the stock table and the history log.
//!
//! ## Contract
//! - `load` never fails upward: a missing file, an unreadable file, or an
//!   undecodable row degrades to an empty (or partial) result with a logged
//!   warning. Whatever was last written is what is read; nothing more.
//! - `save` rewrites the whole file, header row included, and reports a
//!   locked destination distinctly from other failures.
//! - The raw accessors expose the table as header + string rows for callers
//!   (the cloud mirror) that treat the file as a black box.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Raw Table
// =============================================================================

/// A table as raw cells: one header row plus zero or more data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// An empty table with the given column set.
    pub fn empty(columns: &[&str]) -> Self {
        RawTable {
            header: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

// =============================================================================
// Table File
// =============================================================================

/// One CSV-backed table with a fixed column set.
#[derive(Debug, Clone)]
pub struct TableFile {
    path: PathBuf,
    columns: &'static [&'static str],
}

impl TableFile {
    /// Creates a handle for the table at `path` with the given column set.
    ///
    /// The file itself is not touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>, columns: &'static [&'static str]) -> Self {
        TableFile {
            path: path.into(),
            columns,
        }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column names of this table, in persisted order.
    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// True when the underlying file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    // =========================================================================
    // Typed Access
    // =========================================================================

    /// Loads all rows, decoding each into `T`.
    ///
    /// Never fails upward. A missing file yields an empty vector; a read
    /// failure yields an empty vector with a warning; an undecodable row is
    /// skipped with a warning.
    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Table file missing, treating as empty");
            return Vec::new();
        }

        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Table unreadable, treating as empty");
                return Vec::new();
            }
        };

        let mut rows = Vec::new();
        for result in reader.deserialize::<T>() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Skipping undecodable row");
                }
            }
        }
        rows
    }

    /// Rewrites the whole file with the header row and the given rows.
    pub fn save<T: Serialize>(&self, rows: &[T]) -> StoreResult<()> {
        let mut writer = self.open_writer()?;

        writer
            .write_record(self.columns)
            .map_err(|e| self.write_error(e))?;
        for row in rows {
            writer.serialize(row).map_err(|e| self.write_error(e))?;
        }
        writer
            .flush()
            .map_err(|e| StoreError::from_io(&self.path, &e))?;

        debug!(path = %self.path.display(), rows = rows.len(), "Table saved");
        Ok(())
    }

    // =========================================================================
    // Raw (Black-Box) Access
    // =========================================================================

    /// Reads the table as raw cells, header included.
    ///
    /// Returns `None` when the file is missing or unreadable (with a
    /// warning); undecodable rows are skipped.
    pub fn read_raw(&self) -> Option<RawTable> {
        if !self.path.exists() {
            return None;
        }

        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Table unreadable");
                return None;
            }
        };

        let header = match reader.headers() {
            Ok(record) => record.iter().map(|c| c.to_string()).collect(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Table header unreadable");
                return None;
            }
        };

        let mut rows = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) => rows.push(record.iter().map(|c| c.to_string()).collect()),
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "Skipping unreadable row");
                }
            }
        }

        Some(RawTable { header, rows })
    }

    /// Rewrites the whole file from raw cells.
    pub fn write_raw(&self, table: &RawTable) -> StoreResult<()> {
        let mut writer = self.open_writer()?;

        writer
            .write_record(&table.header)
            .map_err(|e| self.write_error(e))?;
        for row in &table.rows {
            writer.write_record(row).map_err(|e| self.write_error(e))?;
        }
        writer
            .flush()
            .map_err(|e| StoreError::from_io(&self.path, &e))?;

        debug!(path = %self.path.display(), rows = table.rows.len(), "Table replaced");
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn open_writer(&self) -> StoreResult<csv::Writer<File>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::from_io(&self.path, &e))?;
        }

        let file = File::create(&self.path).map_err(|e| StoreError::from_io(&self.path, &e))?;

        // serialize() must not auto-write struct headers: the header row is
        // written explicitly so empty tables still carry one.
        Ok(csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file))
    }

    fn write_error(&self, err: csv::Error) -> StoreError {
        match err.kind() {
            csv::ErrorKind::Io(io) => StoreError::from_io(&self.path, io),
            _ => StoreError::WriteFailed {
                path: self.path.clone(),
                reason: err.to_string(),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stocktrack_core::{Item, STOCK_COLUMNS};

    fn sample_items() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Dell Laptop".to_string(),
                on_hand: 15,
                unit_price: 45000.0,
                reorder_threshold: 5,
            },
            Item {
                id: 2,
                name: "Logitech Mouse".to_string(),
                on_hand: 3,
                unit_price: 1500.0,
                reorder_threshold: 10,
            },
        ]
    }

    fn stock_table(dir: &tempfile::TempDir) -> TableFile {
        TableFile::new(dir.path().join("stock.csv"), &STOCK_COLUMNS)
    }

    #[test]
    fn test_typed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let table = stock_table(&dir);

        table.save(&sample_items()).unwrap();
        let loaded: Vec<Item> = table.load();
        assert_eq!(loaded, sample_items());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = stock_table(&dir);
        let loaded: Vec<Item> = table.load();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_empty_table_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let table = stock_table(&dir);

        table.save::<Item>(&[]).unwrap();

        let contents = std::fs::read_to_string(table.path()).unwrap();
        assert!(contents.starts_with("id,name,on_hand,unit_price,reorder_threshold"));
    }

    #[test]
    fn test_undecodable_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let table = stock_table(&dir);

        let raw = RawTable {
            header: STOCK_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: vec![
                vec!["1".into(), "Dell Laptop".into(), "15".into(), "45000".into(), "5".into()],
                vec!["oops".into(), "Bad Row".into(), "x".into(), "y".into(), "z".into()],
                vec!["2".into(), "Logitech Mouse".into(), "3".into(), "1500".into(), "10".into()],
            ],
        };
        table.write_raw(&raw).unwrap();

        let loaded: Vec<Item> = table.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded[1].id, 2);
    }

    #[test]
    fn test_raw_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let table = stock_table(&dir);

        table.save(&sample_items()).unwrap();
        let raw = table.read_raw().unwrap();
        assert_eq!(raw.header, STOCK_COLUMNS.to_vec());
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[0][1], "Dell Laptop");

        table.write_raw(&raw).unwrap();
        let loaded: Vec<Item> = table.load();
        assert_eq!(loaded, sample_items());
    }

    #[test]
    fn test_read_raw_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let table = stock_table(&dir);
        assert!(table.read_raw().is_none());
    }
}
