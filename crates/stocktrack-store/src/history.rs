//! # History Log
//!
//! Append-only record of completed sales. Rows are never mutated or deleted
//! by normal operation; the only writer is `append`, which rewrites the
//! whole file with one more row at the end.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info};

use stocktrack_core::SaleRecord;

use crate::error::StoreResult;
use crate::table::TableFile;

// =============================================================================
// History Report
// =============================================================================

/// Result of a history query: matching records plus aggregate totals.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryReport {
    /// Matching records, sorted by timestamp descending (most recent first).
    pub records: Vec<SaleRecord>,

    /// Sum of `quantity` over the returned records.
    pub total_quantity: i64,

    /// Sum of `total_price` over the returned records.
    pub total_amount: f64,
}

// =============================================================================
// History Log
// =============================================================================

/// Log over the sale history table.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    table: TableFile,
}

impl HistoryLog {
    /// Creates a log over the given history table file.
    pub fn new(table: TableFile) -> Self {
        HistoryLog { table }
    }

    /// The underlying table file.
    pub fn table(&self) -> &TableFile {
        &self.table
    }

    /// Appends one sale record.
    pub fn append(&self, record: SaleRecord) -> StoreResult<()> {
        let mut records: Vec<SaleRecord> = self.table.load();
        debug!(item = %record.item_name, quantity = %record.quantity, "Appending sale record");
        records.push(record);
        self.table.save(&records)?;

        info!(total = records.len(), "Sale recorded in history");
        Ok(())
    }

    /// Returns the records inside the date window plus aggregate totals.
    ///
    /// Both bounds are inclusive; `end` covers through the end of that
    /// calendar day (the bound is extended one day forward and compared
    /// exclusively). A missing history file or an empty window yields an
    /// empty list with zero totals, not an error.
    pub fn query(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> HistoryReport {
        let mut records: Vec<SaleRecord> = self.table.load();

        let end_exclusive: Option<NaiveDateTime> = end
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .and_then(|d| d.and_hms_opt(0, 0, 0));

        records.retain(|record| {
            let after_start = start
                .map(|d| record.timestamp.date() >= d)
                .unwrap_or(true);
            let before_end = end_exclusive
                .map(|bound| record.timestamp < bound)
                .unwrap_or(true);
            after_start && before_end
        });

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total_quantity = records.iter().map(|r| r.quantity).sum();
        let total_amount = records.iter().map(|r| r.total_price).sum();

        HistoryReport {
            records,
            total_quantity,
            total_amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stocktrack_core::HISTORY_COLUMNS;

    fn log(dir: &tempfile::TempDir) -> HistoryLog {
        HistoryLog::new(TableFile::new(
            dir.path().join("history.csv"),
            &HISTORY_COLUMNS,
        ))
    }

    fn record(date: (i32, u32, u32), time: (u32, u32, u32), quantity: i64, total: f64) -> SaleRecord {
        SaleRecord {
            timestamp: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(time.0, time.1, time.2)
                .unwrap(),
            item_name: "Dell Laptop".to_string(),
            quantity,
            total_price: total,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_append_then_query_returns_descending() {
        let dir = tempfile::tempdir().unwrap();
        let log = log(&dir);

        log.append(record((2024, 3, 1), (9, 0, 0), 1, 10.0)).unwrap();
        log.append(record((2024, 3, 3), (9, 0, 0), 2, 20.0)).unwrap();
        log.append(record((2024, 3, 2), (9, 0, 0), 3, 30.0)).unwrap();

        let report = log.query(None, None);
        let days: Vec<u32> = report
            .records
            .iter()
            .map(|r| chrono::Datelike::day(&r.timestamp.date()))
            .collect();
        assert_eq!(days, vec![3, 2, 1]);
        assert_eq!(report.total_quantity, 6);
        assert_eq!(report.total_amount, 60.0);
    }

    #[test]
    fn test_end_date_covers_through_that_day() {
        let dir = tempfile::tempdir().unwrap();
        let log = log(&dir);

        log.append(record((2024, 3, 2), (23, 59, 59), 1, 10.0)).unwrap();
        log.append(record((2024, 3, 3), (0, 0, 0), 2, 20.0)).unwrap();

        let report = log.query(None, Some(date(2024, 3, 2)));
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.total_quantity, 1);
    }

    #[test]
    fn test_start_date_is_inclusive() {
        let dir = tempfile::tempdir().unwrap();
        let log = log(&dir);

        log.append(record((2024, 3, 1), (23, 59, 59), 1, 10.0)).unwrap();
        log.append(record((2024, 3, 2), (0, 0, 0), 2, 20.0)).unwrap();

        let report = log.query(Some(date(2024, 3, 2)), None);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].quantity, 2);
    }

    #[test]
    fn test_totals_cover_exactly_the_returned_records() {
        let dir = tempfile::tempdir().unwrap();
        let log = log(&dir);

        log.append(record((2024, 3, 1), (9, 0, 0), 1, 100.0)).unwrap();
        log.append(record((2024, 3, 5), (9, 0, 0), 2, 200.0)).unwrap();
        log.append(record((2024, 3, 9), (9, 0, 0), 4, 400.0)).unwrap();

        let report = log.query(Some(date(2024, 3, 2)), Some(date(2024, 3, 8)));
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.total_quantity, 2);
        assert_eq!(report.total_amount, 200.0);
    }

    #[test]
    fn test_empty_window_yields_zero_totals() {
        let dir = tempfile::tempdir().unwrap();
        let log = log(&dir);

        log.append(record((2024, 3, 1), (9, 0, 0), 1, 100.0)).unwrap();

        let report = log.query(Some(date(2025, 1, 1)), Some(date(2025, 1, 31)));
        assert!(report.records.is_empty());
        assert_eq!(report.total_quantity, 0);
        assert_eq!(report.total_amount, 0.0);
    }

    #[test]
    fn test_missing_file_yields_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let log = log(&dir);

        let report = log.query(None, None);
        assert!(report.records.is_empty());
        assert_eq!(report.total_quantity, 0);
    }
}
