use crate::adapters::storage::migrations;
use crate::domain::model::{CrawlRecord, Unit};
use crate::domain::ports::UnitSink;
use crate::utils::error::Result;
use rusqlite::{params, Connection, ToSql};
use std::path::Path;

const COLUMNS: [&str; 10] = [
    "crawl_date",
    "name",
    "bed_min",
    "bed_max",
    "bath_min",
    "bath_max",
    "sqft_min",
    "sqft_max",
    "price_min",
    "price_max",
];

/// SQLite 上的 `units` 資料表，整個執行期間共用同一個連線
pub struct SqliteSink {
    conn: Connection,
}

impl SqliteSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&mut self) -> Result<usize> {
        migrations::apply_migrations(&mut self.conn)
    }

    /// 讀回某次執行寫入的紀錄（依寫入順序）
    pub fn records_for_run(&self, crawl_date: &str) -> Result<Vec<CrawlRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT crawl_date, name, bed_min, bed_max, bath_min, bath_max, sqft_min, sqft_max, price_min, price_max \
             FROM units WHERE crawl_date = ? ORDER BY id",
        )?;

        let rows = stmt.query_map(params![crawl_date], |row| {
            Ok(CrawlRecord {
                crawl_date: row.get(0)?,
                name: row.get(1)?,
                unit: Unit {
                    bedroom_min: row.get(2)?,
                    bedroom_max: row.get(3)?,
                    bathroom_min: row.get(4)?,
                    bathroom_max: row.get(5)?,
                    sqft_min: row.get(6)?,
                    sqft_max: row.get(7)?,
                    price_min: row.get(8)?,
                    price_max: row.get(9)?,
                },
            })
        })?;

        let mut records = Vec::new();
        for r in rows {
            records.push(r?);
        }
        Ok(records)
    }
}

/// `INSERT INTO units (...) VALUES (?, ...), (?, ...)` for `rows` rows.
fn insert_statement(rows: usize) -> String {
    let placeholders = format!("({})", vec!["?"; COLUMNS.len()].join(", "));
    format!(
        "INSERT INTO units ({}) VALUES {}",
        COLUMNS.join(", "),
        vec![placeholders.as_str(); rows].join(", ")
    )
}

impl UnitSink for SqliteSink {
    fn append(&self, records: &[CrawlRecord]) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        // 單一 INSERT 敘述，失敗時由 SQLite 保證整批不寫入
        let sql = insert_statement(records.len());
        let mut values: Vec<&dyn ToSql> = Vec::with_capacity(records.len() * COLUMNS.len());
        for record in records {
            let unit = &record.unit;
            values.extend_from_slice(&[
                &record.crawl_date as &dyn ToSql,
                &record.name,
                &unit.bedroom_min,
                &unit.bedroom_max,
                &unit.bathroom_min,
                &unit.bathroom_max,
                &unit.sqft_min,
                &unit.sqft_max,
                &unit.price_min,
                &unit.price_max,
            ]);
        }

        let inserted = self.conn.execute(&sql, values.as_slice())?;
        tracing::debug!("Inserted {} rows into units", inserted);
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn migrated_sink() -> SqliteSink {
        let mut sink = SqliteSink::open_in_memory().unwrap();
        sink.migrate().unwrap();
        sink
    }

    #[test]
    fn test_insert_statement_shape() {
        let sql = insert_statement(2);
        assert!(sql.starts_with("INSERT INTO units (crawl_date, name, bed_min"));
        assert_eq!(sql.matches('?').count(), 20);
        assert!(sql.ends_with("?), (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"));
    }

    #[test]
    fn test_append_and_read_back() {
        let sink = migrated_sink();
        let date = "2024-05-01T06:00:00Z";
        let records = vec![
            CrawlRecord::new(date, "Kiara", Unit::fixed(1.0, 1.0, 650.0, 2100.0)),
            CrawlRecord::new(
                date,
                "Kiara",
                Unit {
                    bedroom_min: 2.0,
                    bedroom_max: 2.0,
                    bathroom_min: 2.0,
                    bathroom_max: 2.0,
                    sqft_min: 1010.0,
                    sqft_max: 1090.0,
                    price_min: 3300.0,
                    price_max: 3650.0,
                },
            ),
        ];

        assert_eq!(sink.append(&records).unwrap(), 2);
        assert_eq!(sink.records_for_run(date).unwrap(), records);
    }

    #[test]
    fn test_append_empty_batch_writes_nothing() {
        let sink = migrated_sink();
        assert_eq!(sink.append(&[]).unwrap(), 0);

        let count: i64 = sink
            .conn
            .query_row("SELECT COUNT(*) FROM units", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_append_keeps_inverted_ranges() {
        let sink = migrated_sink();
        let date = "2024-05-01T06:00:00Z";
        let mut unit = Unit::fixed(1.0, 1.0, 700.0, 2000.0);
        unit.price_min = 2500.0;
        unit.price_max = 1900.0;

        sink.append(&[CrawlRecord::new(date, "REN", unit)]).unwrap();

        let stored = sink.records_for_run(date).unwrap();
        assert_eq!(stored[0].unit.price_min, 2500.0);
        assert_eq!(stored[0].unit.price_max, 1900.0);
    }

    #[test]
    fn test_append_without_schema_fails() {
        let sink = SqliteSink::open_in_memory().unwrap();
        let records = vec![CrawlRecord::new("2024-05-01T06:00:00Z", "JUXT", Unit::default())];

        assert!(matches!(
            sink.append(&records),
            Err(crate::utils::error::CrawlError::DatabaseError(_))
        ));
    }
}
