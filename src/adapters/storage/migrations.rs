use crate::utils::error::{CrawlError, Result};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// 依版本排序；已套用的版本記錄在 `PRAGMA user_version`
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create units",
        sql: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations/0001_create_units.sql")),
    },
    Migration {
        version: 2,
        description: "index units by name and crawl date",
        sql: include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/migrations/0002_index_units_name_crawl_date.sql"
        )),
    },
];

pub fn current_version(conn: &Connection) -> Result<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// 套用尚未執行的遷移，回傳本次套用的數量
pub fn apply_migrations(conn: &mut Connection) -> Result<usize> {
    let current = current_version(conn)?;
    let latest = MIGRATIONS.last().map(|m| m.version).unwrap_or(0);

    if current > latest {
        return Err(CrawlError::MigrationError {
            version: current,
            message: format!(
                "database schema version {} is newer than the latest known version {}",
                current, latest
            ),
        });
    }

    let mut applied = 0;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        tracing::info!(
            "🗄️ Applying migration {} ({})",
            migration.version,
            migration.description
        );

        let to_migration_error = |e: rusqlite::Error| CrawlError::MigrationError {
            version: migration.version,
            message: e.to_string(),
        };

        // 每個遷移各自一個交易，失敗時 user_version 不會前進
        let tx = conn.transaction().map_err(to_migration_error)?;
        tx.execute_batch(migration.sql).map_err(to_migration_error)?;
        tx.pragma_update(None, "user_version", migration.version)
            .map_err(to_migration_error)?;
        tx.commit().map_err(to_migration_error)?;
        applied += 1;
    }

    if applied == 0 {
        tracing::debug!("Database schema already at version {}", current);
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_strictly_ordered() {
        for pair in MIGRATIONS.windows(2) {
            assert!(pair[0].version < pair[1].version);
        }
    }

    #[test]
    fn test_apply_migrations_creates_units_table() {
        let mut conn = Connection::open_in_memory().unwrap();

        let applied = apply_migrations(&mut conn).unwrap();
        assert_eq!(applied, MIGRATIONS.len());
        assert_eq!(current_version(&conn).unwrap(), 2);

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('units') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(
            columns,
            vec![
                "id", "crawl_date", "name", "bed_min", "bed_max", "bath_min", "bath_max",
                "sqft_min", "sqft_max", "price_min", "price_max"
            ]
        );
    }

    #[test]
    fn test_apply_migrations_twice_is_noop() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();

        assert_eq!(apply_migrations(&mut conn).unwrap(), 0);
        assert_eq!(current_version(&conn).unwrap(), 2);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", 99u32).unwrap();

        let err = apply_migrations(&mut conn).unwrap_err();
        assert!(matches!(err, CrawlError::MigrationError { version: 99, .. }));
    }
}
