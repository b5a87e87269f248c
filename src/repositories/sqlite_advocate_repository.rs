use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::models::{Advocate, Scalar};
use crate::query::{Dialect, QueryCompiler};
use crate::repositories::traits::AdvocateRepository;
use crate::search::Token;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS advocates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT,
        last_name TEXT,
        city TEXT,
        degree TEXT,
        specialties TEXT NOT NULL DEFAULT '[]',
        years_of_experience,
        phone_number,
        created_at TEXT
    );
"#;

// `years_of_experience` and `phone_number` are declared without a type so
// SQLite keeps integers as integers and text as text.

const COLUMNS: &str = "id, first_name, last_name, city, degree, specialties, \
                       years_of_experience, phone_number, created_at";

/// A row as read from SQLite, before the JSON column is decoded.
struct AdvocateRow {
    advocate: Advocate,
    specialties_json: String,
}

impl AdvocateRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            advocate: Advocate {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                city: row.get(3)?,
                degree: row.get(4)?,
                specialties: Vec::new(),
                years_of_experience: row.get::<_, Option<Scalar>>(6)?,
                phone_number: row.get::<_, Option<Scalar>>(7)?,
                created_at: row.get(8)?,
            },
            specialties_json: row.get(5)?,
        })
    }

    fn into_advocate(self) -> StoreResult<Advocate> {
        let mut advocate = self.advocate;
        advocate.specialties = serde_json::from_str(&self.specialties_json)?;
        Ok(advocate)
    }
}

/// Advocate repository backed by SQLite.
///
/// Searches are compiled to SQL and filtered by the database.
pub struct SqliteAdvocateRepository {
    conn: Arc<Mutex<Connection>>,
    compiler: QueryCompiler,
}

impl SqliteAdvocateRepository {
    /// Open (or create) a store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            compiler: QueryCompiler::new(Dialect::Sqlite),
        })
    }

    fn collect_rows(rows: Vec<AdvocateRow>) -> StoreResult<Vec<Advocate>> {
        rows.into_iter().map(AdvocateRow::into_advocate).collect()
    }
}

#[async_trait]
impl AdvocateRepository for SqliteAdvocateRepository {
    async fn get(&self, id: i64) -> StoreResult<Advocate> {
        let conn = self.conn.lock().await;
        let sql = format!("SELECT {} FROM advocates WHERE id = ?1", COLUMNS);

        let row = conn
            .query_row(&sql, params![id], AdvocateRow::from_row)
            .optional()?;

        match row {
            Some(row) => row.into_advocate(),
            None => Err(StoreError::NotFound(format!("advocate {}", id))),
        }
    }

    async fn list(&self) -> StoreResult<Vec<Advocate>> {
        self.search(&[]).await
    }

    async fn search(&self, tokens: &[Token]) -> StoreResult<Vec<Advocate>> {
        let filter = self.compiler.compile(tokens);
        let sql = format!(
            "SELECT {} FROM advocates WHERE {} ORDER BY id",
            COLUMNS, filter.sql
        );
        tracing::debug!(params = filter.params.len(), "Executing compiled filter: {}", sql);

        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(filter.params.iter()), AdvocateRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Self::collect_rows(rows)
    }

    async fn insert_many(&self, advocates: &[Advocate]) -> StoreResult<Vec<Advocate>> {
        let now = Utc::now().to_rfc3339();
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let mut inserted = Vec::with_capacity(advocates.len());
        for advocate in advocates {
            let specialties = serde_json::to_string(&advocate.specialties)?;
            tx.execute(
                "INSERT INTO advocates (
                    first_name, last_name, city, degree, specialties,
                    years_of_experience, phone_number, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    advocate.first_name,
                    advocate.last_name,
                    advocate.city,
                    advocate.degree,
                    specialties,
                    advocate.years_of_experience,
                    advocate.phone_number,
                    now,
                ],
            )?;

            let mut stored = advocate.clone();
            stored.id = tx.last_insert_rowid();
            stored.created_at = Some(now.clone());
            inserted.push(stored);
        }

        tx.commit()?;
        tracing::debug!("Inserted {} advocates into SQLite", inserted.len());
        Ok(inserted)
    }

    async fn count(&self) -> StoreResult<usize> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM advocates", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|_| StoreError::InvalidRow(format!("row count {}", count)))
    }
}
