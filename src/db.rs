use actix_web::web;
use chrono::{Datelike, NaiveDate};
use moka::future::Cache;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::utils::ledger::Ledger;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        date TEXT NOT NULL,
        sign_in TEXT,
        sign_out TEXT,
        status TEXT,
        late_by TEXT,
        worked_hours TEXT
    )
"#;

const CREATE_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS attendance_name_date ON attendance (name, date)";

/// Opens (creating if needed) one day's database and makes sure the table exists.
pub async fn init_db(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    // a single connection keeps writes to the day file serialized
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(CREATE_TABLE).execute(&pool).await?;
    sqlx::query(CREATE_INDEX).execute(&pool).await?;

    Ok(pool)
}

/// `<root>/week_<isoyear>_<isoweek>`
pub fn week_dir(root: &Path, date: NaiveDate) -> PathBuf {
    let week = date.iso_week();
    root.join(format!("week_{}_{}", week.year(), week.week()))
}

/// `<root>/week_<isoyear>_<isoweek>/attendance_<YYYY-MM-DD>.db`
pub fn day_file(root: &Path, date: NaiveDate) -> PathBuf {
    week_dir(root, date).join(format!("attendance_{}.db", date.format("%Y-%m-%d")))
}

/// Hands out the ledger for a calendar day, opening its file on first use.
pub struct LedgerStore {
    root: PathBuf,
    days: Cache<NaiveDate, Ledger>,
}

impl LedgerStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            days: Cache::builder().max_capacity(8).build(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn for_date(&self, date: NaiveDate) -> Result<Ledger, AppError> {
        let root = self.root.clone();

        self.days
            .try_get_with(date, async move {
                let dir = week_dir(&root, date);
                web::block(move || std::fs::create_dir_all(dir)).await??;

                let path = day_file(&root, date);
                let pool = init_db(&path).await?;
                info!(path = %path.display(), "Opened attendance ledger");

                Ok::<_, AppError>(Ledger::new(pool))
            })
            .await
            .map_err(|e: Arc<AppError>| (*e).clone())
    }
}
