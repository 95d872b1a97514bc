// Read side of the telemetry table. The collector owns the writes; the
// create/insert helpers here exist for tests and the demo seeder.

mod error;

pub use error::{StoreError, is_undefined_table};

use crate::config::is_sql_identifier;
use crate::history;
use crate::models::{DashboardState, Sample};
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

pub struct TelemetryRepo {
    pool: SqlitePool,
    table: String,
    select_sql: String,
}

impl TelemetryRepo {
    pub async fn connect(path: &str, max_pool_size: u32, table: &str) -> anyhow::Result<Self> {
        anyhow::ensure!(
            is_sql_identifier(table),
            "invalid telemetry table name {:?}",
            table
        );
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        let select_sql = format!(
            "SELECT maquina_id, timestamp, status, producao_total, posicao_x, alarmes_ativos
             FROM {} ORDER BY maquina_id ASC, timestamp DESC",
            table
        );
        Ok(Self {
            pool,
            table: table.to_string(),
            select_sql,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Every sample, ordered (machine_id ASC, timestamp DESC). One pooled
    /// connection is held for the query and returned when it goes out of scope.
    #[instrument(skip(self), fields(repo = "telemetry", operation = "fetch_samples", table = %self.table))]
    pub async fn fetch_samples(&self) -> Result<Vec<Sample>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query(&self.select_sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| StoreError::classify(e, &self.table))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(Self::parse_sample_row(&row).map_err(StoreError::Decode)?);
        }
        tracing::debug!(samples_count = out.len(), "samples fetched");
        Ok(out)
    }

    /// Query + aggregate. A missing table is a state, not an error.
    pub async fn load_dashboard(&self) -> Result<DashboardState, StoreError> {
        match self.fetch_samples().await {
            Ok(samples) => Ok(DashboardState::Ready(history::aggregate(&samples))),
            Err(StoreError::Uninitialized { table }) => {
                tracing::debug!(table = %table, "telemetry table missing; dashboard initializing");
                Ok(DashboardState::Initializing)
            }
            Err(e) => Err(e),
        }
    }

    /// Creates the telemetry table with the collector's column contract.
    #[instrument(skip(self), fields(repo = "telemetry", operation = "create_table"))]
    pub async fn create_table(&self) -> anyhow::Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                maquina_id TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                status TEXT NOT NULL,
                producao_total INTEGER NOT NULL,
                posicao_x REAL NOT NULL,
                alarmes_ativos TEXT
            )
            "#,
            table = self.table
        ))
        .execute(&self.pool)
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_machine_ts ON {table}(maquina_id, timestamp)",
            table = self.table
        ))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self, samples), fields(repo = "telemetry", operation = "insert_samples", samples_count = samples.len()))]
    pub async fn insert_samples(&self, samples: &[Sample]) -> anyhow::Result<()> {
        if samples.is_empty() {
            return Ok(());
        }
        let sql = format!(
            "INSERT INTO {} (maquina_id, timestamp, status, producao_total, posicao_x, alarmes_ativos) VALUES ($1, $2, $3, $4, $5, $6)",
            self.table
        );
        let mut tx = self.pool.begin().await?;
        for s in samples {
            sqlx::query(&sql)
                .bind(&s.machine_id)
                .bind(s.timestamp)
                .bind(&s.status)
                .bind(s.production_total)
                .bind(s.position_x)
                .bind(s.active_alarms.as_deref())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn parse_sample_row(row: &SqliteRow) -> Result<Sample, sqlx::Error> {
        let machine_id: String = row.try_get("maquina_id")?;
        let timestamp: DateTime<Utc> = row.try_get("timestamp")?;
        let status: String = row.try_get("status")?;
        let production_total: i64 = row.try_get("producao_total")?;
        let position_x: f64 = row.try_get("posicao_x")?;
        let active_alarms: Option<String> = row.try_get("alarmes_ativos")?;
        Ok(Sample {
            machine_id,
            timestamp,
            status,
            production_total,
            position_x,
            active_alarms,
        })
    }
}
