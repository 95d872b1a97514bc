// Shared test helpers

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use factory_dashboard::models::Sample;
use factory_dashboard::telemetry_repo::TelemetryRepo;
use tempfile::TempDir;

pub const BASE_TS: i64 = 1_700_000_000;

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_TS + secs, 0).unwrap()
}

/// Sample at BASE_TS + `secs`; empty `alarms` is stored as NULL.
pub fn sample(machine: &str, secs: i64, status: &str, production: i64, alarms: &str) -> Sample {
    Sample {
        machine_id: machine.into(),
        timestamp: ts(secs),
        status: status.into(),
        production_total: production,
        position_x: secs as f64 / 4.0,
        active_alarms: (!alarms.is_empty()).then(|| alarms.to_string()),
    }
}

/// Repo over a fresh SQLite file; keep the TempDir alive for the test.
pub async fn temp_repo() -> (TempDir, TelemetryRepo) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fabrica.db");
    let repo = TelemetryRepo::connect(path.to_str().unwrap(), 2, "dados_monitoramento")
        .await
        .unwrap();
    (dir, repo)
}
