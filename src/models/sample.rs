// One telemetry row as written by the collector

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single monitoring sample. JSON names follow the store's column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "maquina_id")]
    pub machine_id: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    #[serde(rename = "producao_total")]
    pub production_total: i64,
    #[serde(rename = "posicao_x")]
    pub position_x: f64,
    #[serde(rename = "alarmes_ativos")]
    pub active_alarms: Option<String>,
}

impl Sample {
    /// Alarm text, with NULL and "" both treated as "no alarm".
    pub fn alarms(&self) -> Option<&str> {
        self.active_alarms.as_deref().filter(|a| !a.is_empty())
    }

    pub fn has_alarms(&self) -> bool {
        self.alarms().is_some()
    }
}
