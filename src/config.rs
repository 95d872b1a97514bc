use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_pool_size: u32,
    /// Telemetry table written by the collector.
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_table() -> String {
    "dados_monitoramento".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Full page reload period of the server-rendered dashboard.
    #[serde(default = "default_page_reload_secs")]
    pub page_reload_secs: u64,
    /// Fetch period of the client-rendered dashboard script.
    #[serde(default = "default_client_poll_secs")]
    pub client_poll_secs: u64,
}

fn default_page_reload_secs() -> u64 {
    15
}

fn default_client_poll_secs() -> u64 {
    60
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_reload_secs: default_page_reload_secs(),
            client_poll_secs: default_client_poll_secs(),
        }
    }
}

/// Plain SQL identifier: ASCII letters, digits and '_', not starting with a digit.
pub fn is_sql_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.path.is_empty(),
            "database.path must be non-empty"
        );
        anyhow::ensure!(
            self.database.max_pool_size > 0,
            "database.max_pool_size must be > 0, got {}",
            self.database.max_pool_size
        );
        anyhow::ensure!(
            is_sql_identifier(&self.database.table),
            "database.table must be a plain identifier, got {:?}",
            self.database.table
        );
        anyhow::ensure!(
            self.dashboard.page_reload_secs > 0,
            "dashboard.page_reload_secs must be > 0, got {}",
            self.dashboard.page_reload_secs
        );
        anyhow::ensure!(
            self.dashboard.client_poll_secs > 0,
            "dashboard.client_poll_secs must be > 0, got {}",
            self.dashboard.client_poll_secs
        );
        Ok(())
    }
}
