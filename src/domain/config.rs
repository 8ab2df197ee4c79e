//! Config - Dashboard Configuration

use serde::{Deserialize, Serialize};

use super::slot_window::{DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};

/// Main dashboard configuration, persisted as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Simulator server address
    pub server: ServerConfig,
    /// Head polling interval in milliseconds
    pub poll_interval_ms: u64,
    /// Rows per page for list views
    pub rows_per_page: u64,
    /// UI language code (`en`, `zh`); detected from the system when unset
    pub locale: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            poll_interval_ms: 1000,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            locale: None,
        }
    }
}

impl DashboardConfig {
    /// Clamp values edited by hand in the TOML file
    pub fn normalized(mut self) -> Self {
        if !ROWS_PER_PAGE_OPTIONS.contains(&self.rows_per_page) {
            self.rows_per_page = DEFAULT_ROWS_PER_PAGE;
        }
        self.poll_interval_ms = self.poll_interval_ms.clamp(250, 60_000);
        self
    }
}

/// Simulator HTTP endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host name or IP
    pub host: String,
    /// HTTP port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3030,
        }
    }
}

impl ServerConfig {
    /// `http://host:port`, no trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_simulator() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.base_url(), "http://localhost:3030");
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.rows_per_page, 10);
    }

    #[test]
    fn toml_round_trip() {
        let config = DashboardConfig {
            server: ServerConfig {
                host: "10.0.0.5".to_string(),
                port: 8080,
            },
            poll_interval_ms: 2000,
            rows_per_page: 25,
            locale: Some("zh".to_string()),
        };
        let text = toml::to_string(&config).expect("serialize");
        let back: DashboardConfig = toml::from_str(&text).expect("parse");
        assert_eq!(back, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DashboardConfig = toml::from_str("rows_per_page = 50\n").expect("parse");
        assert_eq!(config.rows_per_page, 50);
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.locale, None);
    }

    #[test]
    fn normalization_rejects_odd_page_sizes() {
        let config = DashboardConfig {
            rows_per_page: 7,
            poll_interval_ms: 10,
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.rows_per_page, 10);
        assert_eq!(config.poll_interval_ms, 250);
    }
}
