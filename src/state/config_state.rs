//! ConfigState - Dashboard configuration

use crate::domain::config::{DashboardConfig, ServerConfig};

#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: DashboardConfig,
    /// Where the config came from, shown on the settings page
    pub path: Option<String>,
}

impl ConfigState {
    pub fn new(config: DashboardConfig, path: Option<String>) -> Self {
        Self { config, path }
    }

    pub fn base_url(&self) -> String {
        self.config.server.base_url()
    }

    /// Returns whether the address changed
    pub fn set_server(&mut self, server: ServerConfig) -> bool {
        let changed = self.config.server != server;
        self.config.server = server;
        changed
    }

    pub fn set_rows_per_page(&mut self, rows: u64) {
        self.config.rows_per_page = rows;
    }

    pub fn set_locale(&mut self, code: &str) {
        self.config.locale = Some(code.to_string());
    }
}
