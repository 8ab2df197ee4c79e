//! Settings Controller
//!
//! Server address and list page size are local and saved to the config
//! file. Auto mining, slot time and failure rate live on the simulator and
//! go through `POST /config`.

use gpui::App;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::domain::config::ServerConfig;
use crate::domain::simulator::ConfigUpdate;
use crate::eventing::app_event::AppEvent;
use crate::features::request_logs::controller::RequestLogsController;
use crate::features::slot_list::SlotListController;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::state::processing_state::{FieldError, parse_number};
use crate::utils::config_store::save_dashboard_config;

/// Host must be non-blank, port a valid TCP port
pub fn parse_server(host: &str, port: &str) -> Result<ServerConfig, FieldError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(FieldError::Required);
    }
    let port = u16::try_from(parse_number(port)?).map_err(|_| FieldError::OutOfRange)?;
    if port == 0 {
        return Err(FieldError::OutOfRange);
    }
    Ok(ServerConfig {
        host: host.to_string(),
        port,
    })
}

/// Seconds per slot, at least 1
pub fn parse_slot_time(input: &str) -> Result<u64, FieldError> {
    match parse_number(input)? {
        0 => Err(FieldError::OutOfRange),
        seconds => Ok(seconds),
    }
}

/// Probability in `0.0..=1.0`
pub fn parse_failure_rate(input: &str) -> Result<f32, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    let rate: f32 = trimmed.parse().map_err(|_| FieldError::NotANumber)?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(FieldError::OutOfRange)
    }
}

#[derive(Clone)]
pub struct SettingsController {
    entities: AppEntities,
}

impl SettingsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn persist(&self, cx: &mut App) {
        let config = self.entities.config.read(cx).config.clone();
        let result = save_dashboard_config(&config);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            match result {
                Ok(()) => hub.log(AppEvent::debug("Settings saved")),
                Err(e) => {
                    error!(error = %e, "Failed to save settings");
                    hub.log(AppEvent::error(format!("Failed to save settings: {e}")));
                }
            }
        }
    }

    /// Point the dashboard at another simulator
    pub fn apply_server(&self, server: ServerConfig, cx: &mut App) {
        let base_url = server.base_url();
        let changed = self.entities.config.update(cx, |state, cx| {
            let changed = state.set_server(server);
            cx.notify();
            changed
        });
        if !changed {
            return;
        }

        info!(%base_url, "Server changed");
        self.persist(cx);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::SetServer { base_url });
            hub.send(ServiceCommand::FetchSimulatorConfig);
        }
    }

    /// Page size for every list, kept across restarts
    pub fn set_rows_per_page(&self, rows: u64, cx: &mut App) {
        self.entities.config.update(cx, |state, cx| {
            state.set_rows_per_page(rows);
            cx.notify();
        });
        self.persist(cx);

        SlotListController::blocks(&self.entities).set_count(rows, cx);
        SlotListController::finalized_blocks(&self.entities).set_count(rows, cx);
        SlotListController::states(&self.entities).set_count(rows, cx);
        RequestLogsController::new(self.entities.clone()).set_count(rows, cx);
    }

    pub fn refresh_simulator_config(&self, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchSimulatorConfig);
        }
    }

    /// Send a partial `POST /config` unless one is already in flight
    pub fn update_simulator(&self, update: ConfigUpdate, cx: &mut App) {
        let started = self.entities.simulator.update(cx, |state, cx| {
            let started = state.begin_update(update);
            cx.notify();
            started
        });
        if started {
            info!(?update, "Updating simulator config");
            if let Some(hub) = cx.try_global::<ServiceHub>() {
                hub.send(ServiceCommand::UpdateSimulatorConfig(update));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_needs_host_and_valid_port() {
        assert_eq!(
            parse_server(" 10.0.0.2 ", "3030"),
            Ok(ServerConfig {
                host: "10.0.0.2".to_string(),
                port: 3030,
            })
        );
        assert_eq!(parse_server("", "3030"), Err(FieldError::Required));
        assert_eq!(parse_server("localhost", "http"), Err(FieldError::NotANumber));
        assert_eq!(parse_server("localhost", "70000"), Err(FieldError::OutOfRange));
        assert_eq!(parse_server("localhost", "0"), Err(FieldError::OutOfRange));
    }

    #[test]
    fn slot_time_is_positive() {
        assert_eq!(parse_slot_time("6"), Ok(6));
        assert_eq!(parse_slot_time("0"), Err(FieldError::OutOfRange));
        assert_eq!(parse_slot_time(""), Err(FieldError::Required));
    }

    #[test]
    fn failure_rate_is_a_probability() {
        assert_eq!(parse_failure_rate("0.25"), Ok(0.25));
        assert_eq!(parse_failure_rate("1"), Ok(1.0));
        assert_eq!(parse_failure_rate("1.5"), Err(FieldError::OutOfRange));
        assert_eq!(parse_failure_rate("-0.1"), Err(FieldError::OutOfRange));
        assert_eq!(parse_failure_rate("often"), Err(FieldError::NotANumber));
    }
}
