//! SimulatorState - Last known simulator settings (`GET /config`)

use crate::domain::simulator::{ConfigUpdate, SimulatorConfig};

#[derive(Debug, Default)]
pub struct SimulatorState {
    config: Option<SimulatorConfig>,
    /// Update sent but not yet acknowledged
    pending: Option<ConfigUpdate>,
}

impl SimulatorState {
    pub fn config(&self) -> Option<SimulatorConfig> {
        self.config
    }

    /// `AUTO` or `MANUAL` for the header; unknown until the first load
    pub fn mining_status_key(&self) -> &'static str {
        match self.config {
            Some(config) if config.auto => "header.mining_auto",
            Some(_) => "header.mining_manual",
            None => "header.mining_unknown",
        }
    }

    pub fn set_config(&mut self, config: SimulatorConfig) {
        self.config = Some(config);
        self.pending = None;
    }

    pub fn begin_update(&mut self, update: ConfigUpdate) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(update);
        true
    }

    pub fn is_updating(&self) -> bool {
        self.pending.is_some()
    }

    /// Backend accepted the pending update
    pub fn commit_update(&mut self) {
        if let Some(update) = self.pending.take() {
            let mut config = self.config.unwrap_or_default();
            update.apply_to(&mut config);
            self.config = Some(config);
        }
    }

    pub fn abort_update(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn committed_update_is_applied() {
        let mut state = SimulatorState::default();
        state.set_config(SimulatorConfig::default());
        assert_eq!(state.mining_status_key(), "header.mining_manual");

        assert!(state.begin_update(ConfigUpdate::auto(true)));
        assert!(!state.begin_update(ConfigUpdate::auto(false)));
        state.commit_update();

        assert_eq!(state.config().map(|c| c.auto), Some(true));
        assert_eq!(state.mining_status_key(), "header.mining_auto");
        assert!(!state.is_updating());
    }

    #[test]
    fn aborted_update_leaves_config() {
        let mut state = SimulatorState::default();
        state.set_config(SimulatorConfig::default());
        state.begin_update(ConfigUpdate::auto(true));
        state.abort_update();
        assert_eq!(state.config().map(|c| c.auto), Some(false));
    }
}
