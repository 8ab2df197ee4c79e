//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the head ticks every poll, list pages
//! change on fetch, the rest on user input.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::chain::{BeaconBlock, BeaconState};
use crate::domain::config::DashboardConfig;
use crate::domain::slot_window::PaginationMode;
use crate::i18n::Locale;
use crate::state::{
    config_state::ConfigState, head_state::HeadState, i18n_state::I18nState,
    log_state::LogState, nav_state::NavState, notice_state::NoticeState,
    processing_state::ProcessingState, request_logs_state::RequestLogsState,
    simulator_state::SimulatorState, slot_list_state::SlotListState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Dashboard configuration
    pub config: Entity<ConfigState>,
    /// Chain head, written by the head poller only
    pub head: Entity<HeadState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Sidebar navigation
    pub nav: Entity<NavState>,
    pub i18n: Entity<I18nState>,
    /// Success dialog
    pub notice: Entity<NoticeState>,
    /// Backend simulator settings
    pub simulator: Entity<SimulatorState>,
    /// Slot processor and bid forms
    pub processing: Entity<ProcessingState>,
    pub request_logs: Entity<RequestLogsState>,
    /// All blocks, paginated locally, missed slots filled in
    pub blocks: Entity<SlotListState<BeaconBlock>>,
    /// Finalized blocks, one backend page at a time
    pub finalized: Entity<SlotListState<BeaconBlock>>,
    /// States, one backend page at a time, missed slots filled in
    pub states: Entity<SlotListState<BeaconState>>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(cx: &mut App, config: DashboardConfig, config_path: Option<String>) -> Self {
        let rows = config.rows_per_page;
        let locale = config
            .locale
            .as_deref()
            .map(Locale::from_code)
            .unwrap_or_else(Locale::detect);

        Self {
            config: cx.new(|_| ConfigState::new(config, config_path)),
            head: cx.new(|_| HeadState::default()),
            logs: cx.new(|_| LogState::default()),
            nav: cx.new(|_| NavState::default()),
            i18n: cx.new(|_| I18nState::new(locale)),
            notice: cx.new(|_| NoticeState::default()),
            simulator: cx.new(|_| SimulatorState::default()),
            processing: cx.new(|_| ProcessingState::default()),
            request_logs: cx.new(|_| RequestLogsState::new(rows)),
            blocks: cx.new(|_| {
                SlotListState::new(PaginationMode::Client { densify: true }, rows)
            }),
            finalized: cx.new(|_| {
                SlotListState::new(PaginationMode::Server { densify: false }, rows)
            }),
            states: cx.new(|_| SlotListState::new(PaginationMode::Server { densify: true }, rows)),
        }
    }
}
