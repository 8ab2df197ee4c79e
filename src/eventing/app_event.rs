//! AppEvent - Application Event Enum
//!
//! Everything the service hub reports back to the UI thread.

use chrono::{DateTime, Local};

use crate::domain::chain::{BeaconBlock, BeaconState, Commitment};
use crate::domain::simulator::{RequestLog, SimulatorConfig};
use crate::state::log_state::LogLevel;
use crate::state::slot_list_state::FetchTicket;

/// Which slot-keyed list a fetch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotList {
    Blocks,
    FinalizedBlocks,
    States,
}

impl SlotList {
    pub fn label(&self) -> &'static str {
        match self {
            SlotList::Blocks => "blocks",
            SlotList::FinalizedBlocks => "finalized blocks",
            SlotList::States => "states",
        }
    }
}

/// A user action whose outcome is acknowledged in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    ProcessSlot,
    InitSimulator,
    ComputeCommitment,
    SubmitBid,
    UpdateSimulatorConfig,
}

impl ActionKind {
    /// Translation key of the success message
    pub fn success_key(&self) -> &'static str {
        match self {
            ActionKind::ProcessSlot => "notice.slot_processed",
            ActionKind::InitSimulator => "notice.simulator_initialized",
            ActionKind::ComputeCommitment => "notice.commitment_computed",
            ActionKind::SubmitBid => "notice.bid_submitted",
            ActionKind::UpdateSimulatorConfig => "notice.config_updated",
        }
    }

    /// Whether success opens the shared dialog
    pub fn acknowledged(&self) -> bool {
        !matches!(
            self,
            ActionKind::ComputeCommitment | ActionKind::UpdateSimulatorConfig
        )
    }
}

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    BlocksLoaded {
        ticket: FetchTicket,
        blocks: Vec<BeaconBlock>,
    },

    FinalizedBlocksLoaded {
        ticket: FetchTicket,
        blocks: Vec<BeaconBlock>,
    },

    StatesLoaded {
        ticket: FetchTicket,
        states: Vec<BeaconState>,
    },

    /// A slot-keyed list fetch failed; the view keeps its rows
    ListFetchFailed {
        list: SlotList,
        ticket: FetchTicket,
        message: String,
    },

    RequestLogsLoaded {
        logs: Vec<RequestLog>,
    },

    RequestLogsFailed {
        message: String,
    },

    SimulatorConfigLoaded {
        config: SimulatorConfig,
    },

    /// Commitment for the selected data file
    CommitmentComputed {
        commitment: Commitment,
        /// Base64 of the file content
        data: String,
    },

    ActionSucceeded {
        action: ActionKind,
    },

    ActionFailed {
        action: ActionKind,
        message: String,
    },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Debug, message)
    }
}
