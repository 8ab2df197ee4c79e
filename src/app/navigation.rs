//! Navigation - Pages reachable from the sidebar

use serde::{Deserialize, Serialize};

use crate::assets::CustomIconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// All blocks since genesis, missed slots included
    #[default]
    Blocks,
    FinalizedBlocks,
    /// Per-slot beacon state with pending shard headers
    States,
    /// Requests the backend has served
    RequestLogs,
    /// Slot processing and bids
    Processing,
    Settings,
}

impl ActivePage {
    pub fn icon(&self) -> CustomIconName {
        match self {
            ActivePage::Blocks => CustomIconName::Blocks,
            ActivePage::FinalizedBlocks => CustomIconName::Finalized,
            ActivePage::States => CustomIconName::States,
            ActivePage::RequestLogs => CustomIconName::RequestLogs,
            ActivePage::Processing => CustomIconName::Processing,
            ActivePage::Settings => CustomIconName::Settings,
        }
    }

    /// Translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Blocks => "nav.blocks",
            ActivePage::FinalizedBlocks => "nav.finalized_blocks",
            ActivePage::States => "nav.states",
            ActivePage::RequestLogs => "nav.request_logs",
            ActivePage::Processing => "nav.processing",
            ActivePage::Settings => "nav.settings",
        }
    }

    /// Sidebar order
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Blocks,
            ActivePage::FinalizedBlocks,
            ActivePage::States,
            ActivePage::RequestLogs,
            ActivePage::Processing,
            ActivePage::Settings,
        ]
    }
}
