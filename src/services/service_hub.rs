//! ServiceHub - Backend request dispatch
//!
//! UI code sends a [`ServiceCommand`]; the hub runs the matching
//! [`BeaconApi`] call on the tokio runtime and reports the outcome as
//! [`AppEvent`]s. Commands run concurrently, so list results carry their
//! fetch ticket and the receiving state drops the stale ones.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gpui::Global;
use parking_lot::RwLock;
use tracing::{error, info, warn};

use crate::domain::simulator::{BidWithData, ConfigUpdate, DataCommitmentRequest};
use crate::domain::situation::Situation;
use crate::domain::slot_window::Slot;
use crate::error::{Error, Result};
use crate::eventing::app_event::{ActionKind, AppEvent, SlotList};
use crate::services::api::{BeaconApi, FetchScope};
use crate::services::runtime::spawn_in_tokio;
use crate::state::slot_list_state::FetchTicket;

/// Commands that can be sent to services
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Whole block list (client-paginated)
    FetchBlocks { ticket: FetchTicket },
    /// One window of finalized blocks
    FetchFinalizedBlocks { ticket: FetchTicket },
    /// One window of states
    FetchStates { ticket: FetchTicket },
    FetchRequestLogs,
    FetchSimulatorConfig,
    UpdateSimulatorConfig(ConfigUpdate),
    /// Read a data file and ask the backend for its commitment
    ComputeCommitment { path: PathBuf },
    SubmitBid(BidWithData),
    ProcessSlot { situation: Situation, slot: Slot },
    InitSimulator,
    /// Point every later request at another server
    SetServer { base_url: String },
}

/// ServiceHub owns the HTTP client and the command channel
pub struct ServiceHub {
    event_tx: flume::Sender<AppEvent>,
    command_tx: flume::Sender<ServiceCommand>,
    api: Arc<RwLock<BeaconApi>>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    pub fn new(api: BeaconApi, event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();
        let api = Arc::new(RwLock::new(api));

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
            api: api.clone(),
        };

        hub.start_command_handler(command_rx, api, event_tx);

        let _ = hub.event_tx.send(AppEvent::info(format!(
            "ServiceHub ready for {}",
            hub.base_url()
        )));

        hub
    }

    fn start_command_handler(
        &self,
        command_rx: flume::Receiver<ServiceCommand>,
        api: Arc<RwLock<BeaconApi>>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        spawn_in_tokio(async move {
            while let Ok(cmd) = command_rx.recv_async().await {
                if let ServiceCommand::SetServer { base_url } = cmd {
                    match BeaconApi::new(&base_url) {
                        Ok(next) => {
                            info!(%base_url, "Switched simulator server");
                            *api.write() = next;
                            let _ = event_tx.send(AppEvent::info(format!(
                                "Server set to {base_url}"
                            )));
                        }
                        Err(e) => {
                            error!(error = %e, %base_url, "Failed to switch server");
                            let _ = event_tx.send(AppEvent::error(e.to_string()));
                        }
                    }
                    continue;
                }

                let client = api.read().clone();
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    for event in handle_command(&client, cmd).await {
                        let _ = tx.send(event);
                    }
                });
            }
        });
    }

    /// Send a command to the services
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Client for direct calls such as head polling
    pub fn api(&self) -> BeaconApi {
        self.api.read().clone()
    }

    pub fn base_url(&self) -> String {
        self.api.read().base_url().to_string()
    }

    /// Send a log event
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

fn list_failure(list: SlotList, ticket: FetchTicket, e: &Error) -> Vec<AppEvent> {
    warn!(error = %e, list = list.label(), "List fetch failed");
    vec![
        AppEvent::warn(format!("Failed to load {}: {e}", list.label())),
        AppEvent::ListFetchFailed {
            list,
            ticket,
            message: e.to_string(),
        },
    ]
}

fn action_outcome(action: ActionKind, result: Result<()>, done: String) -> Vec<AppEvent> {
    match result {
        Ok(()) => vec![AppEvent::info(done), AppEvent::ActionSucceeded { action }],
        Err(e) => {
            error!(error = %e, ?action, "Request failed");
            vec![
                AppEvent::error(format!("{action:?} failed: {e}")),
                AppEvent::ActionFailed {
                    action,
                    message: e.to_string(),
                },
            ]
        }
    }
}

async fn compute_commitment(api: &BeaconApi, path: &Path) -> Result<Vec<AppEvent>> {
    let bytes = tokio::fs::read(path).await?;
    let commitment = api.data_commitment(&bytes).await?;
    let data = DataCommitmentRequest::from_bytes(&bytes).data;
    info!(path = ?path, size = bytes.len(), length = commitment.length, "Commitment computed");
    Ok(vec![
        AppEvent::info(format!(
            "Commitment for {} ({} bytes), length {}",
            path.display(),
            bytes.len(),
            commitment.length
        )),
        AppEvent::CommitmentComputed { commitment, data },
        AppEvent::ActionSucceeded {
            action: ActionKind::ComputeCommitment,
        },
    ])
}

async fn handle_command(api: &BeaconApi, cmd: ServiceCommand) -> Vec<AppEvent> {
    match cmd {
        ServiceCommand::FetchBlocks { ticket } => match api.blocks(FetchScope::All).await {
            Ok(blocks) => vec![AppEvent::BlocksLoaded { ticket, blocks }],
            Err(e) => list_failure(SlotList::Blocks, ticket, &e),
        },
        ServiceCommand::FetchFinalizedBlocks { ticket } => {
            match api.finalized_blocks(FetchScope::Window(ticket.window)).await {
                Ok(blocks) => vec![AppEvent::FinalizedBlocksLoaded { ticket, blocks }],
                Err(e) => list_failure(SlotList::FinalizedBlocks, ticket, &e),
            }
        }
        ServiceCommand::FetchStates { ticket } => {
            match api.states(FetchScope::Window(ticket.window)).await {
                Ok(states) => vec![AppEvent::StatesLoaded { ticket, states }],
                Err(e) => list_failure(SlotList::States, ticket, &e),
            }
        }
        ServiceCommand::FetchRequestLogs => match api.request_logs().await {
            Ok(logs) => vec![AppEvent::RequestLogsLoaded { logs }],
            Err(e) => {
                warn!(error = %e, "Request log fetch failed");
                vec![
                    AppEvent::warn(format!("Failed to load request logs: {e}")),
                    AppEvent::RequestLogsFailed {
                        message: e.to_string(),
                    },
                ]
            }
        },
        ServiceCommand::FetchSimulatorConfig => match api.config().await {
            Ok(config) => vec![AppEvent::SimulatorConfigLoaded { config }],
            Err(e) => {
                warn!(error = %e, "Simulator config fetch failed");
                vec![AppEvent::warn(format!("Failed to load simulator config: {e}"))]
            }
        },
        ServiceCommand::UpdateSimulatorConfig(update) => action_outcome(
            ActionKind::UpdateSimulatorConfig,
            api.update_config(&update).await,
            format!("Simulator config updated: {update:?}"),
        ),
        ServiceCommand::ComputeCommitment { path } => {
            match compute_commitment(api, &path).await {
                Ok(events) => events,
                Err(e) => action_outcome(ActionKind::ComputeCommitment, Err(e), String::new()),
            }
        }
        ServiceCommand::SubmitBid(body) => {
            let shard = body.bid.shard;
            let slot = body.bid.slot;
            action_outcome(
                ActionKind::SubmitBid,
                api.bid_with_data(shard, &body).await,
                format!("Bid submitted for shard {shard} at slot {slot}"),
            )
        }
        ServiceCommand::ProcessSlot { situation, slot } => action_outcome(
            ActionKind::ProcessSlot,
            api.process_slot(situation, slot).await,
            format!("Processed up to slot {slot} ({situation})"),
        ),
        ServiceCommand::InitSimulator => action_outcome(
            ActionKind::InitSimulator,
            api.init_simulator().await,
            "Simulator initialized".to_string(),
        ),
        ServiceCommand::SetServer { .. } => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slot_window::PageWindow;

    #[test]
    fn failed_action_reports_log_and_outcome() {
        let events = action_outcome(
            ActionKind::ProcessSlot,
            Err(Error::Http {
                status: 400,
                url: "http://localhost:3030/simulator/slot/process/1".to_string(),
            }),
            String::new(),
        );
        assert!(matches!(events[0], AppEvent::Log { .. }));
        assert!(matches!(
            events[1],
            AppEvent::ActionFailed {
                action: ActionKind::ProcessSlot,
                ..
            }
        ));
    }

    #[test]
    fn list_failure_keeps_ticket() {
        let ticket = FetchTicket {
            generation: 7,
            window: PageWindow::new(10, 2),
        };
        let events = list_failure(
            SlotList::States,
            ticket,
            &Error::Validation {
                message: "x".to_string(),
            },
        );
        match &events[1] {
            AppEvent::ListFetchFailed { list, ticket: t, .. } => {
                assert_eq!(*list, SlotList::States);
                assert_eq!(*t, ticket);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn commitment_for_missing_file_is_an_io_failure() {
        let api = BeaconApi::new("http://127.0.0.1:9").expect("client");
        let path = std::env::temp_dir().join("beacon-dash-no-such-blob.bin");
        let result = futures::executor::block_on(crate::services::runtime::run_in_tokio(
            async move { compute_commitment(&api, &path).await },
        ));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
