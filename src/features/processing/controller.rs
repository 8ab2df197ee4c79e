//! Processing Controller
//!
//! Form edits go straight into [`ProcessingState`]; submissions are validated
//! there first and only then turned into service commands.

use std::path::PathBuf;

use gpui::App;
use tracing::{debug, info};

use crate::app::entities::AppEntities;
use crate::domain::situation::Situation;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::state::processing_state::{PendingAction, ProcessingState};

#[derive(Clone)]
pub struct ProcessingController {
    entities: AppEntities,
}

impl ProcessingController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn edit(&self, cx: &mut App, f: impl FnOnce(&mut ProcessingState)) {
        self.entities.processing.update(cx, |state, cx| {
            f(state);
            cx.notify();
        });
    }

    fn send(cx: &mut App, cmd: ServiceCommand) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(cmd);
        }
    }

    fn log(cx: &mut App, event: AppEvent) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(event);
        }
    }

    pub fn set_slot_input(&self, input: String, cx: &mut App) {
        self.edit(cx, |state| state.set_slot_input(input));
    }

    pub fn set_situation(&self, situation: Situation, cx: &mut App) {
        self.edit(cx, |state| state.set_situation(situation));
    }

    pub fn set_shard_input(&self, input: String, cx: &mut App) {
        self.edit(cx, |state| state.set_shard_input(input));
    }

    pub fn set_bid_slot_input(&self, input: String, cx: &mut App) {
        self.edit(cx, |state| state.set_bid_slot_input(input));
    }

    pub fn set_fee_input(&self, input: String, cx: &mut App) {
        self.edit(cx, |state| state.set_fee_input(input));
    }

    pub fn set_file_path(&self, path: String, cx: &mut App) {
        self.edit(cx, |state| state.set_file_path(path));
    }

    /// Process up to the entered slot with the chosen situation
    pub fn process_slot(&self, cx: &mut App) {
        let submission = self.entities.processing.update(cx, |state, cx| {
            let submission = state
                .slot_submission()
                .map_err(|e| e.to_string())
                .and_then(|request| {
                    if state.begin(PendingAction::ProcessSlot) {
                        Ok(request)
                    } else {
                        Err("another request is still running".to_string())
                    }
                });
            cx.notify();
            submission
        });

        match submission {
            Ok((situation, slot)) => {
                info!(slot, %situation, "Processing slots");
                Self::send(cx, ServiceCommand::ProcessSlot { situation, slot });
            }
            Err(reason) => {
                debug!(%reason, "Slot processing refused");
                Self::log(cx, AppEvent::warn(format!("Cannot process slot: {reason}")));
            }
        }
    }

    pub fn init_simulator(&self, cx: &mut App) {
        let started = self
            .entities
            .processing
            .update(cx, |state, cx| {
                let started = state.begin(PendingAction::InitSimulator);
                cx.notify();
                started
            });
        if started {
            info!("Initializing simulator");
            Self::send(cx, ServiceCommand::InitSimulator);
        }
    }

    /// Read the selected data file and ask the backend for its commitment
    pub fn compute_commitment(&self, cx: &mut App) {
        let path = self.entities.processing.read(cx).bid_form().file_path.trim().to_string();
        if path.is_empty() {
            Self::log(cx, AppEvent::warn("Choose a data file first"));
            return;
        }

        let started = self.entities.processing.update(cx, |state, cx| {
            let started = state.begin(PendingAction::ComputeCommitment);
            cx.notify();
            started
        });
        if started {
            Self::send(
                cx,
                ServiceCommand::ComputeCommitment {
                    path: PathBuf::from(path),
                },
            );
        }
    }

    pub fn submit_bid(&self, cx: &mut App) {
        let submission = self.entities.processing.update(cx, |state, cx| {
            let submission = state
                .bid_submission()
                .map_err(|e| e.to_string())
                .and_then(|request| {
                    if state.begin(PendingAction::SubmitBid) {
                        Ok(request)
                    } else {
                        Err("another request is still running".to_string())
                    }
                });
            cx.notify();
            submission
        });

        match submission {
            Ok((shard, body)) => {
                info!(shard, slot = body.bid.slot, fee = body.bid.fee, "Submitting bid");
                Self::send(cx, ServiceCommand::SubmitBid(body));
            }
            Err(reason) => {
                debug!(%reason, "Bid refused");
                Self::log(cx, AppEvent::warn(format!("Cannot submit bid: {reason}")));
            }
        }
    }
}
