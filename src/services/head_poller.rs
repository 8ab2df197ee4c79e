//! HeadPoller - Periodic `GET /beacon/blocks/head`
//!
//! The only writer of [`HeadState`]. A GPUI task ticks every poll interval;
//! each tick takes the [`InFlightGuard`] and skips when the previous request
//! is still running. Dropping the poller drops the task and ends polling.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gpui::{AppContext, Context, Entity, Task};
use tracing::{debug, info, warn};

use crate::domain::slot_window::Slot;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::services::runtime::run_in_tokio;
use crate::services::service_hub::ServiceHub;
use crate::state::head_state::HeadState;

/// At most one request at a time
#[derive(Debug, Clone, Default)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl InFlightGuard {
    /// `None` while another permit is alive
    pub fn try_acquire(&self) -> Option<InFlightPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightPermit {
                busy: self.busy.clone(),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the guard when dropped, whatever the request's outcome
#[derive(Debug)]
pub struct InFlightPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

pub struct HeadPoller {
    head: Entity<HeadState>,
    guard: InFlightGuard,
    _ticker: Task<()>,
    skipped: u64,
}

impl HeadPoller {
    pub fn new(head: Entity<HeadState>, interval: Duration, cx: &mut Context<Self>) -> Self {
        info!(interval_ms = interval.as_millis() as u64, "Head polling started");
        let ticker = cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor().timer(interval).await;
                if this.update(cx, |poller, cx| poller.poll_now(cx)).is_err() {
                    break;
                }
            }
        });

        Self {
            head,
            guard: InFlightGuard::default(),
            _ticker: ticker,
            skipped: 0,
        }
    }

    /// Fetch the head now unless a fetch is already running
    pub fn poll_now(&mut self, cx: &mut Context<Self>) {
        let Some(permit) = self.guard.try_acquire() else {
            self.skipped += 1;
            debug!(skipped = self.skipped, "Head request still in flight, tick skipped");
            return;
        };
        let Some(api) = cx.try_global::<ServiceHub>().map(ServiceHub::api) else {
            return;
        };

        let head = self.head.clone();
        cx.spawn(async move |_this, cx| {
            let result = run_in_tokio(async move { api.head_slot().await }).await;
            drop(permit);
            let _ = cx.update(|cx| Self::record(&head, result, cx));
        })
        .detach();
    }

    fn record(head: &Entity<HeadState>, result: Result<Option<Slot>>, cx: &mut gpui::App) {
        match result {
            Ok(slot) => {
                let was_down = head.read(cx).last_error().is_some();
                head.update(cx, |state, cx| {
                    if state.record_head(slot) {
                        cx.notify();
                    }
                });
                if was_down {
                    info!("Simulator reachable again");
                    if let Some(hub) = cx.try_global::<ServiceHub>() {
                        hub.log(AppEvent::info("Simulator reachable again"));
                    }
                }
            }
            Err(e) => {
                let message = e.to_string();
                let went_down = head.update(cx, |state, cx| {
                    let went_down = state.record_failure(message.clone());
                    cx.notify();
                    went_down
                });
                if went_down {
                    warn!(error = %e, "Head poll failed");
                    if let Some(hub) = cx.try_global::<ServiceHub>() {
                        hub.log(AppEvent::warn(format!("Cannot reach simulator: {message}")));
                    }
                }
            }
        }
    }
}

impl Drop for HeadPoller {
    fn drop(&mut self) {
        info!(skipped_ticks = self.skipped, "Head polling stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_refused_while_first_is_alive() {
        let guard = InFlightGuard::default();
        let permit = guard.try_acquire();
        assert!(permit.is_some());
        assert!(guard.is_busy());
        assert!(guard.try_acquire().is_none());

        drop(permit);
        assert!(!guard.is_busy());
        assert!(guard.try_acquire().is_some());
    }

    #[test]
    fn permit_is_released_when_request_task_ends() {
        let guard = InFlightGuard::default();
        let permit = guard.try_acquire().expect("free guard");

        let failed: Result<()> = futures::executor::block_on(run_in_tokio(async move {
            let _permit = permit;
            Err(crate::error::Error::Validation {
                message: "boom".to_string(),
            })
        }));

        assert!(failed.is_err());
        assert!(!guard.is_busy());
    }

    #[test]
    fn clones_share_one_flag() {
        let guard = InFlightGuard::default();
        let other = guard.clone();
        let _permit = guard.try_acquire().expect("free guard");
        assert!(other.try_acquire().is_none());
    }
}
