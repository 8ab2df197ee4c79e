//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, sidebar, content area and log panel. It
//! runs the event pump that applies service events to state, and it is the
//! one place that reads [`HeadState`](crate::state::head_state::HeadState):
//! every head change is pushed from here into the header, the processing
//! forms and the slot lists as a [`HeadSnapshot`].

use gpui::{
    div, prelude::*, AnyElement, App, Context, Entity, IntoElement, ParentElement, Render,
    Styled, Subscription, Window,
};
use tracing::{debug, error};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::composite::modal::Modal;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::sidebar::Sidebar;
use crate::eventing::app_event::{ActionKind, AppEvent, SlotList};
use crate::features::blocks::page::BlocksPage;
use crate::features::finalized_blocks::page::FinalizedBlocksPage;
use crate::features::processing::page::ProcessingPage;
use crate::features::request_logs::controller::RequestLogsController;
use crate::features::request_logs::page::RequestLogsPage;
use crate::features::settings::page::SettingsPage;
use crate::features::slot_list::SlotListController;
use crate::features::states::page::StatesPage;
use crate::i18n::t;
use crate::services::head_poller::HeadPoller;
use crate::services::service_hub::{ServiceCommand, ServiceHub};
use crate::state::head_state::HeadSnapshot;
use crate::theme::colors::DashColors;
use crate::utils::config_store::save_dashboard_config;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    log_panel: Entity<LogPanel>,
    // Page views, created on first visit
    blocks_page: Option<Entity<BlocksPage>>,
    finalized_page: Option<Entity<FinalizedBlocksPage>>,
    states_page: Option<Entity<StatesPage>>,
    request_logs_page: Option<Entity<RequestLogsPage>>,
    processing_page: Option<Entity<ProcessingPage>>,
    settings_page: Option<Entity<SettingsPage>>,
    _head_poller: Entity<HeadPoller>,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        head_poller: Entity<HeadPoller>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        Self::start_event_pump(event_rx, entities.clone(), cx);

        let subscriptions = vec![
            cx.observe(&entities.head, |this, head, cx| {
                let snapshot = head.read(cx).snapshot();
                this.push_head(snapshot, cx);
            }),
            cx.observe(&entities.nav, |this, nav, cx| {
                let page = nav.read(cx).active_page;
                debug!(?page, "Page changed");
                load_page(page, &this.entities, cx);
                cx.notify();
            }),
            cx.observe(&entities.i18n, |this, i18n, cx| {
                let locale = i18n.read(cx).locale;
                this.entities.config.update(cx, |state, cx| {
                    state.set_locale(locale.code());
                    cx.notify();
                });
                let config = this.entities.config.read(cx).config.clone();
                if let Err(e) = save_dashboard_config(&config) {
                    error!(error = %e, "Failed to save language");
                }
            }),
            cx.observe(&entities.notice, |_this, _, cx| cx.notify()),
        ];

        // Mining status for the header, then the landing page
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchSimulatorConfig);
        }
        let landing = entities.nav.read(cx).active_page;
        load_page(landing, &entities, cx);

        Self {
            entities,
            header,
            sidebar,
            log_panel,
            blocks_page: None,
            finalized_page: None,
            states_page: None,
            request_logs_page: None,
            processing_page: None,
            settings_page: None,
            _head_poller: head_poller,
            _subscriptions: subscriptions,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Hand a new head to everything that depends on it; the visible slot
    /// list is fetched again
    fn push_head(&mut self, head: HeadSnapshot, cx: &mut Context<Self>) {
        self.header.update(cx, |header, cx| header.set_head(head, cx));
        self.entities.processing.update(cx, |state, cx| {
            state.set_head(head.slot);
            cx.notify();
        });

        let active = self.entities.nav.read(cx).active_page;
        let blocks = SlotListController::blocks(&self.entities);
        if blocks.set_head(head.slot, cx) && active == ActivePage::Blocks {
            blocks.refresh(cx);
        }
        let finalized = SlotListController::finalized_blocks(&self.entities);
        if finalized.set_head(head.slot, cx) && active == ActivePage::FinalizedBlocks {
            finalized.refresh(cx);
        }
        let states = SlotListController::states(&self.entities);
        if states.set_head(head.slot, cx) && active == ActivePage::States {
            states.refresh(cx);
        }
    }

    fn page_element(
        &mut self,
        page: ActivePage,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let entities = self.entities.clone();
        match page {
            ActivePage::Blocks => self
                .blocks_page
                .get_or_insert_with(|| cx.new(|cx| BlocksPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::FinalizedBlocks => self
                .finalized_page
                .get_or_insert_with(|| cx.new(|cx| FinalizedBlocksPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::States => self
                .states_page
                .get_or_insert_with(|| cx.new(|cx| StatesPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::RequestLogs => self
                .request_logs_page
                .get_or_insert_with(|| cx.new(|cx| RequestLogsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Processing => self
                .processing_page
                .get_or_insert_with(|| cx.new(|cx| ProcessingPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Settings => self
                .settings_page
                .get_or_insert_with(|| cx.new(|cx| SettingsPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
        }
    }

    fn render_notice(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        let message = self.entities.notice.read(cx).message().cloned()?;
        let locale = self.entities.i18n.read(cx).locale;
        let notice = self.entities.notice.clone();

        Some(
            Modal::new()
                .title(t(locale, "notice.success"))
                .child(div().text_sm().child(message))
                .confirm_label(t(locale, "action.ok"))
                .on_close(move |_window, cx| {
                    notice.update(cx, |state, cx| {
                        state.dismiss();
                        cx.notify();
                    });
                })
                .into_any_element(),
        )
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let content = self.page_element(active_page, window, cx);
        let notice = self.render_notice(cx);

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(DashColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(DashColors::background())
                            .child(content),
                    ),
            )
            .child(self.log_panel.clone())
            .children(notice)
    }
}

/// Fetch whatever the page shows
fn load_page(page: ActivePage, entities: &AppEntities, cx: &mut App) {
    match page {
        ActivePage::Blocks => SlotListController::blocks(entities).refresh(cx),
        ActivePage::FinalizedBlocks => SlotListController::finalized_blocks(entities).refresh(cx),
        ActivePage::States => SlotListController::states(entities).refresh(cx),
        ActivePage::RequestLogs => RequestLogsController::new(entities.clone()).refresh(cx),
        ActivePage::Processing => {}
        ActivePage::Settings => {
            if let Some(hub) = cx.try_global::<ServiceHub>() {
                hub.send(ServiceCommand::FetchSimulatorConfig);
            }
        }
    }
}

/// Clear the processing form's in-flight marker for actions it started
fn finish_processing(action: ActionKind, entities: &AppEntities, cx: &mut App) {
    if action != ActionKind::UpdateSimulatorConfig {
        entities.processing.update(cx, |state, cx| {
            state.finish();
            cx.notify();
        });
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::BlocksLoaded { ticket, blocks } => {
            entities.blocks.update(cx, |state, cx| {
                if state.apply_fetch(ticket, blocks) {
                    cx.notify();
                }
            });
        }
        AppEvent::FinalizedBlocksLoaded { ticket, blocks } => {
            entities.finalized.update(cx, |state, cx| {
                if state.apply_fetch(ticket, blocks) {
                    cx.notify();
                }
            });
        }
        AppEvent::StatesLoaded { ticket, states } => {
            entities.states.update(cx, |state, cx| {
                if state.apply_fetch(ticket, states) {
                    cx.notify();
                }
            });
        }
        AppEvent::ListFetchFailed {
            list,
            ticket,
            message,
        } => match list {
            SlotList::Blocks => entities.blocks.update(cx, |state, cx| {
                if state.apply_failure(ticket, message) {
                    cx.notify();
                }
            }),
            SlotList::FinalizedBlocks => entities.finalized.update(cx, |state, cx| {
                if state.apply_failure(ticket, message) {
                    cx.notify();
                }
            }),
            SlotList::States => entities.states.update(cx, |state, cx| {
                if state.apply_failure(ticket, message) {
                    cx.notify();
                }
            }),
        },
        AppEvent::RequestLogsLoaded { logs } => {
            entities.request_logs.update(cx, |state, cx| {
                state.apply_fetch(logs);
                cx.notify();
            });
        }
        AppEvent::RequestLogsFailed { message } => {
            entities.request_logs.update(cx, |state, cx| {
                state.apply_failure(message);
                cx.notify();
            });
        }
        AppEvent::SimulatorConfigLoaded { config } => {
            entities.simulator.update(cx, |state, cx| {
                state.set_config(config);
                cx.notify();
            });
        }
        AppEvent::CommitmentComputed { commitment, data } => {
            entities.processing.update(cx, |state, cx| {
                state.set_commitment(commitment, data);
                cx.notify();
            });
        }
        AppEvent::ActionSucceeded { action } => {
            if action == ActionKind::UpdateSimulatorConfig {
                entities.simulator.update(cx, |state, cx| {
                    state.commit_update();
                    cx.notify();
                });
            }
            finish_processing(action, entities, cx);

            if action.acknowledged() {
                let locale = entities.i18n.read(cx).locale;
                let message = t(locale, action.success_key());
                entities.notice.update(cx, |state, cx| {
                    state.show(message);
                    cx.notify();
                });
            }
        }
        AppEvent::ActionFailed { action, message } => {
            debug!(?action, %message, "Action failed");
            if action == ActionKind::UpdateSimulatorConfig {
                entities.simulator.update(cx, |state, cx| {
                    state.abort_update();
                    cx.notify();
                });
            }
            finish_processing(action, entities, cx);
        }
    }
}
