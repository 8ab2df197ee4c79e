//! Request Logs Controller

use gpui::App;

use crate::app::entities::AppEntities;
use crate::services::service_hub::{ServiceCommand, ServiceHub};

#[derive(Clone)]
pub struct RequestLogsController {
    entities: AppEntities,
}

impl RequestLogsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Reload the whole log list
    pub fn refresh(&self, cx: &mut App) {
        self.entities.request_logs.update(cx, |state, cx| {
            state.begin_fetch();
            cx.notify();
        });
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.send(ServiceCommand::FetchRequestLogs);
        }
    }

    pub fn set_page(&self, page: u64, cx: &mut App) {
        self.entities.request_logs.update(cx, |state, cx| {
            state.set_page(page);
            cx.notify();
        });
    }

    pub fn set_count(&self, count: u64, cx: &mut App) {
        self.entities.request_logs.update(cx, |state, cx| {
            state.set_count(count);
            cx.notify();
        });
    }
}
