//! RequestLogsState - Backend request log, newest first, paginated locally

use crate::domain::simulator::RequestLog;
use crate::domain::slot_window::{PageWindow, page_slice};
use crate::state::slot_list_state::LoadState;

#[derive(Debug)]
pub struct RequestLogsState {
    logs: Vec<RequestLog>,
    window: PageWindow,
    load: LoadState,
}

impl RequestLogsState {
    pub fn new(rows_per_page: u64) -> Self {
        Self {
            logs: Vec::new(),
            window: PageWindow::new(rows_per_page, 0),
            load: LoadState::Idle,
        }
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn begin_fetch(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Replace the list, ordered by descending `log_id`
    pub fn apply_fetch(&mut self, mut logs: Vec<RequestLog>) {
        logs.sort_by(|a, b| b.log_id.cmp(&a.log_id));
        self.logs = logs;
        self.load = LoadState::Ready;
    }

    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.load = LoadState::Failed(message.into());
    }

    pub fn set_page(&mut self, page: u64) {
        self.window = self.window.with_page(page);
    }

    pub fn set_count(&mut self, count: u64) {
        if count != self.window.count() {
            self.window = self.window.with_count(count);
        }
    }

    pub fn visible_rows(&self) -> &[RequestLog] {
        page_slice(&self.logs, self.window)
    }

    pub fn total_rows(&self) -> u64 {
        self.logs.len() as u64
    }
}

impl Default for RequestLogsState {
    fn default() -> Self {
        Self::new(crate::domain::slot_window::DEFAULT_ROWS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(log_id: u64) -> RequestLog {
        RequestLog {
            log_id,
            date: "2021-04-01 12:00:00".to_string(),
            endpoint: format!("GET /beacon/blocks/head #{log_id}"),
        }
    }

    #[test]
    fn newest_log_first_and_paged() {
        let mut state = RequestLogsState::new(2);
        state.apply_fetch(vec![log(1), log(3), log(2)]);

        let ids: Vec<_> = state.visible_rows().iter().map(|l| l.log_id).collect();
        assert_eq!(ids, vec![3, 2]);

        state.set_page(1);
        let ids: Vec<_> = state.visible_rows().iter().map(|l| l.log_id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(state.total_rows(), 3);
    }

    #[test]
    fn failure_keeps_list() {
        let mut state = RequestLogsState::default();
        state.apply_fetch(vec![log(1)]);
        state.apply_failure("HTTP 500");
        assert_eq!(state.visible_rows().len(), 1);
        assert_eq!(state.load_state(), &LoadState::Failed("HTTP 500".to_string()));
    }
}
