//! NavState - Which page the workspace shows

use crate::app::navigation::ActivePage;

#[derive(Debug, Default)]
pub struct NavState {
    pub active_page: ActivePage,
}

impl NavState {
    /// Returns whether the page changed
    pub fn set_active_page(&mut self, page: ActivePage) -> bool {
        let changed = self.active_page != page;
        self.active_page = page;
        changed
    }
}
