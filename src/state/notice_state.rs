//! NoticeState - Shared success dialog

use gpui::SharedString;

#[derive(Debug, Default)]
pub struct NoticeState {
    message: Option<SharedString>,
}

impl NoticeState {
    pub fn show(&mut self, message: impl Into<SharedString>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&SharedString> {
        self.message.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }
}
