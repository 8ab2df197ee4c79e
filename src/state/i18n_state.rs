//! I18nState - Internationalization State

use crate::i18n::Locale;

#[derive(Debug, Clone, Default)]
pub struct I18nState {
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Switch between English and Chinese
    pub fn toggle_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }
}
