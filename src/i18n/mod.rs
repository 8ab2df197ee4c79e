//! i18n - Internationalization Module
//!
//! Thin wrapper over `rust-i18n`. Translations live in `locales/*.yml`.

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese (Simplified)
    Zh,
}

impl Locale {
    /// Locale code used by the translation files and the config file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// Parse a code such as `zh`, `zh-CN` or `en_US`; unknown codes are English
    pub fn from_code(code: &str) -> Self {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "zh" => Locale::Zh,
            _ => Locale::En,
        }
    }

    /// Language of the operating system
    pub fn detect() -> Self {
        Self::from_code(&locale_config::Locale::current().to_string())
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    SharedString::from(t!(key, locale = locale.code()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_by_language() {
        assert_eq!(Locale::from_code("zh-CN"), Locale::Zh);
        assert_eq!(Locale::from_code("zh_TW"), Locale::Zh);
        assert_eq!(Locale::from_code("en-US"), Locale::En);
        assert_eq!(Locale::from_code("fr"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn toggle_flips_between_two_locales() {
        assert_eq!(Locale::En.toggled(), Locale::Zh);
        assert_eq!(Locale::Zh.toggled().toggled(), Locale::Zh);
    }

    #[test]
    fn known_keys_are_translated() {
        assert_eq!(t(Locale::En, "nav.blocks").as_ref(), "Blocks");
        assert_eq!(t(Locale::Zh, "nav.blocks").as_ref(), "区块");
    }
}
