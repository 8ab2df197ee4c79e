//! Embedded assets
//!
//! Dashboard icons are bundled with rust-embed and served alongside the
//! gpui-component icon set.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icons bundled with the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    Beacon,
    Blocks,
    Finalized,
    States,
    RequestLogs,
    Processing,
    Settings,
    Languages,
}

impl CustomIconName {
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Beacon => "icons/beacon.svg",
            CustomIconName::Blocks => "icons/blocks.svg",
            CustomIconName::Finalized => "icons/finalized.svg",
            CustomIconName::States => "icons/states.svg",
            CustomIconName::RequestLogs => "icons/request-logs.svg",
            CustomIconName::Processing => "icons/processing.svg",
            CustomIconName::Settings => "icons/settings.svg",
            CustomIconName::Languages => "icons/languages.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_is_embedded() {
        for icon in [
            CustomIconName::Beacon,
            CustomIconName::Blocks,
            CustomIconName::Finalized,
            CustomIconName::States,
            CustomIconName::RequestLogs,
            CustomIconName::Processing,
            CustomIconName::Settings,
            CustomIconName::Languages,
        ] {
            assert!(Assets::get(&icon.path()).is_some(), "{}", icon.path());
        }
    }
}
