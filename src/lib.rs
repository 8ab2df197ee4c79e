//! Beacon Dash Library
//!
//! Application logic for Beacon Dash, a desktop dashboard that polls a
//! sharded beacon chain simulator over HTTP, lists its blocks and states,
//! and drives it (slot processing, bids, simulator settings).

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
