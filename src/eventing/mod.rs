//! Eventing - Service to UI messages

pub mod app_event;
