//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders. None of them
//! touch the network; controllers and the service hub feed them.

pub mod config_state;
pub mod head_state;
pub mod i18n_state;
pub mod log_state;
pub mod nav_state;
pub mod notice_state;
pub mod processing_state;
pub mod request_logs_state;
pub mod simulator_state;
pub mod slot_list_state;
