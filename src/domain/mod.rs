//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on GPUI and represent the simulator's API and the
//! list reconciliation rules the views share.

pub mod bytes;
pub mod chain;
pub mod config;
pub mod row_expansion;
pub mod simulator;
pub mod situation;
pub mod slot_window;
