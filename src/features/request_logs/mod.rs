//! Request Logs Feature

pub mod controller;
pub mod page;
