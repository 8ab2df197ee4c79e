//! Service Layer
//!
//! Everything that talks to the simulator backend.
//!
//! ```text
//! ┌──────────────┐  ServiceCommand   ┌──────────────┐   HTTP   ┌───────────┐
//! │ controllers  │ ────────────────► │  ServiceHub  │ ───────► │ simulator │
//! └──────────────┘                   └──────────────┘          └───────────┘
//!        ▲            AppEvent              │
//!        └──────────────────────────────────┘
//!
//! ┌──────────────┐  every poll interval, one request at a time
//! │  HeadPoller  │ ──► GET /beacon/blocks/head ──► HeadState
//! └──────────────┘
//! ```

pub mod api;
pub mod head_poller;
pub mod runtime;
pub mod service_hub;

pub use api::{BeaconApi, FetchScope};
pub use head_poller::{HeadPoller, InFlightGuard};
pub use runtime::{run_in_tokio, spawn_in_tokio};
pub use service_hub::{ServiceCommand, ServiceHub};
