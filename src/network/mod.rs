//! Network layer - HTTP execution against the briefing-room backend
//!
//! The Network actor receives backend commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{ApiClient, DownloadPayload, TransportError};
