//! # Ports
//!
//! Port traits for the evidence hashing subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::EvidenceHashingApi;
pub use outbound::{ByteSource, NullProgressSink, ProgressSink};
