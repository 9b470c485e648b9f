//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Inbound REST API
//! - `processor` - Outbound client for the upstream payment processor

pub mod http;
pub mod processor;

pub use processor::UpstreamProcessorClient;
