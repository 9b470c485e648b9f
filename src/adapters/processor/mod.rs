//! Outbound adapter for the upstream payment processor.

mod upstream_client;

pub use upstream_client::UpstreamProcessorClient;
