//! Payment Relay - Signature-Verifying Payment Event Gateway
//!
//! This crate accepts payment lifecycle events (webhooks, refunds, creation
//! and status-check requests), verifies each request's SHA-256 signature
//! against a shared secret, and forwards verified creation/check requests
//! to the upstream payment processor.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
