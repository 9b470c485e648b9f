//! Ports - Contracts between the domain and the outside world.
//!
//! Each port is a trait implemented by an adapter. Handlers depend on the
//! trait, never on a concrete implementation.

mod payment_processor;

pub use payment_processor::{
    PaymentProcessor, PaymentResult, ProcessorError, ProcessorResponse,
};
