//! Intent routing, chatbot boundary and HTTP gateway for the urban
//! intelligence router.
//!
//! This crate provides the rule-based router and its handlers, the service
//! that converts router faults into result objects, and the axum server that
//! exposes it.

pub mod handlers;
pub mod router;
pub mod server;
pub mod service;
pub mod tracing_layer;

pub use router::{RuleRouter, RuleRouterBuilder};
pub use server::{GatewayConfig, GatewayServer};
pub use service::ChatbotService;
pub use tracing_layer::configure_tracing;
