//! Core type definitions for the urban intelligence router.
//!
//! Broken down into submodules: inbound requests, intent classification,
//! router responses and the outward-facing chatbot contract.

pub mod contract;
pub mod intent;
pub mod request;
pub mod response;

pub use contract::*;
pub use intent::*;
pub use request::*;
pub use response::*;
