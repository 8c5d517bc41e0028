//! Core traits for the urban intelligence router.
//!
//! - `gateway`: routing traits consumed by the service boundary and HTTP server

pub mod gateway;

pub use gateway::*;
