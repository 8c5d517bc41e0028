//! Core types, traits, and error definitions for the urban intelligence router.
//!
//! This crate provides the building blocks shared by the router, the
//! chatbot service boundary and the HTTP gateway: the response model, the
//! immutable knowledge base, configuration and the error taxonomy.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod mocks;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use knowledge::KnowledgeBase;
pub use traits::*;
pub use types::*;
