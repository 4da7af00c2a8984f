//! Knowledge-graph grounded chat relay
//!
//! Accepts a user prompt, looks up related facts in a FalkorDB graph,
//! wraps prompt and facts in a persona template and forwards the result
//! to an Ollama-compatible generation server.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod facts;
pub mod inference;
pub mod logging;
pub mod metrics;

pub use config::Config;
pub use error::{RelayError, Result};
