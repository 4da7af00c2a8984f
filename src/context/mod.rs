//! Prompt grounding: fact lookup and outbound prompt assembly

pub mod prompt;
pub mod resolver;

pub use prompt::{compose, PERSONA_INSTRUCTION};
pub use resolver::{ContextResolver, ContextSource, ResolvedContext, CONTEXT_HEADER};
