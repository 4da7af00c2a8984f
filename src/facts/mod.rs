//! Fact graph for prompt grounding
//!
//! - Hand-authored catalog of topic nodes, relation edges and trigger rules
//! - `GraphStore` trait with FalkorDB and in-memory implementations
//! - Idempotent startup seeding

pub mod catalog;
pub mod falkor;
pub mod models;
pub mod seeder;
pub mod store;

pub use catalog::{Catalog, TRIGGER_RULES};
pub use falkor::FalkorStore;
pub use models::{GraphCounts, Relation, Topic, TriggerRule};
pub use seeder::{ensure_seeded, seed, SeedReport};
pub use store::{GraphStore, MemoryStore};
