//! Graph store abstraction and an in-process implementation

use super::models::*;
use crate::error::{RelayError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Operations the relay needs from the fact graph.
///
/// Writes follow MERGE semantics: repeating an upsert never creates a
/// second node or edge.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Create or update a topic keyed by its id
    async fn upsert_topic(&self, topic: &Topic) -> Result<()>;

    /// Create the edge if both endpoints exist. Returns `false` when an
    /// endpoint is missing and nothing was written.
    async fn upsert_relation(&self, relation: &Relation) -> Result<bool>;

    /// Topics whose id equals one of `ids`, at most `limit` of them
    async fn topics_by_ids(&self, ids: &[&str], limit: usize) -> Result<Vec<Topic>>;

    /// Topics whose id or fact contains any of `words`, at most `limit`
    async fn topics_mentioning(&self, words: &[&str], limit: usize) -> Result<Vec<Topic>>;

    /// Current node and edge totals
    async fn counts(&self) -> Result<GraphCounts>;
}

/// Graph store held in process memory.
///
/// Results come back in insertion order. Used by tests and for running the
/// relay without a FalkorDB instance.
#[derive(Default)]
pub struct MemoryStore {
    topics: RwLock<Vec<Topic>>,
    relations: RwLock<Vec<Relation>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RelayError::Store("connection refused".to_string()));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> RelayError {
    RelayError::Internal("memory store lock poisoned".to_string())
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn upsert_topic(&self, topic: &Topic) -> Result<()> {
        self.check_online()?;
        let mut topics = self.topics.write().map_err(poisoned)?;
        match topics.iter_mut().find(|t| t.id == topic.id) {
            Some(existing) => {
                existing.category = topic.category.clone();
                existing.fact = topic.fact.clone();
            }
            None => topics.push(topic.clone()),
        }
        Ok(())
    }

    async fn upsert_relation(&self, relation: &Relation) -> Result<bool> {
        self.check_online()?;
        let topics = self.topics.read().map_err(poisoned)?;
        let has = |id: &str| topics.iter().any(|t| t.id == id);
        if !has(&relation.source) || !has(&relation.target) {
            return Ok(false);
        }

        let mut relations = self.relations.write().map_err(poisoned)?;
        if !relations.contains(relation) {
            relations.push(relation.clone());
        }
        Ok(true)
    }

    async fn topics_by_ids(&self, ids: &[&str], limit: usize) -> Result<Vec<Topic>> {
        self.check_online()?;
        let topics = self.topics.read().map_err(poisoned)?;
        Ok(topics
            .iter()
            .filter(|t| ids.contains(&t.id.as_str()))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn topics_mentioning(&self, words: &[&str], limit: usize) -> Result<Vec<Topic>> {
        self.check_online()?;
        let topics = self.topics.read().map_err(poisoned)?;
        Ok(topics
            .iter()
            .filter(|t| words.iter().any(|w| t.mentions(w)))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn counts(&self) -> Result<GraphCounts> {
        self.check_online()?;
        Ok(GraphCounts {
            nodes: self.topics.read().map_err(poisoned)?.len(),
            edges: self.relations.read().map_err(poisoned)?.len(),
        })
    }
}
