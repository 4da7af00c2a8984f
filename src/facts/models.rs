//! Data models for the fact graph

use serde::{Deserialize, Serialize};

/// Topic node: one fact sentence keyed by a stable identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub category: String,
    pub fact: String,
}

impl Topic {
    pub fn new(id: impl Into<String>, category: impl Into<String>, fact: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            fact: fact.into(),
        }
    }

    /// Whether this topic's id or fact text contains `word`.
    ///
    /// Containment is case-sensitive, matching what the graph store does.
    pub fn mentions(&self, word: &str) -> bool {
        self.id.contains(word) || self.fact.contains(word)
    }
}

/// Directed `RELATED` edge between two topics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub source: String,
    pub target: String,
    pub relation: String,
}

impl Relation {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
        }
    }
}

/// Node and edge totals as seen by the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphCounts {
    pub nodes: usize,
    pub edges: usize,
}

/// Literal substring whose presence in a lowercased prompt selects a fixed
/// list of topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerRule {
    pub trigger: &'static str,
    pub topic_ids: &'static [&'static str],
}

impl TriggerRule {
    pub const fn new(trigger: &'static str, topic_ids: &'static [&'static str]) -> Self {
        Self { trigger, topic_ids }
    }

    /// `normalized` must already be lowercased
    pub fn matches(&self, normalized: &str) -> bool {
        normalized.contains(self.trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_mentions_id_or_fact() {
        let topic = Topic::new("black_hole", "science", "A black hole is a region in space.");
        assert!(topic.mentions("black"));
        assert!(topic.mentions("region"));
        assert!(topic.mentions("_hole"));
        assert!(!topic.mentions("Region"));
    }

    #[test]
    fn test_trigger_is_plain_substring() {
        let rule = TriggerRule::new("hi", &["greeting"]);
        assert!(rule.matches("hi there"));
        assert!(rule.matches("this is fine"));
        assert!(!rule.matches("hello"));
    }
}
