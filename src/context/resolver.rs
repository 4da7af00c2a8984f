//! Fact lookup for a user prompt
//!
//! Trigger rules are tried first, in declared order; the first rule whose
//! lookup yields facts wins. Otherwise the leading prompt words are matched
//! against topic ids and fact text. Store failures never escape: they are
//! logged and read as "no context".

use crate::config::GraphConfig;
use crate::facts::{GraphStore, Topic, TriggerRule, TRIGGER_RULES};
use crate::metrics::METRICS;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Header line placed above the bulleted facts
pub const CONTEXT_HEADER: &str = "Relevant facts from knowledge base:";

/// Which lookup path produced the context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    Trigger(&'static str),
    Keyword,
    None,
}

impl ContextSource {
    pub fn label(&self) -> &'static str {
        match self {
            ContextSource::Trigger(_) => "trigger",
            ContextSource::Keyword => "keyword",
            ContextSource::None => "none",
        }
    }
}

impl fmt::Display for ContextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextSource::Trigger(trigger) => write!(f, "trigger '{}'", trigger),
            other => f.write_str(other.label()),
        }
    }
}

/// Facts resolved for one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContext {
    pub source: ContextSource,
    pub facts: Vec<String>,
}

impl ResolvedContext {
    pub fn empty() -> Self {
        Self {
            source: ContextSource::None,
            facts: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Header plus one `- fact` line per fact, or `""` when there are none
    pub fn render(&self) -> String {
        if self.facts.is_empty() {
            return String::new();
        }
        let bullets: Vec<String> = self.facts.iter().map(|f| format!("- {}", f)).collect();
        format!("{}\n{}", CONTEXT_HEADER, bullets.join("\n"))
    }
}

/// Resolves prompts to facts from the graph store
pub struct ContextResolver {
    store: Arc<dyn GraphStore>,
    rules: Vec<TriggerRule>,
    max_results: usize,
    max_keywords: usize,
}

impl ContextResolver {
    /// Resolver using the built-in trigger rules
    pub fn new(store: Arc<dyn GraphStore>, config: &GraphConfig) -> Self {
        Self::with_rules(store, TRIGGER_RULES.to_vec(), config)
    }

    pub fn with_rules(
        store: Arc<dyn GraphStore>,
        rules: Vec<TriggerRule>,
        config: &GraphConfig,
    ) -> Self {
        Self {
            store,
            rules,
            max_results: config.max_results,
            max_keywords: config.max_keywords,
        }
    }

    /// Formatted context block for `prompt`, or `""`
    pub async fn resolve(&self, prompt: &str) -> String {
        self.lookup(prompt).await.render()
    }

    /// Look up facts for `prompt`
    pub async fn lookup(&self, prompt: &str) -> ResolvedContext {
        let normalized = prompt.to_lowercase();

        let resolved = match self.lookup_triggers(&normalized).await {
            Some(resolved) => resolved,
            None => self.lookup_keywords(&normalized).await,
        };

        METRICS.record_context(resolved.source.label());
        debug!("Resolved {} facts via {}", resolved.facts.len(), resolved.source);
        resolved
    }

    async fn lookup_triggers(&self, normalized: &str) -> Option<ResolvedContext> {
        for rule in self.rules.iter().filter(|r| r.matches(normalized)) {
            match self.store.topics_by_ids(rule.topic_ids, self.max_results).await {
                Ok(topics) => {
                    let facts = usable_facts(topics);
                    if !facts.is_empty() {
                        return Some(ResolvedContext {
                            source: ContextSource::Trigger(rule.trigger),
                            facts,
                        });
                    }
                }
                Err(e) => {
                    METRICS.record_store_error("trigger_lookup");
                    warn!("Trigger lookup for '{}' failed: {}", rule.trigger, e);
                }
            }
        }
        None
    }

    async fn lookup_keywords(&self, normalized: &str) -> ResolvedContext {
        let words: Vec<&str> = normalized.split_whitespace().take(self.max_keywords).collect();
        if words.is_empty() {
            return ResolvedContext::empty();
        }

        match self.store.topics_mentioning(&words, self.max_results).await {
            Ok(topics) => {
                let facts = usable_facts(topics);
                if facts.is_empty() {
                    ResolvedContext::empty()
                } else {
                    ResolvedContext {
                        source: ContextSource::Keyword,
                        facts,
                    }
                }
            }
            Err(e) => {
                METRICS.record_store_error("keyword_lookup");
                warn!("Keyword lookup failed: {}", e);
                ResolvedContext::empty()
            }
        }
    }
}

fn usable_facts(topics: Vec<Topic>) -> Vec<String> {
    topics
        .into_iter()
        .map(|t| t.fact)
        .filter(|f| !f.is_empty())
        .collect()
}
