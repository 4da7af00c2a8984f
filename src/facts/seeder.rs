//! Startup seeding of the fact graph

use super::catalog::Catalog;
use super::store::GraphStore;
use crate::error::Result;
use crate::metrics::METRICS;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome of one seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub topics: usize,
    pub relations: usize,
    /// Edges not written because an endpoint id has no topic
    pub skipped_relations: usize,
}

/// Upsert every topic, then every relation, of `catalog`.
///
/// Stops at the first store error. Safe to repeat: writes are MERGEs.
pub async fn seed(store: &dyn GraphStore, catalog: &Catalog) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for topic in &catalog.topics {
        store.upsert_topic(topic).await?;
        report.topics += 1;
    }

    for relation in &catalog.relations {
        if store.upsert_relation(relation).await? {
            report.relations += 1;
        } else {
            debug!(
                "Skipped relation {} -[{}]-> {}: endpoint missing",
                relation.source, relation.relation, relation.target
            );
            report.skipped_relations += 1;
        }
    }

    Ok(report)
}

/// Seed the store, logging instead of failing when it is unavailable
pub async fn ensure_seeded(
    store: &dyn GraphStore,
    catalog: &Catalog,
    graph_name: &str,
) -> Option<SeedReport> {
    match seed(store, catalog).await {
        Ok(report) => {
            info!(
                "Knowledge graph '{}' initialized with {} nodes and {} edges ({} skipped)",
                graph_name, report.topics, report.relations, report.skipped_relations
            );
            Some(report)
        }
        Err(e) => {
            METRICS.record_store_error("seed");
            warn!("Knowledge graph '{}' not seeded, it may already exist: {}", graph_name, e);
            None
        }
    }
}
