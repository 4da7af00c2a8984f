//! Graph store backed by FalkorDB
//!
//! FalkorDB speaks the Redis protocol: every query is a `GRAPH.QUERY`
//! command. Parameters travel in a `CYPHER name=value ...` prefix so user
//! text never gets spliced into the query body.

use super::models::*;
use super::store::GraphStore;
use crate::config::GraphConfig;
use crate::error::{RelayError, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::Value;
use tokio::sync::OnceCell;
use tracing::debug;

/// Query parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Str(String),
    List(Vec<String>),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Str(value.to_string())
    }
}

impl From<Vec<String>> for Param {
    fn from(value: Vec<String>) -> Self {
        Param::List(value)
    }
}

impl Param {
    fn encode(&self) -> String {
        match self {
            Param::Str(s) => quote(s),
            Param::List(items) => {
                let inner: Vec<String> = items.iter().map(|s| quote(s)).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Prefix `cypher` with its parameter header
pub fn encode_query(cypher: &str, params: &[(&str, Param)]) -> String {
    if params.is_empty() {
        return cypher.to_string();
    }
    let header: Vec<String> = params
        .iter()
        .map(|(name, value)| format!("{}={}", name, value.encode()))
        .collect();
    format!("CYPHER {} {}", header.join(" "), cypher)
}

/// Rows of a `GRAPH.QUERY` reply, cells rendered as text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    /// First cell of the first row parsed as an integer
    pub fn scalar(&self) -> Option<i64> {
        self.rows.first()?.first()?.as_ref()?.parse().ok()
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Rows decoded as topics through the `id`, `category` and `fact`
    /// columns. Rows without an id are dropped.
    pub fn topics(&self) -> Vec<Topic> {
        let Some(id) = self.column("id") else {
            return Vec::new();
        };
        let category = self.column("category");
        let fact = self.column("fact");

        self.rows
            .iter()
            .filter_map(|row| {
                let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i).cloned().flatten());
                Some(Topic {
                    id: cell(Some(id))?,
                    category: cell(category).unwrap_or_default(),
                    fact: cell(fact).unwrap_or_default(),
                })
            })
            .collect()
    }
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::Nil => None,
        Value::Int(i) => Some(i.to_string()),
        Value::Data(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Value::Status(s) => Some(s.clone()),
        Value::Okay => Some("OK".to_string()),
        _ => None,
    }
}

/// Decode a verbose-mode `GRAPH.QUERY` reply.
///
/// Writes without `RETURN` answer with statistics only; reads answer with
/// `[header, rows, statistics]`.
pub fn parse_reply(value: Value) -> Result<QueryResult> {
    let sections = match value {
        Value::Bulk(sections) => sections,
        other => {
            return Err(RelayError::Store(format!(
                "unexpected GRAPH.QUERY reply: {:?}",
                other
            )))
        }
    };

    if sections.len() < 3 {
        return Ok(QueryResult::default());
    }

    let columns = match &sections[0] {
        Value::Bulk(cols) => cols.iter().filter_map(cell_text).collect(),
        _ => Vec::new(),
    };

    let rows = match &sections[1] {
        Value::Bulk(rows) => rows
            .iter()
            .map(|row| match row {
                Value::Bulk(cells) => cells.iter().map(cell_text).collect(),
                _ => Vec::new(),
            })
            .collect(),
        _ => Vec::new(),
    };

    Ok(QueryResult { columns, rows })
}

const UPSERT_TOPIC: &str = "MERGE (n:Topic {id: $id}) SET n.category = $category, n.fact = $fact";

const UPSERT_RELATION: &str = "MATCH (a:Topic {id: $source}), (b:Topic {id: $target}) \
     MERGE (a)-[r:RELATED {relation: $relation}]->(b) RETURN count(r)";

/// FalkorDB graph store
pub struct FalkorStore {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
    graph_name: String,
}

impl FalkorStore {
    /// Create a store for `config`. The connection is opened on first use,
    /// so an unreachable server does not prevent startup.
    pub fn new(config: &GraphConfig) -> Result<Self> {
        let client = redis::Client::open(config.redis_url())?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
            graph_name: config.graph_name.clone(),
        })
    }

    pub fn graph_name(&self) -> &str {
        &self.graph_name
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async { self.client.get_connection_manager().await })
            .await?;
        Ok(conn.clone())
    }

    /// Run one parameterized query against the configured graph
    pub async fn query(&self, cypher: &str, params: &[(&str, Param)]) -> Result<QueryResult> {
        let query = encode_query(cypher, params);
        debug!(graph = %self.graph_name, "GRAPH.QUERY {}", query);

        let mut conn = self.connection().await?;
        let reply: Value = redis::cmd("GRAPH.QUERY")
            .arg(&self.graph_name)
            .arg(query)
            .query_async(&mut conn)
            .await?;

        parse_reply(reply)
    }

    async fn topics(&self, cypher: &str, params: &[(&str, Param)]) -> Result<Vec<Topic>> {
        Ok(self.query(cypher, params).await?.topics())
    }
}

#[async_trait]
impl GraphStore for FalkorStore {
    async fn upsert_topic(&self, topic: &Topic) -> Result<()> {
        self.query(
            UPSERT_TOPIC,
            &[
                ("id", topic.id.as_str().into()),
                ("category", topic.category.as_str().into()),
                ("fact", topic.fact.as_str().into()),
            ],
        )
        .await?;
        Ok(())
    }

    async fn upsert_relation(&self, relation: &Relation) -> Result<bool> {
        let result = self
            .query(
                UPSERT_RELATION,
                &[
                    ("source", relation.source.as_str().into()),
                    ("target", relation.target.as_str().into()),
                    ("relation", relation.relation.as_str().into()),
                ],
            )
            .await?;
        Ok(result.scalar().unwrap_or(0) > 0)
    }

    async fn topics_by_ids(&self, ids: &[&str], limit: usize) -> Result<Vec<Topic>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let cypher = format!(
            "MATCH (n:Topic) WHERE n.id IN $ids \
             RETURN n.id AS id, n.category AS category, n.fact AS fact LIMIT {}",
            limit
        );
        let ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        self.topics(&cypher, &[("ids", ids.into())]).await
    }

    async fn topics_mentioning(&self, words: &[&str], limit: usize) -> Result<Vec<Topic>> {
        if words.is_empty() {
            return Ok(Vec::new());
        }
        let names: Vec<String> = (0..words.len()).map(|i| format!("w{}", i)).collect();
        let predicate = names
            .iter()
            .map(|name| format!("n.id CONTAINS ${name} OR n.fact CONTAINS ${name}"))
            .collect::<Vec<_>>()
            .join(" OR ");
        let cypher = format!(
            "MATCH (n:Topic) WHERE {} \
             RETURN n.id AS id, n.category AS category, n.fact AS fact LIMIT {}",
            predicate, limit
        );
        let params: Vec<(&str, Param)> = names
            .iter()
            .zip(words)
            .map(|(name, word)| (name.as_str(), Param::from(*word)))
            .collect();
        self.topics(&cypher, &params).await
    }

    async fn counts(&self) -> Result<GraphCounts> {
        let nodes = self.query("MATCH (n:Topic) RETURN count(n)", &[]).await?;
        let edges = self
            .query("MATCH (:Topic)-[r:RELATED]->(:Topic) RETURN count(r)", &[])
            .await?;
        Ok(GraphCounts {
            nodes: nodes.scalar().unwrap_or(0) as usize,
            edges: edges.scalar().unwrap_or(0) as usize,
        })
    }
}
