//! Data access collaborator.
//!
//! The framework does not own a database driver. It consumes any backend
//! implementing [`DataAccess`]: parametrized query execution returning an
//! ordered sequence of column-name to value mappings. A [`DbHandle`] is
//! created per request context and instantiates the backend lazily on first
//! use, reusing it for the context's lifetime.

use std::collections::HashMap;
use std::sync::Arc;

/// A single result row: column name to value.
pub type Row = HashMap<String, String>;

/// Parametrized query execution against some relational store.
pub trait DataAccess: Send {
    fn execute(&mut self, sql: &str, params: &[&str]) -> anyhow::Result<Vec<Row>>;
}

/// Produces a fresh backend connection for a request context.
pub type DataAccessFactory = Arc<dyn Fn() -> Box<dyn DataAccess> + Send + Sync>;

/// Lazy per-request handle to the data access backend.
pub struct DbHandle {
    factory: DataAccessFactory,
    conn: Option<Box<dyn DataAccess>>,
}

impl DbHandle {
    pub fn new(factory: DataAccessFactory) -> Self {
        Self { factory, conn: None }
    }

    /// Runs a query, instantiating the backend on first use.
    pub fn execute(&mut self, sql: &str, params: &[&str]) -> anyhow::Result<Vec<Row>> {
        let conn = self.conn.get_or_insert_with(|| (self.factory)());
        conn.execute(sql, params)
    }

    /// Whether the backend has been instantiated yet.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }
}

/// Canned-row backend for tests and demo wiring. Answers every query with
/// the same rows and records the queries it saw.
pub struct FixedRows {
    rows: Vec<Row>,
    queries: Vec<String>,
}

impl FixedRows {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows, queries: Vec::new() }
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }
}

impl DataAccess for FixedRows {
    fn execute(&mut self, sql: &str, _params: &[&str]) -> anyhow::Result<Vec<Row>> {
        self.queries.push(sql.to_string());
        Ok(self.rows.clone())
    }
}
