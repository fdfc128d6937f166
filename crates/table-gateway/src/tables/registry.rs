//! In-memory table registry
//!
//! Maps table ids to the table instance currently occupying them. Creating a
//! table under an id that is already in use replaces the old instance; delayed
//! work holding the old instance detects this through its `instance` identity.

use dashmap::DashMap;
use std::sync::Arc;
use table_core::{Table, TableId, TableRegistry};

/// Registry of live tables
#[derive(Default)]
pub struct InMemoryTableRegistry {
    tables: DashMap<TableId, Arc<Table>>,
}

impl InMemoryTableRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a table, replacing any table with the same id
    pub fn create_table(&self, id: TableId, name: impl Into<String>, replay: bool) -> Arc<Table> {
        let table = Table::new(id, name, replay);
        self.insert(Arc::clone(&table));
        table
    }

    /// Register an existing table, returning the instance it replaced
    pub fn insert(&self, table: Arc<Table>) -> Option<Arc<Table>> {
        let id = table.id();
        let replaced = self.tables.insert(id, table);

        tracing::debug!(table_id = %id, replaced = replaced.is_some(), "Table registered");

        replaced
    }

    /// Destroy a table
    pub fn remove(&self, id: TableId) -> Option<Arc<Table>> {
        let removed = self.tables.remove(&id).map(|(_, table)| table);

        if removed.is_some() {
            tracing::debug!(table_id = %id, "Table removed");
        }

        removed
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableRegistry for InMemoryTableRegistry {
    fn get_table(&self, table_id: TableId) -> Option<Arc<Table>> {
        self.tables.get(&table_id).map(|r| Arc::clone(r.value()))
    }
}

impl std::fmt::Debug for InMemoryTableRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTableRegistry")
            .field("tables", &self.tables.len())
            .finish()
    }
}
