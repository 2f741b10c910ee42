use dashmap::DashMap;

use crate::models::{DocType, StoredDoc};

/// In-memory document store with per-doctype name series. One store per
/// server instance; tests get fresh state with every spawn.
pub struct DocStore {
    docs: DashMap<(DocType, String), StoredDoc>,
    counters: DashMap<DocType, u32>,
}

impl DocStore {
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
            counters: DashMap::new(),
        }
    }

    /// Create a draft. Submittable doctypes are named from their series;
    /// entity doctypes take the caller's name.
    pub fn create(&self, doctype: DocType, requested_name: Option<String>) -> StoredDoc {
        let name = match doctype.series_prefix() {
            Some(prefix) => {
                let mut counter = self.counters.entry(doctype).or_insert(0);
                *counter += 1;
                format!("{}{:05}", prefix, *counter)
            }
            None => requested_name.unwrap_or_else(|| "Created".to_string()),
        };

        let doc = StoredDoc {
            name: name.clone(),
            docstatus: 0,
        };
        self.docs.insert((doctype, name), doc.clone());
        doc
    }

    pub fn get(&self, doctype: DocType, name: &str) -> Option<StoredDoc> {
        self.docs
            .get(&(doctype, name.to_string()))
            .map(|entry| entry.value().clone())
    }

    /// Mark a stored document submitted and return its new state.
    pub fn submit(&self, doctype: DocType, name: &str) -> Option<StoredDoc> {
        self.docs
            .get_mut(&(doctype, name.to_string()))
            .map(|mut entry| {
                entry.docstatus = 1;
                entry.value().clone()
            })
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}
