use crate::types::Category;
use std::collections::HashMap;

/// Assigns dense category ids to grouping keys in first-seen order.
///
/// The registry is run-scoped: the assembler owns one per pipeline invocation,
/// so repeated runs (and tests) always start from an empty mapping. Ids are
/// assigned exactly once per distinct key and never reassigned, which makes the
/// emitted category list's order equal to first-appearance order as long as
/// notes are processed in a fixed order.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl CategoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `key`, allocating the next unused one if it is new.
    ///
    /// Lookup and allocation are a single step, so a note's category is fixed
    /// at the moment its node is created.
    pub fn assign(&mut self, key: &str) -> usize {
        if let Some(&id) = self.ids.get(key) {
            return id;
        }

        let id = self.names.len();
        self.ids.insert(key.to_string(), id);
        self.names.push(key.to_string());
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the registry, producing the category list sorted by id
    #[must_use]
    pub fn into_categories(self) -> Vec<Category> {
        self.names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Category { name, id })
            .collect()
    }
}
