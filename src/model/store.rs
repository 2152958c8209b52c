//! Model snapshot store.

use std::sync::Arc;

use super::SemanticModel;

/// Holds the active model snapshot.
///
/// `set` replaces the snapshot wholesale; there is no merge path, so a
/// reader never sees a mix of old and new tables. Requests capture the
/// `Arc` once up front and read that snapshot for their whole lifetime;
/// if dispatch is ever parallelized, the single-reference swap is the
/// only discipline that has to hold.
#[derive(Debug, Clone)]
pub struct ModelStore {
    current: Arc<SemanticModel>,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore {
    /// Start with the empty-model sentinel.
    pub fn new() -> Self {
        Self {
            current: Arc::new(SemanticModel::empty()),
        }
    }

    /// Install a new snapshot, visible to all subsequent reads.
    pub fn set(&mut self, model: SemanticModel) {
        self.current = Arc::new(model);
    }

    /// The active snapshot.
    pub fn current(&self) -> Arc<SemanticModel> {
        Arc::clone(&self.current)
    }
}
