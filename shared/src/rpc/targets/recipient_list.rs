use std::collections::HashSet;

use crate::types::ClientId;

/// Ordered, duplicate-free list of client ids that keeps its capacity across
/// `clear` calls
#[derive(Clone, Debug, Default)]
pub(crate) struct RecipientList {
    ids: Vec<ClientId>,
    index: HashSet<ClientId>,
}

impl RecipientList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            index: HashSet::with_capacity(capacity),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
        self.index.clear();
    }

    /// Returns false if `client_id` was already present
    pub(crate) fn insert(&mut self, client_id: ClientId) -> bool {
        if !self.index.insert(client_id) {
            return false;
        }
        self.ids.push(client_id);
        true
    }

    pub(crate) fn remove(&mut self, client_id: ClientId) {
        if self.index.remove(&client_id) {
            self.ids.retain(|id| *id != client_id);
        }
    }

    pub(crate) fn contains(&self, client_id: ClientId) -> bool {
        self.index.contains(&client_id)
    }

    pub(crate) fn as_slice(&self) -> &[ClientId] {
        &self.ids
    }

    /// Drops the backing storage
    pub(crate) fn release(&mut self) {
        self.ids = Vec::new();
        self.index = HashSet::new();
    }
}
