use crate::error::ContactResult;
use crate::models::{Contact, NewContact};
use crate::repositories::traits::ContactRepository;
use crate::store::ContactStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Contact repository backed by a shared in-memory `ContactStore`.
///
/// Clones share the same store. Adds take the write lock and reads take the
/// read lock, so a reader never observes a contact mid-insert.
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    store: Arc<RwLock<ContactStore>>,
}

impl InMemoryContactRepository {
    /// Create a repository over a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository over an existing store.
    pub fn with_store(store: ContactStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn add_contact(&self, contact: NewContact) -> ContactResult<Contact> {
        let mut store = self.store.write().await;
        match store.add(contact) {
            Ok(added) => {
                debug!(count = store.len(), "Contact added: {}", added.full_name());
                Ok(added)
            }
            Err(e) => {
                debug!("Contact rejected: {}", e);
                Err(e)
            }
        }
    }

    async fn get_all_contacts(&self) -> Vec<Contact> {
        self.store.read().await.get_all_contacts().to_vec()
    }

    async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}
