use crate::error::ContactResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides a shareable, async abstraction over contact storage so that
/// callers holding the store across tasks see each operation as atomic.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Validate and store a new contact.
    async fn add_contact(&self, contact: NewContact) -> ContactResult<Contact>;

    /// Retrieve a snapshot of all contacts, in insertion order.
    async fn get_all_contacts(&self) -> Vec<Contact>;

    /// Number of stored contacts.
    async fn count(&self) -> usize;
}
