//! In-memory contact store.
//!
//! `ContactStore` validates incoming contacts and keeps the accepted ones in
//! insertion order. It has a single mutating operation (add) and a read-only
//! view of everything added so far.

use crate::error::ContactResult;
use crate::models::{Contact, NewContact};

/// An ordered, append-only collection of validated contacts.
///
/// Every contact held by the store has a non-empty first name, last name and
/// phone number. Duplicates are allowed.
///
/// # Example
///
/// ```
/// use contact_manager::ContactStore;
///
/// let mut store = ContactStore::new();
/// store.add_contact("Suyog", "Patil", "8329763258").unwrap();
/// assert_eq!(store.len(), 1);
/// assert!(store.add_contact("Suyog", "Patil", "").is_err());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a contact built from three present values.
    ///
    /// Empty values are rejected the same way absent ones are in [`add`](Self::add).
    pub fn add_contact(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> ContactResult<Contact> {
        self.add(NewContact::new(first_name, last_name, phone_number))
    }

    /// Validate and append a contact whose fields may be absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidContactError` if any field is absent or empty. The
    /// store is left untouched in that case.
    pub fn add(&mut self, input: NewContact) -> ContactResult<Contact> {
        let contact = input.validate()?;
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    /// All contacts, in insertion order.
    pub fn get_all_contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether no contact has been added yet.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
