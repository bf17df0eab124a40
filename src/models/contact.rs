//! Contact model representing a person in the contact manager.

use crate::error::{ContactField, ContactResult, InvalidContactError};
use serde::{Deserialize, Serialize};

/// A validated contact.
///
/// All three fields are guaranteed to be non-empty. The only way to obtain a
/// `Contact` is through validation, either [`Contact::new`] or
/// deserialization, so a `Contact` can never hold a missing field.
///
/// # Example
///
/// ```
/// use contact_manager::Contact;
///
/// let contact = Contact::new("Suyog", "Patil", "8329763258").unwrap();
/// assert_eq!(contact.first_name(), "Suyog");
/// assert!(Contact::new("", "Patil", "8329763258").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NewContact")]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    /// Create a new contact, validating that no field is empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidContactError` naming the first empty field
    /// (checked in order: first name, last name, phone number).
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> ContactResult<Self> {
        NewContact::new(first_name, last_name, phone_number).validate()
    }

    /// First name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Phone number, exactly as given
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Full name, first then last.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether all three fields equal the given values exactly.
    pub fn matches(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}

/// Unvalidated contact input.
///
/// Any field may be absent. An absent field and an empty one are treated
/// the same way: both are rejected by [`NewContact::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl NewContact {
    /// Create input with all three fields present.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
        }
    }

    /// Turn this input into a `Contact`, or report the first missing field.
    pub fn validate(self) -> ContactResult<Contact> {
        let first_name = required(self.first_name, ContactField::FirstName)?;
        let last_name = required(self.last_name, ContactField::LastName)?;
        let phone_number = required(self.phone_number, ContactField::PhoneNumber)?;

        Ok(Contact {
            first_name,
            last_name,
            phone_number,
        })
    }
}

impl TryFrom<NewContact> for Contact {
    type Error = InvalidContactError;

    fn try_from(input: NewContact) -> ContactResult<Self> {
        input.validate()
    }
}

impl From<Contact> for NewContact {
    fn from(contact: Contact) -> Self {
        Self {
            first_name: Some(contact.first_name),
            last_name: Some(contact.last_name),
            phone_number: Some(contact.phone_number),
        }
    }
}

fn required(value: Option<String>, field: ContactField) -> ContactResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(InvalidContactError::missing(field)),
    }
}
