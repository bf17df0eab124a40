//! Contact Manager - an in-memory store of validated contacts.
//!
//! A contact is a first name, last name and phone number, none of which may
//! be absent or empty. Invalid input is rejected with `InvalidContactError`
//! and leaves the store unchanged; valid input is appended in order.
//!
//! # Architecture
//!
//! - **models**: The validated `Contact` and unvalidated `NewContact` input
//! - **store**: `ContactStore`, the append-only collection
//! - **repositories**: Async, shareable access to a store
//! - **import**: Phone number and record lists for bulk input
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::Config;
pub use error::{ConfigError, ContactField, ImportError, InvalidContactError};
pub use models::{Contact, NewContact};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use store::ContactStore;
