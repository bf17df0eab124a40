//! Data models for the contact manager.
//!
//! This module contains the validated contact record and the unvalidated
//! input it is built from.

pub mod contact;

pub use contact::{Contact, NewContact};
