//! Actions applied to scan results.

pub mod delete;

pub use delete::{delete_selected, DeletionError};
