//! Delete module
//!
//! Out-of-band deletion with a confirmation dialog and a refresh of the
//! current page afterwards.

mod coordinator;

pub use coordinator::{ConfirmDelete, DeleteCoordinator, Deleter, HttpDeleter};

#[cfg(test)]
mod tests;
