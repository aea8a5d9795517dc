//! Pagination module
//!
//! Cursor-based Next/Previous navigation.
//!
//! # Overview
//!
//! The backend addresses pages by opaque continuation token, not by number.
//! [`PaginationState`] records every token visited so the user can step back;
//! [`Navigator`] turns Next/Previous clicks into listing requests on a
//! [`crate::fetch::FetchController`].
//!
//! Offset pagination (`page`/`per_page`) used by the lists and campaigns
//! endpoints is a different model and lives in [`crate::api::PageParams`].

mod navigator;
mod state;

pub use navigator::Navigator;
pub use state::PaginationState;

#[cfg(test)]
mod tests;
