//! Headless view model for listing screens
//!
//! Decides what a listing screen shows from the fetch and pagination state:
//! a loading placeholder, the empty-state message, or a table with pager
//! controls. Also defines the routes a screen can navigate to.

mod listing;
mod route;

pub use listing::{ListingView, PagerControls, RowAction, PLACEHOLDER_ROWS};
pub use route::{Route, Router};
