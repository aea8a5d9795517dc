//! Fetch module
//!
//! The data fetch controller: issues listing requests, exposes
//! `{ is_loading, data, error }`, and guarantees last-request-wins.

mod controller;

pub use controller::{FetchController, FetchState, Ticket};
