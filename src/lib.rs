// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Mail Badger dashboard client
//!
//! Client-side core of the Mail Badger dashboard: paginated listings driven
//! by opaque continuation tokens, with back navigation, refresh and
//! delete-then-refresh on top of a single "fetch with current token" action.
//!
//! ## Features
//!
//! - **Token Pagination**: Forward/back navigation over `next_token` pages
//! - **Last Request Wins**: Stale responses never overwrite newer ones
//! - **Delete Flow**: Confirm, delete, then re-fetch the current page
//! - **REST API**: Templates, lists, subscribers and campaigns
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mailbadger_client::{ApiClient, ClientConfig, FetchController, Navigator, TEMPLATES_PATH};
//!
//! #[tokio::main]
//! async fn main() -> mailbadger_client::Result<()> {
//!     let api = ApiClient::new(ClientConfig::from_env()?)?;
//!     let controller = FetchController::new(api.templates().listing_source());
//!     let mut nav = Navigator::new(controller, TEMPLATES_PATH);
//!
//!     nav.load();
//!     let page = nav.controller().settled().await?;
//!     println!("{} templates", page.data.items.len());
//!
//!     if nav.can_next() {
//!         nav.next();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              view: ListingView, Route, RowAction         │
//! └──────────────────────────────────────────────────────────┘
//!          │                                   │
//! ┌────────┴──────────┐              ┌─────────┴──────────┐
//! │ pagination        │              │ delete             │
//! │ Navigator         │◄─ refresh ───│ DeleteCoordinator  │
//! │ PaginationState   │              │ ConfirmDelete      │
//! └────────┬──────────┘              └─────────┬──────────┘
//!          │                                   │
//! ┌────────┴──────────┐   ┌──────────┐   ┌─────┴──────┐
//! │ fetch             │──►│ listing  │──►│ http       │
//! │ FetchController   │   │ Source   │   │ HttpClient │
//! └───────────────────┘   └──────────┘   └────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP client with rate limiting
pub mod http;

/// Listing requests, results and sources
pub mod listing;

/// Last-request-wins fetch state
pub mod fetch;

/// Continuation-token pagination
pub mod pagination;

/// Delete-then-refresh flow
pub mod delete;

/// Headless listing screen model
pub mod view;

/// Dashboard REST API
pub mod api;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_util;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::{ApiClient, TEMPLATES_PATH};
pub use config::ClientConfig;
pub use delete::{ConfirmDelete, DeleteCoordinator};
pub use fetch::{FetchController, FetchState};
pub use listing::{ListingRequest, ListingResult, ListingSource};
pub use pagination::{Navigator, PaginationState};
pub use view::{ListingView, Route};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
