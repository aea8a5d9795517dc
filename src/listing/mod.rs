//! Listing module
//!
//! Cursor-paginated collections: the request/result values and the
//! `ListingSource` abstraction that performs a page fetch.
//!
//! # Wire format
//!
//! `GET {collection}?next_token={token}` returns
//! `{ "collection": [...], "next_token": "..." }`. An empty `next_token`
//! in the response means there is no further page.

mod source;
mod types;

pub use source::{HttpListingSource, ListingSource};
pub use types::{ListingItem, ListingRequest, ListingResult, TemplateMeta, NEXT_TOKEN_PARAM};
