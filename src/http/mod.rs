//! HTTP client module
//!
//! Provides the HTTP client every API wrapper is built on.
//!
//! # Features
//!
//! - **Injected Base URL**: every client is bound to one configured server
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Single Attempt**: failures surface immediately, no automatic retry

mod client;
mod rate_limit;

pub use client::{item_path, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestBody, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
