//! HTTP client module
//!
//! Provides the transport used to reach the catalog API.
//!
//! # Features
//!
//! - **Single attempt**: no retries or backoff, failures surface immediately
//! - **Rate Limiting**: Token bucket rate limiter using governor

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, TextResponse};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
