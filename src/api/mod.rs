//! Lookup service integration
//!
//! The shell talks to the service only through [`DomainApi`], so the HTTP
//! client can be swapped for any other implementation.

pub mod client;

pub use client::ApiClient;

use crate::error::Result;
use crate::types::LookupResponse;
use async_trait::async_trait;

/// Remote domain lookup capability
#[async_trait]
pub trait DomainApi: Send + Sync {
    /// Check whether a single domain can be registered
    async fn check_availability(&self, domain: &str) -> Result<LookupResponse>;

    /// Get alternative domains related to the query
    async fn suggest_domains(&self, domain: &str) -> Result<LookupResponse>;
}
