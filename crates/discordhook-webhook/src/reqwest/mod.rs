//! Reqwest-based HTTP client for webhook delivery.
//!
//! This module provides a reqwest-based implementation of the
//! [`WebhookProvider`](crate::WebhookProvider) trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use discordhook_webhook::reqwest::{ReqwestClient, ReqwestConfig};
//! use discordhook_webhook::WebhookService;
//!
//! // Create a client with default configuration
//! let client = ReqwestClient::default();
//!
//! // Convert to a service for dependency injection
//! let service: WebhookService = client.into_service();
//! ```

mod client;
mod config;

pub use client::ReqwestClient;
pub use config::{DEFAULT_TIMEOUT_SECS, ReqwestConfig};

/// Tracing target for reqwest client operations.
pub const TRACING_TARGET: &str = "discordhook_webhook::reqwest";
