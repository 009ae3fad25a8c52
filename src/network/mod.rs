//! HTTP networking module
//!
//! Provides the client used for store round trips. The client is constructed
//! once at startup and passed by reference; there is no lazily-initialized
//! global.

mod client;

pub use client::{StoreClient, StoreResponse};
