//! Networking for the activities endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and reply classification, `error` the
//! submission error taxonomy, and `fetch` the browser transport.

pub mod api;
pub mod error;
#[cfg(feature = "hydrate")]
pub mod fetch;
