//! Networking modules for the check backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the single-exchange seam, `client` adds JSON and error
//! policy on top, `api` names the endpoints, and `types` defines the wire
//! schema.

pub mod api;
pub mod client;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;
pub mod types;
