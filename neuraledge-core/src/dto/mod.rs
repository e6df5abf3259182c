//! Data Transfer Objects
//!
//! Request and response shapes of the catalog HTTP API. Shared by the
//! server (serializes) and the client (deserializes).

pub mod catalog;
pub mod workflow;
