//! NeuralEdge Core
//!
//! Core types for the NeuralEdge workflow catalog.
//!
//! This crate contains:
//! - Domain types: catalog entities (WorkflowRecord, Complexity, etc.)
//! - DTOs: request and response shapes shared by the server, client and CLI

pub mod domain;
pub mod dto;
