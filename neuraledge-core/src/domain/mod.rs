//! Core domain types
//!
//! These types describe the workflow catalog as it is stored in the catalog
//! source file. They carry structure only; filtering and derivation live in
//! `neuraledge-catalog`.

pub mod catalog;
pub mod category;
pub mod workflow;
