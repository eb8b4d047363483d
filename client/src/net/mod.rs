//! Networking modules for the account and comparison API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues authenticated REST calls, `error` classifies failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
