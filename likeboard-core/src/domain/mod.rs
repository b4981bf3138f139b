//! Core domain types
//!
//! These types mirror the JSON shapes the remote collection API serves and
//! are shared between the HTTP client and the CLI screen.

pub mod repository;
