//! Likeboard Core
//!
//! Core types for the likeboard clients.
//!
//! This crate contains:
//! - Domain types: the `Repository` entity served by the collection API
//! - DTOs: request payloads sent to the API

pub mod domain;
pub mod dto;
