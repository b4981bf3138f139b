//! Data Transfer Objects for the collection API
//!
//! Request payloads the client sends to the API. Responses reuse the domain
//! types directly.

pub mod repository;
