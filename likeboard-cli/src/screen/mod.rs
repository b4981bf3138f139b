//! Repository list screen
//!
//! The stateful half of the CLI: a controller that keeps an in-memory
//! sequence of repositories synchronized with the remote API, and a pure
//! render pass that turns that sequence into text.

pub mod controller;
pub mod render;

pub use controller::RepositoryListController;
