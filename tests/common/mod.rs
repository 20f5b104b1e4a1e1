//! Shared test utilities

pub mod fixtures;
pub mod mock_source;

pub use fixtures::*;
pub use mock_source::{FetchCall, MockSource};
