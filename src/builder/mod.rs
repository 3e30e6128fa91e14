//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder and a macro for defining actions
//! with minimal boilerplate while keeping the action set a closed sum type.

pub mod error;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;
