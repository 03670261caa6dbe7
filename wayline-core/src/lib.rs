//! # wayline-core
//!
//! Core types and traits for the Wayline client-side router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! history backends and selector implementations that don't need the full
//! `wayline-std` runtime.
//!
//! # Layers
//!
//! ## Paths ([`Path`])
//!
//! The routing key. A validated, absolute path string compared exactly:
//! case-sensitive, with a significant trailing slash.
//!
//! ## Declarations ([`Node`], [`RouteDeclaration`], [`RouteTable`])
//!
//! Route declarations are explicit values collected into an ordered list of
//! children. A [`RouteTable`] is derived from those children on every render
//! pass; non-route children are inert and malformed declarations are dropped.
//!
//! ## Selection ([`Selector`])
//!
//! A pure function from a table and the current path to at most one
//! [`RouteMatch`]. Parameterized matching is an extension of this contract
//! and never changes the surrounding components.
//!
//! ## History ([`History`])
//!
//! The seam to the persisted navigation history. The browser's history
//! object in production, an in-memory stack everywhere else.
//!
//! # Error Types
//!
//! - [`WaylineError`] - Top-level error type
//! - [`PathError`] - Path validation errors
//! - [`HistoryError`] - History backend errors
//! - [`NavigationError`] - Navigation errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod history;
mod path;
mod route;
mod selector;

// Re-exports
pub use error::{BoxError, HistoryError, NavigationError, PathError, WaylineError};
pub use history::{History, PopListener};
pub use path::Path;
pub use route::{Node, Params, RouteDeclaration, RouteMatch, RouteTable};
pub use selector::{RouteResult, Selector};
