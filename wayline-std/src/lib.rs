//! # wayline-std
//!
//! Standard runtime for the Wayline client-side router.
//!
//! This crate provides:
//! - **Location store**: [`store::LocationStore`], the single writer of the current path
//! - **Navigation**: [`navigator::Navigator`] and [`link::Link`]
//! - **History backends**: [`history::MemoryHistory`], and `BrowserHistory` behind the `web` feature
//! - **Selectors**: exact, segment-wise, and `matchit`-backed matching
//! - **Routes container**: [`routes::Routes`], rendering one child per path
//! - **Location binding**: [`binding::use_location`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use wayline_core;

// Modules
pub mod binding;
pub mod history;
pub mod link;
pub mod navigator;
pub mod routes;
pub mod selectors;
pub mod store;
pub mod testing;
