//! # History Backends
//!
//! Implementations of [`History`](wayline_core::History):
//!
//! | Backend | Use Case |
//! |---------|----------|
//! | [`MemoryHistory`] | Tests, native targets, server-side rendering |
//! | `BrowserHistory` | `window.history` on `wasm32` (feature `web`) |

mod memory;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod browser;

pub use memory::MemoryHistory;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use browser::BrowserHistory;
