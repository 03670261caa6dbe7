//! # wayline - Minimal Client-Side Router
//!
//! `wayline` matches the current location against a statically declared set
//! of paths and renders exactly one view. It is a store, a selector and a
//! navigation side-channel; rendering itself belongs to the surrounding UI
//! engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wayline::{MemoryHistory, Navigator, Path, Routes};
//!
//! let history = Arc::new(MemoryHistory::new(Path::parse("/a").unwrap()));
//! let navigator = Navigator::new(history.clone()).unwrap();
//!
//! let routes = Routes::builder(navigator.store())
//!     .route("/a", "page A")
//!     .route("/b", "page B")
//!     .mount();
//! assert_eq!(routes.view(), Some("page A"));
//!
//! navigator.navigate("/b").unwrap();
//! assert_eq!(routes.view(), Some("page B"));
//!
//! navigator.back().unwrap();
//! assert_eq!(routes.view(), Some("page A"));
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! Link click ──► Navigator ──► History.push
//!                    │
//!                    ▼
//!             LocationStore.set ──► subscribers ──► Routes re-evaluates
//!                    ▲
//! back/forward ──► History pop listener
//! ```
//!
//! ## Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `tracing` (default) | Structured logs from every crate via `tracing` |
//! | `matchit` | `MatchitSelector` |
//! | `macros` | The [`routes!`] macro |
//! | `web` | `BrowserHistory` on `wasm32` |

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use wayline_core::{
    // Error types
    BoxError,
    // History
    History,
    HistoryError,
    NavigationError,
    // Routes
    Node,
    Params,
    // Path
    Path,
    PathError,
    PopListener,
    RouteDeclaration,
    RouteMatch,
    RouteResult,
    RouteTable,
    // Selection
    Selector,
    WaylineError,
};

pub use wayline_std::{
    binding::{LocationBinding, use_location},
    history::MemoryHistory,
    link::{ClickEvent, Link, LinkOutcome, Modifiers, MouseButton},
    navigator::Navigator,
    routes::{RenderCallback, RouteState, Routes, RoutesBuilder},
    selectors::{ExactSelector, SegmentSelector},
    store::{LocationStore, Subscription, WeakLocationStore},
};

#[cfg(feature = "matchit")]
pub use wayline_std::selectors::MatchitSelector;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use wayline_std::history::BrowserHistory;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use wayline_std::testing::*;
}

/// Prelude module - common imports for Wayline.
///
/// # Usage
///
/// ```rust
/// use wayline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Navigation
        ClickEvent,
        // History
        History,
        Link,
        LocationStore,
        MemoryHistory,
        NavigationError,
        Navigator,
        // Routes
        Node,
        Path,
        Routes,
        SegmentSelector,
        Selector,
        use_location,
    };
}

#[cfg(feature = "macros")]
pub use wayline_macros::routes;
