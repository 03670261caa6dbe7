#![allow(dead_code)]

use std::sync::Arc;
use wayline::{MemoryHistory, Navigator, Path, Routes, RoutesBuilder, testing::RenderRecorder};

// ============================================================================
// Test Views
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    User,
    NotFound,
    Sidebar,
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn path(raw: &str) -> Path {
    Path::parse(raw).unwrap()
}

/// A navigator over a fresh in-memory history and an isolated store.
pub struct App {
    pub history: Arc<MemoryHistory>,
    pub navigator: Navigator,
    pub renders: RenderRecorder<Page>,
}

impl App {
    pub fn at(start: &str) -> Self {
        let history = Arc::new(MemoryHistory::new(path(start)));
        let navigator = Navigator::new(history.clone()).unwrap();
        Self {
            history,
            navigator,
            renders: RenderRecorder::new(),
        }
    }

    /// A builder with `/` → Home and `/about` → About, recording renders.
    pub fn routes(&self) -> RoutesBuilder<Page> {
        Routes::builder(self.navigator.store())
            .route("/", Page::Home)
            .route("/about", Page::About)
            .on_render(self.renders.callback())
    }
}
