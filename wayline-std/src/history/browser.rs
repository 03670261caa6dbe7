//! `window.history` backend for `wasm32` targets.

use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wayline_core::{History, HistoryError, Path, PopListener};

static LISTENING: AtomicBool = AtomicBool::new(false);

/// A history backend over the browser's session history.
///
/// Entries are created with `pushState`/`replaceState`, so navigating never
/// reloads the document. The `popstate` listener installed by
/// [`History::listen`] lives for the rest of the page's lifetime.
#[derive(Debug)]
pub struct BrowserHistory {
    _private: (),
}

impl BrowserHistory {
    /// Connects to the global `window`.
    pub fn new() -> Result<Self, HistoryError> {
        window()?;
        Ok(Self { _private: () })
    }
}

fn window() -> Result<web_sys::Window, HistoryError> {
    web_sys::window().ok_or_else(|| HistoryError::Unavailable("no global `window`".to_string()))
}

fn session_history() -> Result<web_sys::History, HistoryError> {
    window()?.history().map_err(js_error)
}

fn js_error(err: JsValue) -> HistoryError {
    HistoryError::Backend(format!("{err:?}"))
}

fn read_location() -> Result<Path, HistoryError> {
    let pathname = window()?.location().pathname().map_err(js_error)?;
    Path::parse(pathname).map_err(|err| HistoryError::Backend(err.to_string()))
}

impl History for BrowserHistory {
    fn location(&self) -> Result<Path, HistoryError> {
        read_location()
    }

    fn push(&self, path: &Path) -> Result<(), HistoryError> {
        session_history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path.as_str()))
            .map_err(js_error)
    }

    fn replace(&self, path: &Path) -> Result<(), HistoryError> {
        session_history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(path.as_str()))
            .map_err(js_error)
    }

    fn go(&self, delta: isize) -> Result<(), HistoryError> {
        let delta = i32::try_from(delta)
            .map_err(|_| HistoryError::Backend(format!("history delta {delta} out of range")))?;
        session_history()?.go_with_delta(delta).map_err(js_error)
    }

    fn listen(&self, listener: PopListener) -> Result<(), HistoryError> {
        let window = window()?;
        if LISTENING.swap(true, Ordering::AcqRel) {
            return Err(HistoryError::ListenerInstalled);
        }

        let on_pop = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_event| {
            match read_location() {
                Ok(path) => listener(path),
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    {
                        tracing::warn!(%err, "ignoring popstate with unusable location");
                    }
                    #[cfg(not(feature = "tracing"))]
                    {
                        let _ = err;
                    }
                }
            }
        });

        if let Err(err) = window
            .add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())
        {
            LISTENING.store(false, Ordering::Release);
            return Err(js_error(err));
        }
        on_pop.forget();
        Ok(())
    }
}
