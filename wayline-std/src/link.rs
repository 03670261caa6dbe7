//! Navigation links.
//!
//! A [`Link`] describes an `<a>` element whose activation navigates through
//! the [`Navigator`] instead of loading a new document. The surrounding
//! renderer turns [`Link::attributes`] into markup and forwards clicks to
//! [`Link::activate`].

use crate::navigator::Navigator;
use bitflags::bitflags;
use wayline_core::NavigationError;

bitflags! {
    /// Modifier keys held during a click.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command key.
        const META = 1 << 3;
    }
}

/// Mouse button that triggered a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the wheel button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
}

/// A click delivered to a link.
#[derive(Debug, Clone, Default)]
pub struct ClickEvent {
    /// The button pressed.
    pub button: MouseButton,
    /// The modifier keys held.
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl ClickEvent {
    /// A plain primary click.
    pub fn primary() -> Self {
        Self::default()
    }

    /// A click with the given button and modifiers.
    pub fn new(button: MouseButton, modifiers: Modifiers) -> Self {
        Self {
            button,
            modifiers,
            default_prevented: false,
        }
    }

    /// Suppresses the browser's default handling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// A primary click without modifier keys.
    ///
    /// Any other click opens a new tab or window in the browser, which the
    /// router leaves alone.
    pub fn is_plain_primary(&self) -> bool {
        self.button == MouseButton::Primary && self.modifiers.is_empty()
    }
}

/// What [`Link::activate`] did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The default was suppressed and the navigator moved.
    Navigated,
    /// The click was left to the browser.
    PassedThrough,
}

/// A link that navigates without a page reload.
///
/// # Example
///
/// ```rust
/// use wayline_std::link::Link;
///
/// let link = Link::new("/users", "Users").class("nav-link");
/// let attrs = link.attributes();
/// assert!(attrs.contains(&("href".to_string(), "/users".to_string())));
/// assert!(attrs.contains(&("data-link".to_string(), "true".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    to: String,
    label: String,
    class: Option<String>,
    replace: bool,
    attrs: Vec<(String, String)>,
}

impl Link {
    /// Creates a link to `to` labelled `label`.
    pub fn new(to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            label: label.into(),
            class: None,
            replace: false,
            attrs: Vec::new(),
        }
    }

    /// Sets the CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Replace the active history entry instead of adding one.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Adds a custom attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// The target path.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// The link text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether activation replaces the active history entry.
    pub fn is_replace(&self) -> bool {
        self.replace
    }

    /// The value of the `href` attribute.
    pub fn href(&self) -> &str {
        &self.to
    }

    /// The attributes of the rendered `<a>` element, in render order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![("href".to_string(), self.to.clone())];
        if let Some(class) = &self.class {
            attrs.push(("class".to_string(), class.clone()));
        }
        attrs.push(("data-link".to_string(), "true".to_string()));
        if self.replace {
            attrs.push(("data-replace".to_string(), "true".to_string()));
        }
        attrs.extend(self.attrs.iter().cloned());
        attrs
    }

    /// Handles a click on the link.
    ///
    /// A plain primary click suppresses the default and navigates. Every
    /// other click passes through untouched. On error the default has
    /// already been suppressed and the location is unchanged.
    pub fn activate(
        &self,
        event: &mut ClickEvent,
        navigator: &Navigator,
    ) -> Result<LinkOutcome, NavigationError> {
        if !event.is_plain_primary() {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(
                    to = %self.to,
                    button = ?event.button,
                    modifiers = ?event.modifiers,
                    "link click passed through"
                );
            }
            return Ok(LinkOutcome::PassedThrough);
        }

        event.prevent_default();
        if self.replace {
            navigator.replace(&self.to)?;
        } else {
            navigator.navigate(&self.to)?;
        }
        Ok(LinkOutcome::Navigated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use std::sync::Arc;
    use wayline_core::Path;

    fn navigator_at(raw: &str) -> (Navigator, Arc<MemoryHistory>) {
        let history = Arc::new(MemoryHistory::new(Path::parse(raw).unwrap()));
        (Navigator::new(history.clone()).unwrap(), history)
    }

    #[test]
    fn test_link_attributes() {
        let link = Link::new("/admin", "Admin")
            .class("nav-link")
            .replace(true)
            .attr("aria-label", "Admin Panel");

        assert_eq!(
            link.attributes(),
            vec![
                ("href".to_string(), "/admin".to_string()),
                ("class".to_string(), "nav-link".to_string()),
                ("data-link".to_string(), "true".to_string()),
                ("data-replace".to_string(), "true".to_string()),
                ("aria-label".to_string(), "Admin Panel".to_string()),
            ]
        );
        assert_eq!(link.label(), "Admin");
        assert_eq!(link.href(), "/admin");
    }

    #[test]
    fn test_plain_click_navigates() {
        let (navigator, history) = navigator_at("/a");
        let link = Link::new("/b", "B");
        let mut click = ClickEvent::primary();

        let outcome = link.activate(&mut click, &navigator).unwrap();

        assert_eq!(outcome, LinkOutcome::Navigated);
        assert!(click.is_default_prevented());
        assert_eq!(navigator.current_path(), "/b");
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn test_replace_link() {
        let (navigator, history) = navigator_at("/a");
        let link = Link::new("/b", "B").replace(true);

        link.activate(&mut ClickEvent::primary(), &navigator).unwrap();

        assert_eq!(navigator.current_path(), "/b");
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn test_modified_clicks_pass_through() {
        let (navigator, _history) = navigator_at("/a");
        let link = Link::new("/b", "B");

        for mut click in [
            ClickEvent::new(MouseButton::Primary, Modifiers::CTRL),
            ClickEvent::new(MouseButton::Primary, Modifiers::META | Modifiers::SHIFT),
            ClickEvent::new(MouseButton::Auxiliary, Modifiers::empty()),
        ] {
            let outcome = link.activate(&mut click, &navigator).unwrap();
            assert_eq!(outcome, LinkOutcome::PassedThrough);
            assert!(!click.is_default_prevented());
        }
        assert_eq!(navigator.current_path(), "/a");
    }

    #[test]
    fn test_invalid_target_is_an_error() {
        let (navigator, _history) = navigator_at("/a");
        let link = Link::new("relative", "Broken");

        assert!(link.activate(&mut ClickEvent::primary(), &navigator).is_err());
        assert_eq!(navigator.current_path(), "/a");
    }
}
