//! Selector behavior through a mounted container.

mod common;

use common::{App, Page};
use wayline::{Node, Params, RouteState, SegmentSelector};

#[test]
fn test_catch_all_renders_for_unknown_paths() {
    let app = App::at("/");
    let routes = app
        .routes()
        .route("/*", Page::NotFound)
        .selector(SegmentSelector)
        .mount();

    app.navigator.navigate("/missing/deeply").unwrap();
    assert_eq!(routes.view(), Some(Page::NotFound));

    app.navigator.navigate("/about").unwrap();
    assert_eq!(routes.view(), Some(Page::About));
}

#[test]
fn test_exact_selector_treats_catch_all_literally() {
    let app = App::at("/missing");
    let routes = app.routes().route("/*", Page::NotFound).mount();

    assert_eq!(routes.view(), None);
}

#[test]
fn test_fallback_view() {
    let app = App::at("/missing");
    let routes = app.routes().fallback(Page::NotFound).mount();

    assert_eq!(routes.state(), RouteState::NoMatch);
    assert_eq!(routes.view(), Some(Page::NotFound));
}

#[test]
fn test_params_are_recorded() {
    let app = App::at("/users/42");
    let routes = app
        .routes()
        .route("/users/:id", Page::User)
        .selector(SegmentSelector)
        .mount();

    let expected: Params = [("id", "42")].into_iter().collect();
    assert_eq!(
        routes.state(),
        RouteState::Matched {
            pattern: "/users/:id".to_string(),
            index: 2,
            params: expected,
        }
    );
}

#[test]
fn test_duplicate_paths_resolve_to_first() {
    let app = App::at("/about");
    let routes = app.routes().route("/about", Page::User).mount();

    assert_eq!(routes.view(), Some(Page::About));
}

#[test]
fn test_non_route_children_and_malformed_paths_are_ignored() {
    let app = App::at("/about");
    let routes = wayline::Routes::builder(app.navigator.store())
        .child(Node::Element(Page::Sidebar))
        .route("", Page::Home)
        .route("about", Page::Home)
        .route("/about", Page::About)
        .mount();

    match routes.state() {
        RouteState::Matched { index, .. } => assert_eq!(index, 0),
        RouteState::NoMatch => panic!("expected /about to match"),
    }
    assert_eq!(routes.view(), Some(Page::About));
}

#[cfg(feature = "matchit")]
#[test]
fn test_matchit_prefers_specific_patterns() {
    use wayline::MatchitSelector;

    let app = App::at("/users/me");
    let routes = wayline::Routes::builder(app.navigator.store())
        .route("/users/:id", Page::User)
        .route("/users/me", Page::Home)
        .selector(MatchitSelector)
        .mount();

    assert_eq!(routes.view(), Some(Page::Home));
}
