//! Integration tests for the `routes!` macro.

#![cfg(feature = "macros")]

mod common;

use common::{Page, path};
use wayline::{LocationStore, Node, Routes, SegmentSelector};

#[test]
fn test_routes_macro_builds_nodes_in_order() {
    let nodes = wayline::routes![
        "/" => Page::Home,
        Page::Sidebar,
        "/about" => Page::About,
    ];

    assert_eq!(
        nodes,
        vec![
            Node::route("/", Page::Home),
            Node::Element(Page::Sidebar),
            Node::route("/about", Page::About),
        ]
    );
}

#[test]
fn test_routes_macro_feeds_a_container() {
    let store = LocationStore::new(path("/users/9"));
    let routes = Routes::builder(&store)
        .children(wayline::routes![
            "/users/:id" => Page::User,
            "/*" => Page::NotFound,
        ])
        .selector(SegmentSelector)
        .mount();

    assert_eq!(routes.view(), Some(Page::User));
    store.set_current_path(path("/nope"));
    assert_eq!(routes.view(), Some(Page::NotFound));
}

#[test]
fn test_routes_macro_accepts_runtime_paths() {
    let dynamic = format!("/{}", "generated");
    let nodes = wayline::routes![dynamic => 1];

    assert_eq!(nodes[0].as_route().map(|route| route.path()), Some("/generated"));
}
