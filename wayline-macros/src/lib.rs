use proc_macro::TokenStream;

mod routes_macro;

/// Declares the children of a routes container.
///
/// Each entry is either `path => view`, which becomes a route declaration,
/// or a bare expression, which becomes an inert element child. The result is
/// a `Vec<wayline::Node<V>>` in declaration order.
///
/// String-literal paths are checked at compile time: they must start with
/// `/`, contain no control characters, name every `:param`, and use a `*`
/// catch-all only as the last segment.
///
/// # Example
///
/// ```rust,ignore
/// let children = wayline::routes![
///     "/" => "home",
///     "/users/:id" => "user",
///     "sidebar",
///     "/*" => "not found",
/// ];
/// ```
#[proc_macro]
pub fn routes(input: TokenStream) -> TokenStream {
    routes_macro::routes_impl(input)
}
