//! The `routes!` macro.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Expr, ExprLit, Lit, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// One entry of a `routes!` invocation.
enum Entry {
    Route { path: Expr, view: Expr },
    Element(Expr),
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let first: Expr = input.parse()?;
        if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            let view: Expr = input.parse()?;
            Ok(Entry::Route { path: first, view })
        } else {
            Ok(Entry::Element(first))
        }
    }
}

struct RoutesInput {
    entries: Punctuated<Entry, Token![,]>,
}

impl Parse for RoutesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(Self {
            entries: Punctuated::parse_terminated(input)?,
        })
    }
}

/// Checks a literal route path, returning a description of the first problem.
pub(crate) fn validate_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("route path must not be empty".to_string());
    }
    if !path.starts_with('/') {
        return Err(format!("route path `{path}` must start with `/`"));
    }
    if path.chars().any(char::is_control) {
        return Err(format!("route path `{path}` contains a control character"));
    }

    let segments: Vec<&str> = path[1..].split('/').collect();
    let last = segments.len() - 1;
    for (position, segment) in segments.iter().enumerate() {
        if *segment == ":" {
            return Err(format!("route path `{path}` has an unnamed `:` parameter"));
        }
        if segment.starts_with('*') && position != last {
            return Err(format!(
                "route path `{path}` has a `*` catch-all before its last segment"
            ));
        }
    }
    Ok(())
}

/// Implementation of the `routes!` macro.
pub fn routes_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as RoutesInput);

    let mut nodes = Vec::with_capacity(input.entries.len());
    for entry in &input.entries {
        match entry {
            Entry::Route { path, view } => {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Str(literal),
                    ..
                }) = path
                {
                    if let Err(message) = validate_path(&literal.value()) {
                        return syn::Error::new_spanned(literal, message)
                            .to_compile_error()
                            .into();
                    }
                }
                nodes.push(quote! { ::wayline::Node::route(#path, #view) });
            }
            Entry::Element(element) => {
                nodes.push(quote! { ::wayline::Node::Element(#element) });
            }
        }
    }

    let expanded = quote! {
        ::std::vec![#(#nodes),*]
    };

    TokenStream::from(expanded)
}
