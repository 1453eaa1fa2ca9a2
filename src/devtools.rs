//! Debug panels for the router and the query cache.

use crate::query::use_query_client;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Shows the path the router is currently matching.
///
/// Must be rendered inside a `<Router>`.
#[component]
pub fn RouterDevtools() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="devtools" data-devtools="router">
            "route: "
            <code>{move || location.pathname.get()}</code>
        </aside>
    }
}

/// Shows how many queries are cached by the nearest query client.
#[component]
pub fn QueryDevtools() -> impl IntoView {
    let client = use_query_client();
    let cached = move || match &client {
        Some(client) => client.len().to_string(),
        None => "no client".to_string(),
    };

    view! {
        <aside class="devtools" data-devtools="query">
            "queries: "
            <code>{cached}</code>
        </aside>
    }
}
