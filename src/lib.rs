//! A client-side rendered counter page.
//!
//! [`App`] composes the providers the page runs inside of (metadata, a
//! query cache and a router) around the [`Index`] view. [`mount`] attaches
//! it to the document.

pub mod config;
pub mod count;
pub mod devtools;
pub mod error;
pub mod index;
pub mod logging;
pub mod query;

pub use config::AppConfig;
pub use count::Count;
pub use error::MountError;
pub use index::Index;

use devtools::{QueryDevtools, RouterDevtools};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use query::{QueryClient, QueryClientProvider};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// The whole application.
///
/// The route tree only has a root, so every path renders [`Index`].
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    let devtools = config.devtools;
    let title = config.title.clone();
    provide_context(config);

    view! {
        <Title text=title/>
        <QueryClientProvider client=QueryClient::new()>
            <Router>
                <Routes fallback=|| view! { <Index/> }>
                    <Route path=path!("/") view=Index/>
                </Routes>
                {devtools.then(|| view! { <RouterDevtools/> })}
            </Router>
            {devtools.then(|| view! { <QueryDevtools/> })}
        </QueryClientProvider>
    }
}

/// Mounts [`App`] into the element named by `config.root_id`.
///
/// The app stays mounted for the lifetime of the page.
pub fn mount(config: AppConfig) -> Result<(), MountError> {
    let parent = root_element(&config.root_id)?;
    tracing::info!(root = %config.root_id, "mounting app");
    leptos::mount::mount_to(parent, move || view! { <App config/> }).forget();
    Ok(())
}

/// Looks up the element the app should be mounted into.
pub fn root_element(id: &str) -> Result<HtmlElement, MountError> {
    document()
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingRoot { id: id.to_string() })?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement { id: id.to_string() })
}
