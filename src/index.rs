use crate::{config::AppConfig, count::Count};
use leptos::prelude::*;

/// The landing page: a heading and a button that counts its own clicks.
#[component]
pub fn Index() -> impl IntoView {
    let title = use_context::<AppConfig>().unwrap_or_default().title;
    // lives as long as this view; a remount starts again from zero
    let count = RwSignal::new(Count::default());

    let increment = move |_| {
        count.update(Count::increment);
        tracing::debug!(count = count.get_untracked().value(), "incremented");
    };

    view! {
        <div style="padding: 24px">
            <h1>{title}</h1>
            <button on:click=increment>{move || count.get().to_string()}</button>
        </div>
    }
}
