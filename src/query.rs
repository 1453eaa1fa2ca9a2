//! A client-side query cache, provided to the component tree through
//! context.
//!
//! The cache only stores what it is given. It never fetches, retries or
//! schedules anything on its own.

use leptos::prelude::*;
use serde_json::Value;
use std::{collections::HashMap, time::Duration};

/// Default query settings stored on a [`QueryClient`].
///
/// These are only recorded and handed back by [`QueryClient::options`];
/// the client itself never acts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryClientOptions {
    /// Stored staleness window for callers that fetch.
    pub stale_time: Duration,
    /// Stored retention window for callers that evict.
    pub gc_time: Duration,
    /// Stored retry count for callers that fetch.
    pub retry: u32,
}

impl Default for QueryClientOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            gc_time: Duration::from_secs(5 * 60),
            retry: 3,
        }
    }
}

/// A handle to an in-memory query cache.
///
/// Clones share the same cache. Reads made inside a reactive context
/// subscribe to it, so views showing cache contents update on writes.
#[derive(Debug, Clone)]
pub struct QueryClient {
    options: QueryClientOptions,
    cache: ArcRwSignal<HashMap<String, Value>>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::with_options(QueryClientOptions::default())
    }

    pub fn with_options(options: QueryClientOptions) -> Self {
        Self {
            options,
            cache: ArcRwSignal::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> QueryClientOptions {
        self.options
    }

    /// Returns a copy of the data cached under `key`, if any.
    pub fn get_query_data(&self, key: &str) -> Option<Value> {
        self.cache.with(|cache| cache.get(key).cloned())
    }

    /// Stores `data` under `key`, returning what was there before.
    pub fn set_query_data(
        &self,
        key: impl Into<String>,
        data: Value,
    ) -> Option<Value> {
        let key = key.into();
        tracing::trace!(%key, "setting query data");
        self.cache
            .try_update(|cache| cache.insert(key, data))
            .flatten()
    }

    /// Drops every entry whose key starts with `prefix`, returning how many
    /// were removed.
    pub fn remove_queries(&self, prefix: &str) -> usize {
        let removed = self
            .cache
            .try_update(|cache| {
                let before = cache.len();
                cache.retain(|key, _| !key.starts_with(prefix));
                before - cache.len()
            })
            .unwrap_or_default();
        tracing::debug!(prefix, removed, "removed queries");
        removed
    }

    pub fn clear(&self) {
        self.cache.update(HashMap::clear);
    }

    pub fn len(&self) -> usize {
        self.cache.with(HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Makes `client` available to the current owner and its children.
pub fn provide_query_client(client: QueryClient) {
    provide_context(client);
}

/// The nearest [`QueryClient`] provided above the caller.
pub fn use_query_client() -> Option<QueryClient> {
    use_context::<QueryClient>()
}

/// Provides a [`QueryClient`] to everything rendered inside it.
#[component]
pub fn QueryClientProvider(
    client: QueryClient,
    children: Children,
) -> impl IntoView {
    provide_query_client(client);
    children()
}
