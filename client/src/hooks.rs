//! Data-fetch hooks: `{data, is_loading, error}` per resource key.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `use_portfolio`, `use_recommendations`, `use_lessons` or
//! `use_blog_posts`. Each hook owns one `FetchState` signal, re-runs when its
//! key changes, and goes through `state::resources` so identical keys share a
//! cache slot and an in-flight request.
//!
//! DESIGN
//! ======
//! A settled response is applied only if the hook still wants that key, and
//! only while the owning view is mounted. Switching keys shows what is cached
//! for the new key, never the previous key's data. Requests are issued only
//! in the browser; a server render stays in the loading state.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{BlogPost, Lesson, Portfolio, PortfolioVariant, StockRecommendation};
use crate::state::resources::Resources;

/// Hook-local result for the key currently requested.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<K, T> {
    pub key: Option<K>,
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<ApiError>,
}

impl<K, T> Default for FetchState<K, T> {
    fn default() -> Self {
        Self { key: None, data: None, is_loading: true, error: None }
    }
}

impl<K: PartialEq, T> FetchState<K, T> {
    /// Start loading `key`. `cached` is whatever the cache holds for that
    /// same key; data for a different key is dropped.
    pub fn begin(&mut self, key: K, cached: Option<T>) {
        let same_key = self.key.as_ref() == Some(&key);
        let previous = if same_key { self.data.take() } else { None };
        self.data = cached.or(previous);
        self.key = Some(key);
        self.is_loading = true;
        self.error = None;
    }

    /// Apply a response for `key`. Returns `false` (and changes nothing) if
    /// the hook has moved on to another key. Errors keep the last data.
    pub fn settle(&mut self, key: &K, result: Result<T, ApiError>) -> bool {
        if self.key.as_ref() != Some(key) {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// Reactive handle returned by every hook.
pub type Fetch<K, T> = RwSignal<FetchState<K, T>>;

/// Generic hook: track `key`, seed from `peek`, resolve through `fetch`.
pub fn use_query<K, T, Fut>(
    key: impl Fn() -> K + 'static,
    peek: impl Fn(&K) -> Option<T> + 'static,
    fetch: impl Fn(K) -> Fut + 'static,
) -> Fetch<K, T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(FetchState::default());
    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    Effect::new(move || {
        let key = key();
        let cached = peek(&key);
        state.update(|s| s.begin(key.clone(), cached));
        spawn_settle(state, key.clone(), fetch(key), alive.clone());
    });

    state
}

#[cfg(feature = "hydrate")]
fn spawn_settle<K, T, Fut>(state: Fetch<K, T>, key: K, request: Fut, alive: Arc<AtomicBool>)
where
    K: PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    leptos::task::spawn_local(async move {
        let result = request.await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        state.update(|s| {
            if !s.settle(&key, result) {
                log::debug!("discarding response for a superseded key");
            }
        });
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_settle<K, T, Fut>(_state: Fetch<K, T>, _key: K, _request: Fut, _alive: Arc<AtomicBool>)
where
    K: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
}

/// Portfolio for the (reactive) variant.
pub fn use_portfolio(variant: Signal<PortfolioVariant>) -> Fetch<PortfolioVariant, Portfolio> {
    let resources = expect_context::<Resources>();
    let cache = resources.clone();
    use_query(
        move || variant.get(),
        move |v| cache.cached_portfolio(*v),
        move |v| {
            let resources = resources.clone();
            async move { resources.portfolio(v).await }
        },
    )
}

pub fn use_recommendations() -> Fetch<(), Vec<StockRecommendation>> {
    let resources = expect_context::<Resources>();
    let cache = resources.clone();
    use_query(
        || (),
        move |_| cache.cached_recommendations(),
        move |()| {
            let resources = resources.clone();
            async move { resources.recommendations().await }
        },
    )
}

pub fn use_lessons() -> Fetch<(), Vec<Lesson>> {
    let resources = expect_context::<Resources>();
    let cache = resources.clone();
    use_query(
        || (),
        move |_| cache.cached_lessons(),
        move |()| {
            let resources = resources.clone();
            async move { resources.lessons().await }
        },
    )
}

pub fn use_blog_posts() -> Fetch<(), Vec<BlogPost>> {
    let resources = expect_context::<Resources>();
    let cache = resources.clone();
    use_query(
        || (),
        move |_| cache.cached_blog_posts(),
        move |()| {
            let resources = resources.clone();
            async move { resources.blog_posts().await }
        },
    )
}
