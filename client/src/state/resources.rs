//! Per-resource caches in front of the request layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `Resources` is built in `app::App` and shared through context; the
//! data-fetch hooks call into it. Each resource kind has its own cache with
//! its own staleness window, and each key (e.g. portfolio variant) its own
//! slot.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use std::sync::Arc;

use super::query::{Clock, QueryCache, QueryKey, SystemClock};
use crate::config::{CONTENT_STALE_MS, PORTFOLIO_STALE_MS};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{BlogPost, Lesson, Portfolio, PortfolioVariant, StockRecommendation};

#[derive(Clone)]
pub struct Resources {
    api: ApiClient,
    portfolios: QueryCache<Portfolio>,
    recommendations: QueryCache<Vec<StockRecommendation>>,
    lessons: QueryCache<Vec<Lesson>>,
    blog_posts: QueryCache<Vec<BlogPost>>,
}

impl Resources {
    pub fn new(api: ApiClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            portfolios: QueryCache::new(PORTFOLIO_STALE_MS, clock.clone()),
            recommendations: QueryCache::new(CONTENT_STALE_MS, clock.clone()),
            lessons: QueryCache::new(CONTENT_STALE_MS, clock.clone()),
            blog_posts: QueryCache::new(CONTENT_STALE_MS, clock),
        }
    }

    /// Resources timed by the wall clock.
    pub fn with_system_clock(api: ApiClient) -> Self {
        Self::new(api, Arc::new(SystemClock))
    }

    pub fn portfolio_key(variant: PortfolioVariant) -> QueryKey {
        QueryKey::new("portfolio", variant.as_str())
    }

    pub fn recommendations_key() -> QueryKey {
        QueryKey::singleton("stock-recommendations")
    }

    pub fn lessons_key() -> QueryKey {
        QueryKey::singleton("lessons")
    }

    pub fn blog_posts_key() -> QueryKey {
        QueryKey::singleton("blog")
    }

    /// # Errors
    ///
    /// Propagates the (possibly shared) request error.
    pub async fn portfolio(&self, variant: PortfolioVariant) -> Result<Portfolio, ApiError> {
        self.portfolios
            .fetch(&Self::portfolio_key(variant), || self.api.portfolio(variant))
            .await
    }

    /// # Errors
    ///
    /// Propagates the (possibly shared) request error.
    pub async fn recommendations(&self) -> Result<Vec<StockRecommendation>, ApiError> {
        self.recommendations
            .fetch(&Self::recommendations_key(), || self.api.recommendations())
            .await
    }

    /// # Errors
    ///
    /// Propagates the (possibly shared) request error.
    pub async fn lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        self.lessons.fetch(&Self::lessons_key(), || self.api.lessons()).await
    }

    /// # Errors
    ///
    /// Propagates the (possibly shared) request error.
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.blog_posts.fetch(&Self::blog_posts_key(), || self.api.blog_posts()).await
    }

    /// Cached portfolio for `variant`, however old.
    pub fn cached_portfolio(&self, variant: PortfolioVariant) -> Option<Portfolio> {
        self.portfolios.peek(&Self::portfolio_key(variant))
    }

    pub fn cached_recommendations(&self) -> Option<Vec<StockRecommendation>> {
        self.recommendations.peek(&Self::recommendations_key())
    }

    pub fn cached_lessons(&self) -> Option<Vec<Lesson>> {
        self.lessons.peek(&Self::lessons_key())
    }

    pub fn cached_blog_posts(&self) -> Option<Vec<BlogPost>> {
        self.blog_posts.peek(&Self::blog_posts_key())
    }

    /// Drop the cached portfolio for `variant`.
    pub fn invalidate_portfolio(&self, variant: PortfolioVariant) {
        self.portfolios.invalidate(&Self::portfolio_key(variant));
    }

    /// Forget everything; used after logout so the next user starts clean.
    pub fn clear(&self) {
        self.portfolios.clear();
        self.recommendations.clear();
        self.lessons.clear();
        self.blog_posts.clear();
        log::debug!("resource caches cleared");
    }
}
