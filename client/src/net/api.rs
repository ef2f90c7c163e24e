//! REST request layer for communicating with the backend.
//!
//! Every call goes through [`ApiClient`], which attaches the browser's cookie
//! credentials (see `transport`) and normalizes every failure into
//! [`ApiError`]. No retries and no timeout beyond the transport default.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` and display `message`; they never see
//! the transport's own error shape.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{BrowserTransport, HttpRequest, Method, Transport};
use super::types::{BlogPost, ContactMessage, Credentials, Lesson, Portfolio, PortfolioVariant, Session, StockQuote, StockRecommendation};
use crate::config::ApiConfig;

/// Handle to the backend. Cheap to clone; shared through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Client backed by the browser `fetch` transport.
    pub fn browser(config: ApiConfig) -> Self {
        log::debug!("backend at {}", config.base_url());
        Self::new(config, Arc::new(BrowserTransport))
    }

    /// `GET path`, decoding the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// Returns the normalized error on transport failure, non-2xx status, or
    /// an undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::Get, path, None).await?;
        decode(&body)
    }

    /// `POST path` with a JSON body, decoding the JSON response as `T`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`], plus a payload that fails to serialize.
    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(Method::Post, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    /// `POST path` where the response body is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns the normalized error on transport failure or non-2xx status.
    pub async fn post_ignoring_body<B>(&self, path: &str, payload: Option<&B>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let payload = payload.map(|p| encode(p)).transpose()?;
        self.execute(Method::Post, path, payload).await.map(|_| ())
    }

    async fn execute(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<String, ApiError> {
        let request = HttpRequest { method, url: self.config.url(path), body };
        log::debug!("{} {path}", method.as_str());

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(message) => {
                let err = ApiError::from_transport(&message);
                log::warn!("{} {path} failed: {err}", method.as_str());
                return Err(err);
            }
        };

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            log::warn!("{} {path} -> {}: {err}", method.as_str(), response.status);
            return Err(err);
        }
        Ok(response.body)
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::new(format!("Invalid request body: {e}")))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::invalid_body)
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn portfolio_endpoint(variant: PortfolioVariant) -> String {
    format!("/portfolio/{}", variant.as_str())
}

/// `symbol` must already be normalized (see `pages::stock_search`).
fn stock_search_endpoint(symbol: &str) -> String {
    format!("/stock-search?symbol={symbol}")
}

#[derive(serde::Deserialize)]
struct RecommendationsEnvelope {
    #[serde(default)]
    recommendations: Vec<StockRecommendation>,
}

#[derive(serde::Deserialize)]
struct LessonsEnvelope {
    #[serde(default)]
    lessons: Vec<Lesson>,
}

#[derive(serde::Deserialize)]
struct PostsEnvelope {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

#[derive(serde::Deserialize)]
struct ChatReply {
    response: String,
}

impl ApiClient {
    /// `POST /auth/login`. The returned record is exactly what the backend sent.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error (e.g. "invalid-credentials").
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.post("/auth/login", credentials).await
    }

    /// `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_ignoring_body::<()>("/auth/logout", None).await
    }

    /// `GET /auth/session`.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error.
    pub async fn session(&self) -> Result<Session, ApiError> {
        self.get("/auth/session").await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error (e.g. "registration-failed").
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_ignoring_body("/auth/register", Some(credentials)).await
    }

    /// `POST /auth/subscription` with `{subscriptionCode}`.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error (e.g. "invalid-subscription-code").
    pub async fn update_subscription(&self, code: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "subscriptionCode": code });
        self.post_ignoring_body("/auth/subscription", Some(&payload)).await
    }

    /// `GET /portfolio/{variant}`.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error (e.g. "subscription-required").
    pub async fn portfolio(&self, variant: PortfolioVariant) -> Result<Portfolio, ApiError> {
        self.get(&portfolio_endpoint(variant)).await
    }

    /// `GET /stock-recommendations`, unwrapped from its envelope.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error.
    pub async fn recommendations(&self) -> Result<Vec<StockRecommendation>, ApiError> {
        let envelope: RecommendationsEnvelope = self.get("/stock-recommendations").await?;
        Ok(envelope.recommendations)
    }

    /// `GET /lessons`, unwrapped from its envelope.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error.
    pub async fn lessons(&self) -> Result<Vec<Lesson>, ApiError> {
        let envelope: LessonsEnvelope = self.get("/lessons").await?;
        Ok(envelope.lessons)
    }

    /// `GET /blog`, unwrapped from its envelope.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error.
    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        let envelope: PostsEnvelope = self.get("/blog").await?;
        Ok(envelope.posts)
    }

    /// `POST /contact`.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error (e.g. "name-email-message-required").
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        self.post_ignoring_body("/contact", Some(message)).await
    }

    /// `POST /chat`, returning the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error.
    pub async fn chat(&self, message: &str) -> Result<String, ApiError> {
        let payload = serde_json::json!({ "message": message });
        let reply: ChatReply = self.post("/chat", &payload).await?;
        Ok(reply.response)
    }

    /// `GET /stock-search?symbol=...`.
    ///
    /// # Errors
    ///
    /// Propagates the normalized request error.
    pub async fn stock_quote(&self, symbol: &str) -> Result<StockQuote, ApiError> {
        self.get(&stock_search_endpoint(symbol)).await
    }
}
