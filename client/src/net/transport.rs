//! HTTP transport seam beneath the request layer.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the browser's
//! cookie jar attached (`credentials: include`).
//! Server-side (SSR): requests resolve to an error and are never issued;
//! these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The trait object is `Send + Sync` so it can live inside Leptos context,
//! while the futures it returns are local (browser fetch futures are not
//! `Send`).

#![allow(clippy::unused_async)]

use futures::future::LocalBoxFuture;

/// HTTP verbs the application needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully-resolved outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// Raw response as seen by the transport; status is not yet interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests. `Err` carries the transport-level failure message.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, String>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, String>> {
        Box::pin(send_browser(request))
    }
}

async fn send_browser(request: HttpRequest) -> Result<HttpResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json");

        let resp = match request.body {
            Some(body) => builder.json(&body).map_err(|e| e.to_string())?.send().await,
            None => builder.send().await,
        }
        .map_err(|e| e.to_string())?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok(HttpResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("{} {} skipped during server render", request.method.as_str(), request.url);
        Err("not available on server".to_owned())
    }
}
