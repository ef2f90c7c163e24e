//! In-memory transport and clock for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::LocalBoxFuture;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::state::query::Clock;

pub const TEST_BASE: &str = "http://backend.test/api";

/// Replies queued per `(method, path)`; every request is recorded.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<(Method, String), VecDeque<Result<HttpResponse, String>>>>,
    calls: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, Err(message.to_owned()));
    }

    fn push(&self, method: Method, path: &str, reply: Result<HttpResponse, String>) {
        self.replies
            .lock()
            .unwrap()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(reply);
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, method: Method, path: &str) -> usize {
        let url = format!("{TEST_BASE}{path}");
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.method == method && c.url == url)
            .count()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, String>> {
        let path = request.url.strip_prefix(TEST_BASE).unwrap_or(&request.url).to_owned();
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&(request.method, path.clone()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(format!("no scripted reply for {} {path}", request.method.as_str())));
        self.calls.lock().unwrap().push(request);
        Box::pin(async move { reply })
    }
}

pub fn client_with(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::new(ApiConfig::new(TEST_BASE), transport.clone())
}

/// Clock advanced by hand.
#[derive(Default)]
pub struct ManualClock(AtomicU64);

impl ManualClock {
    pub fn new(start_ms: u64) -> Arc<Self> {
        Arc::new(Self(AtomicU64::new(start_ms)))
    }

    pub fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}
