//! Keyed response cache with in-flight request coalescing.
//!
//! DESIGN
//! ======
//! Each slot is addressed by a canonical string (`kind:param`) and holds the
//! last good value, when it was fetched, and, while a request is running, the
//! list of callers waiting on it. A caller either gets a fresh value, joins
//! the running request, or becomes the one that issues it. Failures are
//! handed to every waiter but never stored.
//!
//! If the issuing caller is dropped mid-request (its view unmounted), the
//! slot is released and waiters start over rather than hang.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::channel::oneshot;

use crate::net::error::ApiError;

/// Millisecond wall clock used for staleness checks.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// `Date.now()` in the browser, `SystemTime` elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        }
    }
}

/// Identity of a cached resource: its kind plus serialized parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    kind: &'static str,
    param: String,
}

impl QueryKey {
    pub fn new(kind: &'static str, param: impl Into<String>) -> Self {
        Self { kind, param: param.into() }
    }

    /// Key for a resource that takes no parameters.
    pub fn singleton(kind: &'static str) -> Self {
        Self::new(kind, "")
    }

    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.param)
    }
}

type Waiter<T> = oneshot::Sender<Result<T, ApiError>>;

struct InFlight<T> {
    ticket: u64,
    waiters: Vec<Waiter<T>>,
}

struct CacheEntry<T> {
    value: Option<T>,
    fetched_at: Option<u64>,
    in_flight: Option<InFlight<T>>,
}

impl<T> Default for CacheEntry<T> {
    fn default() -> Self {
        Self { value: None, fetched_at: None, in_flight: None }
    }
}

type Slots<T> = Mutex<HashMap<String, CacheEntry<T>>>;

enum Plan<T> {
    Fresh(T),
    Join(oneshot::Receiver<Result<T, ApiError>>),
    Issue(u64),
}

/// Cache for one resource type. Clones share the same slots.
pub struct QueryCache<T> {
    slots: Arc<Slots<T>>,
    tickets: Arc<AtomicU64>,
    stale_after_ms: u64,
    clock: Arc<dyn Clock>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            tickets: Arc::clone(&self.tickets),
            stale_after_ms: self.stale_after_ms,
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock<T>(slots: &Slots<T>) -> MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T: Clone> QueryCache<T> {
    /// Values younger than `stale_after_ms` are served without a request.
    pub fn new(stale_after_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            tickets: Arc::new(AtomicU64::new(0)),
            stale_after_ms,
            clock,
        }
    }

    /// Resolve `key`, calling `fetcher` only when no fresh value exists and
    /// nobody else is already fetching it.
    ///
    /// # Errors
    ///
    /// Returns whatever error the (possibly shared) request produced.
    pub async fn fetch<F, Fut>(&self, key: &QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let slot = key.canonical();
        loop {
            match self.plan(&slot) {
                Plan::Fresh(value) => return Ok(value),
                Plan::Join(rx) => match rx.await {
                    Ok(result) => return result,
                    Err(oneshot::Canceled) => {
                        log::debug!("request for {slot} was abandoned, retrying");
                    }
                }
                Plan::Issue(ticket) => {
                    let pending = Pending { slots: &self.slots, slot: &slot, ticket, settled: false };
                    let result = fetcher().await;
                    pending.settle(&result, self.clock.now_ms());
                    return result;
                }
            }
        }
    }

    fn plan(&self, slot: &str) -> Plan<T> {
        let now = self.clock.now_ms();
        let mut slots = lock(&self.slots);
        let entry = slots.entry(slot.to_owned()).or_default();

        if let (Some(value), Some(at)) = (&entry.value, entry.fetched_at) {
            if now.saturating_sub(at) < self.stale_after_ms {
                return Plan::Fresh(value.clone());
            }
        }
        if let Some(in_flight) = entry.in_flight.as_mut() {
            let (tx, rx) = oneshot::channel();
            in_flight.waiters.push(tx);
            return Plan::Join(rx);
        }

        let ticket = self.tickets.fetch_add(1, Ordering::Relaxed);
        entry.in_flight = Some(InFlight { ticket, waiters: Vec::new() });
        Plan::Issue(ticket)
    }

    /// Last good value for `key`, however old.
    pub fn peek(&self, key: &QueryKey) -> Option<T> {
        lock(&self.slots).get(&key.canonical()).and_then(|e| e.value.clone())
    }

    /// Whether a request for `key` is currently running.
    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        lock(&self.slots)
            .get(&key.canonical())
            .is_some_and(|e| e.in_flight.is_some())
    }

    /// Forget `key`. A request already running for it will not repopulate it.
    pub fn invalidate(&self, key: &QueryKey) {
        lock(&self.slots).remove(&key.canonical());
    }

    /// Forget every key.
    pub fn clear(&self) {
        lock(&self.slots).clear();
    }
}

/// Owns an in-flight slot until the request settles or is dropped.
struct Pending<'a, T> {
    slots: &'a Slots<T>,
    slot: &'a str,
    ticket: u64,
    settled: bool,
}

impl<T: Clone> Pending<'_, T> {
    fn settle(mut self, result: &Result<T, ApiError>, now: u64) {
        self.settled = true;
        let waiters = {
            let mut slots = lock(self.slots);
            match slots.get_mut(self.slot) {
                Some(entry) if entry.in_flight.as_ref().is_some_and(|f| f.ticket == self.ticket) => {
                    if let Ok(value) = result {
                        entry.value = Some(value.clone());
                        entry.fetched_at = Some(now);
                    }
                    entry.in_flight.take().map(|f| f.waiters).unwrap_or_default()
                }
                // Invalidated while running; the result is not ours to store.
                _ => Vec::new(),
            }
        };
        for waiter in waiters {
            if waiter.send(result.clone()).is_err() {
                log::debug!("waiter for {} went away", self.slot);
            }
        }
    }
}

impl<T> Drop for Pending<'_, T> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut slots = lock(self.slots);
        if let Some(entry) = slots.get_mut(self.slot) {
            if entry.in_flight.as_ref().is_some_and(|f| f.ticket == self.ticket) {
                // Dropping the senders wakes every waiter with `Canceled`.
                entry.in_flight = None;
            }
        }
    }
}
