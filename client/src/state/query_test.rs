use std::cell::Cell;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::executor::block_on;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use futures::task::noop_waker_ref;

use super::*;
use crate::test_support::ManualClock;

type Gate = Shared<oneshot::Receiver<()>>;

fn gate() -> (oneshot::Sender<()>, Gate) {
    let (tx, rx) = oneshot::channel();
    (tx, rx.shared())
}

/// Fetcher that counts calls and, when gated, waits for the gate to open.
fn fetcher(
    calls: &Rc<Cell<usize>>,
    gate: Option<Gate>,
    reply: Result<u32, ApiError>,
) -> impl Fn() -> LocalBoxFuture<'static, Result<u32, ApiError>> {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        let gate = gate.clone();
        let reply = reply.clone();
        async move {
            if let Some(gate) = gate {
                gate.await.unwrap();
            }
            reply
        }
        .boxed_local()
    }
}

fn cache(stale_ms: u64) -> (QueryCache<u32>, Arc<ManualClock>) {
    let clock = ManualClock::new(1_000);
    (QueryCache::new(stale_ms, clock.clone()), clock)
}

#[test]
fn canonical_key_joins_kind_and_param() {
    assert_eq!(QueryKey::new("portfolio", "me").canonical(), "portfolio:me");
    assert_eq!(QueryKey::singleton("lessons").canonical(), "lessons:");
}

#[test]
fn simultaneous_requests_for_one_key_share_a_call() {
    let (cache, _clock) = cache(60_000);
    let key = QueryKey::new("portfolio", "me");
    let calls = Rc::new(Cell::new(0));
    let (open, gate) = gate();
    let fetch = fetcher(&calls, Some(gate), Ok(7));

    let (a, b, ()) = block_on(async {
        futures::join!(cache.fetch(&key, &fetch), cache.fetch(&key, &fetch), async {
            open.send(()).unwrap();
        })
    });

    assert_eq!(a, Ok(7));
    assert_eq!(b, Ok(7));
    assert_eq!(calls.get(), 1);
}

#[test]
fn different_keys_never_share_a_slot() {
    let (cache, _clock) = cache(60_000);
    let me = QueryKey::new("portfolio", "me");
    let usa = QueryKey::new("portfolio", "usa");
    let calls = Rc::new(Cell::new(0));

    let mine = block_on(cache.fetch(&me, fetcher(&calls, None, Ok(1))));
    let theirs = block_on(cache.fetch(&usa, fetcher(&calls, None, Ok(2))));

    assert_eq!(mine, Ok(1));
    assert_eq!(theirs, Ok(2));
    assert_eq!(calls.get(), 2);
    assert_eq!(cache.peek(&me), Some(1));
    assert_eq!(cache.peek(&usa), Some(2));
}

#[test]
fn fresh_value_is_served_without_a_request() {
    let (cache, clock) = cache(300_000);
    let key = QueryKey::new("portfolio", "me");
    let calls = Rc::new(Cell::new(0));

    block_on(cache.fetch(&key, fetcher(&calls, None, Ok(1)))).unwrap();
    clock.advance(299_999);
    let again = block_on(cache.fetch(&key, fetcher(&calls, None, Ok(2))));

    assert_eq!(again, Ok(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn stale_value_triggers_a_refetch() {
    let (cache, clock) = cache(300_000);
    let key = QueryKey::new("portfolio", "me");
    let calls = Rc::new(Cell::new(0));

    block_on(cache.fetch(&key, fetcher(&calls, None, Ok(1)))).unwrap();
    clock.advance(300_000);
    let again = block_on(cache.fetch(&key, fetcher(&calls, None, Ok(2))));

    assert_eq!(again, Ok(2));
    assert_eq!(calls.get(), 2);
}

#[test]
fn zero_window_always_revalidates() {
    let (cache, _clock) = cache(0);
    let key = QueryKey::singleton("lessons");
    let calls = Rc::new(Cell::new(0));

    block_on(cache.fetch(&key, fetcher(&calls, None, Ok(1)))).unwrap();
    block_on(cache.fetch(&key, fetcher(&calls, None, Ok(1)))).unwrap();
    assert_eq!(calls.get(), 2);
}

#[test]
fn failure_is_shared_but_not_stored() {
    let (cache, clock) = cache(1_000);
    let key = QueryKey::new("portfolio", "master");
    let calls = Rc::new(Cell::new(0));

    block_on(cache.fetch(&key, fetcher(&calls, None, Ok(5)))).unwrap();
    clock.advance(1_000);

    let (open, gate) = gate();
    let fail = fetcher(&calls, Some(gate), Err(ApiError::new("subscription-required")));
    let (a, b, ()) = block_on(async {
        futures::join!(cache.fetch(&key, &fail), cache.fetch(&key, &fail), async {
            open.send(()).unwrap();
        })
    });

    assert_eq!(a.unwrap_err().message, "subscription-required");
    assert_eq!(b.unwrap_err().message, "subscription-required");
    assert_eq!(calls.get(), 2);
    assert_eq!(cache.peek(&key), Some(5));
    assert!(!cache.is_fetching(&key));
}

#[test]
fn abandoned_request_lets_waiter_take_over() {
    let (cache, _clock) = cache(60_000);
    let key = QueryKey::new("portfolio", "usa");
    let calls = Rc::new(Cell::new(0));
    let (_never, gate) = gate();
    let stuck = fetcher(&calls, Some(gate), Ok(1));
    let quick = fetcher(&calls, None, Ok(2));
    let mut cx = Context::from_waker(noop_waker_ref());

    let mut first = Box::pin(cache.fetch(&key, &stuck));
    assert!(first.as_mut().poll(&mut cx).is_pending());
    assert!(cache.is_fetching(&key));

    let mut second = pin!(cache.fetch(&key, &quick));
    assert!(second.as_mut().poll(&mut cx).is_pending());

    drop(first);
    assert!(!cache.is_fetching(&key));

    match second.as_mut().poll(&mut cx) {
        Poll::Ready(result) => assert_eq!(result, Ok(2)),
        Poll::Pending => panic!("waiter should have re-issued the request"),
    }
    assert_eq!(calls.get(), 2);
}

#[test]
fn invalidated_slot_is_not_repopulated_by_running_request() {
    let (cache, _clock) = cache(60_000);
    let key = QueryKey::new("portfolio", "me");
    let calls = Rc::new(Cell::new(0));
    let (open, gate) = gate();
    let fetch = fetcher(&calls, Some(gate), Ok(9));

    let (result, ()) = block_on(async {
        futures::join!(cache.fetch(&key, &fetch), async {
            cache.invalidate(&key);
            open.send(()).unwrap();
        })
    });

    assert_eq!(result, Ok(9));
    assert_eq!(cache.peek(&key), None);
}

#[test]
fn clear_forgets_everything() {
    let (cache, _clock) = cache(60_000);
    let calls = Rc::new(Cell::new(0));
    let me = QueryKey::new("portfolio", "me");

    block_on(cache.fetch(&me, fetcher(&calls, None, Ok(3)))).unwrap();
    cache.clear();
    assert_eq!(cache.peek(&me), None);
}
