//! Request caching glue between pages and the [`ApiClient`](crate::api::ApiClient).
//!
//! Every query is identified by a [`QueryKey`]. Keys are grouped in families;
//! a mutation invalidates the families it affects and every live resource of
//! those families re-runs its fetch. Concurrent fetches of the same key share
//! one request, but only within one generation: a fetch started after an
//! invalidation never joins a request that began before it.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::logging::log;
use leptos::*;

use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Reviews(String),
    TopReviews,
    Review(String),
    MyReviews(String),
    Favorites(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryFamily {
    Reviews,
    TopReviews,
    Review,
    MyReviews,
    Favorites,
}

impl QueryKey {
    pub fn family(&self) -> QueryFamily {
        match self {
            QueryKey::Reviews(_) => QueryFamily::Reviews,
            QueryKey::TopReviews => QueryFamily::TopReviews,
            QueryKey::Review(_) => QueryFamily::Review,
            QueryKey::MyReviews(_) => QueryFamily::MyReviews,
            QueryKey::Favorites(_) => QueryFamily::Favorites,
        }
    }

    /// The search term, id or email the key carries; empty for `TopReviews`.
    pub fn arg(&self) -> &str {
        match self {
            QueryKey::Reviews(s) | QueryKey::Review(s) | QueryKey::MyReviews(s) | QueryKey::Favorites(s) => s,
            QueryKey::TopReviews => "",
        }
    }
}

/// Families each mutation makes stale.
pub mod invalidates {
    use super::QueryFamily::{self, *};

    pub const ADD_REVIEW: &[QueryFamily] = &[Reviews, TopReviews];
    pub const UPDATE_REVIEW: &[QueryFamily] = &[Review, MyReviews, Reviews, TopReviews];
    pub const DELETE_REVIEW: &[QueryFamily] = &[MyReviews, Reviews, TopReviews];
    pub const FAVORITES: &[QueryFamily] = &[Favorites];
}

type SharedFetch<T> = Shared<LocalBoxFuture<'static, Result<T, AppError>>>;

/// A key at the family generation its request started in.
type Slot = (QueryKey, u64);

#[derive(Clone)]
pub struct QueryClient {
    generations: RwSignal<HashMap<QueryFamily, u64>>,
    in_flight: Rc<RefCell<HashMap<Slot, Rc<dyn Any>>>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            generations: create_rw_signal(HashMap::new()),
            in_flight: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Current generation of a family. Reading it inside a reactive scope
    /// subscribes to invalidations.
    pub fn generation(&self, family: QueryFamily) -> u64 {
        self.generations.with(|g| g.get(&family).copied().unwrap_or(0))
    }

    pub fn invalidate(&self, families: &[QueryFamily]) {
        log!("[QUERY] invalidating {:?}", families);
        self.generations.update(|g| {
            for family in families {
                *g.entry(*family).or_insert(0) += 1;
            }
        });
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.borrow().len()
    }

    /// Runs `fetch` for `key`, or joins the request already pending for it in
    /// the family's current generation.
    pub async fn fetch<T, F, Fu>(&self, key: QueryKey, fetch: F) -> Result<T, AppError>
    where
        T: Clone + 'static,
        F: FnOnce() -> Fu,
        Fu: Future<Output = Result<T, AppError>> + 'static,
    {
        let generation = self
            .generations
            .with_untracked(|g| g.get(&key.family()).copied().unwrap_or(0));
        let slot: Slot = (key, generation);

        let pending = self
            .in_flight
            .borrow()
            .get(&slot)
            .and_then(|entry| entry.downcast_ref::<SharedFetch<T>>().cloned());

        let shared = match pending {
            Some(shared) => {
                log!("[QUERY] joining in-flight request for {:?}", slot.0);
                shared
            }
            None => {
                let shared = fetch().boxed_local().shared();
                self.in_flight
                    .borrow_mut()
                    .insert(slot.clone(), Rc::new(shared.clone()));
                shared
            }
        };

        let result = shared.clone().await;

        let mut in_flight = self.in_flight.borrow_mut();
        let finished = in_flight
            .get(&slot)
            .and_then(|entry| entry.downcast_ref::<SharedFetch<T>>())
            .map(|current| current.ptr_eq(&shared))
            .unwrap_or(false);
        if finished {
            in_flight.remove(&slot);
        }
        result
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub type Query<T> = Resource<(Option<QueryKey>, u64), Result<T, AppError>>;

/// Creates a resource for `key`, re-fetched whenever the key changes or its
/// family is invalidated. A `None` key disables the query and resolves to
/// `T::default()` without a request.
pub fn use_query<T, K, F, Fu>(key: K, fetch: F) -> Query<T>
where
    T: Clone + Default + 'static,
    K: Fn() -> Option<QueryKey> + 'static,
    F: Fn(QueryKey) -> Fu + 'static,
    Fu: Future<Output = Result<T, AppError>> + 'static,
{
    let client = expect_context::<QueryClient>();
    let source_client = client.clone();
    let fetch = Rc::new(fetch);

    create_local_resource(
        move || {
            let key = key();
            let generation = key
                .as_ref()
                .map(|k| source_client.generation(k.family()))
                .unwrap_or(0);
            (key, generation)
        },
        move |(key, _)| {
            let client = client.clone();
            let fetch = fetch.clone();
            async move {
                match key {
                    None => Ok(T::default()),
                    Some(key) => {
                        let request_key = key.clone();
                        client.fetch(key, move || (*fetch)(request_key)).await
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn keys_map_to_families() {
        assert_eq!(QueryKey::Reviews("tehari".into()).family(), QueryFamily::Reviews);
        assert_eq!(QueryKey::Favorites("a@b.c".into()).family(), QueryFamily::Favorites);
        assert_eq!(QueryKey::Review("1".into()).family(), QueryFamily::Review);
        assert_eq!(QueryKey::MyReviews("me@example.com".into()).arg(), "me@example.com");
        assert_eq!(QueryKey::TopReviews.arg(), "");
    }

    #[test]
    fn invalidate_bumps_only_named_families() {
        let runtime = create_runtime();
        let client = QueryClient::new();

        client.invalidate(invalidates::DELETE_REVIEW);
        assert_eq!(client.generation(QueryFamily::MyReviews), 1);
        assert_eq!(client.generation(QueryFamily::Reviews), 1);
        assert_eq!(client.generation(QueryFamily::TopReviews), 1);
        assert_eq!(client.generation(QueryFamily::Review), 0);
        assert_eq!(client.generation(QueryFamily::Favorites), 0);

        client.invalidate(invalidates::UPDATE_REVIEW);
        assert_eq!(client.generation(QueryFamily::Review), 1);
        assert_eq!(client.generation(QueryFamily::Reviews), 2);

        runtime.dispose();
    }

    #[test]
    fn concurrent_fetches_of_one_key_share_a_request() {
        let runtime = create_runtime();
        let client = QueryClient::new();
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<()>();
        let rx = rx.shared();

        let first = {
            let calls = calls.clone();
            let rx = rx.clone();
            client.fetch(QueryKey::TopReviews, move || {
                calls.set(calls.get() + 1);
                async move {
                    let _ = rx.await;
                    Ok::<_, AppError>(vec![1u8, 2, 3])
                }
            })
        };
        let second = {
            let calls = calls.clone();
            client.fetch(QueryKey::TopReviews, move || {
                calls.set(calls.get() + 1);
                async move { Ok::<_, AppError>(vec![9u8]) }
            })
        };
        let release = async move {
            let _ = tx.send(());
        };

        let (a, b, _) = block_on(async { futures::join!(first, second, release) });
        assert_eq!(a.unwrap(), vec![1, 2, 3]);
        assert_eq!(b.unwrap(), vec![1, 2, 3]);
        assert_eq!(calls.get(), 1);
        assert_eq!(client.in_flight_count(), 0);

        runtime.dispose();
    }

    #[test]
    fn completed_fetch_is_not_reused() {
        let runtime = create_runtime();
        let client = QueryClient::new();
        let key = QueryKey::Review("42".into());

        let first = block_on(client.fetch(key.clone(), || async { Ok::<_, AppError>(1u32) }));
        let second = block_on(client.fetch(key, || async { Ok::<_, AppError>(2u32) }));
        assert_eq!(first.unwrap(), 1);
        assert_eq!(second.unwrap(), 2);

        runtime.dispose();
    }

    #[test]
    fn fetch_after_invalidation_does_not_join_older_request() {
        let runtime = create_runtime();
        let client = QueryClient::new();
        let key = QueryKey::Reviews("biryani".into());
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<()>();

        let (stale, fresh) = block_on(async {
            let mut stale = {
                let calls = calls.clone();
                Box::pin(client.fetch(key.clone(), move || {
                    calls.set(calls.get() + 1);
                    async move {
                        let _ = rx.await;
                        Ok::<_, AppError>("before edit")
                    }
                }))
            };
            assert!(futures::poll!(&mut stale).is_pending());
            assert_eq!(client.in_flight_count(), 1);

            client.invalidate(invalidates::UPDATE_REVIEW);
            let fresh = {
                let calls = calls.clone();
                client
                    .fetch(key.clone(), move || {
                        calls.set(calls.get() + 1);
                        async move { Ok::<_, AppError>("after edit") }
                    })
                    .await
            };

            let _ = tx.send(());
            (stale.await, fresh)
        });

        assert_eq!(fresh.unwrap(), "after edit");
        assert_eq!(stale.unwrap(), "before edit");
        assert_eq!(calls.get(), 2);
        assert_eq!(client.in_flight_count(), 0);
        runtime.dispose();
    }

    #[test]
    fn errors_are_shared_with_every_waiter() {
        let runtime = create_runtime();
        let client = QueryClient::new();
        let result = block_on(client.fetch(QueryKey::TopReviews, || async {
            Err::<Vec<u8>, _>(AppError::from_status(500, ""))
        }));
        assert!(matches!(result, Err(AppError::Status { status: 500, .. })));
        assert_eq!(client.in_flight_count(), 0);
        runtime.dispose();
    }
}
