//! Observable habit store.
//!
//! One `HabitStore` is built at startup and handed to every consumer; there
//! is no global instance. Readers take `Arc` snapshots, writers go through
//! [`HabitStore::dispatch`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::mvi::Reducer;
use crate::store::intent::HabitIntent;
use crate::store::reducer::HabitsReducer;
use crate::store::state::HabitsState;

type Subscriber = Arc<dyn Fn(&Arc<HabitsState>) + Send + Sync>;

/// Handle returned by [`HabitStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Thread-safe habit store handle. Clones share the same state.
#[derive(Clone)]
pub struct HabitStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    /// Current snapshot. Replaced wholesale, never mutated in place.
    state: RwLock<Arc<HabitsState>>,
    /// Serializes dispatches so notifications follow dispatch order.
    dispatch_lock: Mutex<()>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: AtomicU64,
}

impl HabitStore {
    pub fn new(initial: HabitsState) -> Self {
        tracing::debug!(habits = initial.len(), "Habit store created");
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(initial)),
                dispatch_lock: Mutex::new(()),
                subscribers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Current state. The returned snapshot never changes.
    pub fn snapshot(&self) -> Arc<HabitsState> {
        Arc::clone(&self.inner.state.read())
    }

    /// Apply an intent.
    ///
    /// Returns `true` when the state changed. Intents naming an unknown id
    /// (or adding an existing one) leave the state untouched and notify
    /// nobody.
    ///
    /// Subscribers run on the dispatching thread before this returns and
    /// must not dispatch themselves.
    pub fn dispatch(&self, intent: HabitIntent) -> bool {
        let _serial = self.inner.dispatch_lock.lock();
        let current = self.snapshot();
        let action = intent.name();

        let next = HabitsReducer::reduce(HabitsState::clone(&current), intent);
        if next == *current {
            tracing::debug!(action, "Intent left habit state unchanged");
            return false;
        }

        let next = Arc::new(next);
        *self.inner.state.write() = Arc::clone(&next);
        tracing::info!(action, habits = next.len(), "Habit state updated");

        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&next);
        }
        true
    }

    /// Register an observer called with every new snapshot.
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&Arc<HabitsState>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner
            .subscribers
            .lock()
            .push((id, Arc::new(subscriber)));
        id
    }

    /// Like [`HabitStore::subscribe`], but the observer is removed when the
    /// returned guard drops, whichever way its owner exits.
    pub fn subscribe_scoped<F>(&self, subscriber: F) -> Subscription
    where
        F: Fn(&Arc<HabitsState>) + Send + Sync + 'static,
    {
        Subscription {
            store: self.clone(),
            id: self.subscribe(subscriber),
        }
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }
}

/// Subscription tied to a scope. See [`HabitStore::subscribe_scoped`].
pub struct Subscription {
    store: HabitStore,
    id: SubscriptionId,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.store.unsubscribe(self.id);
    }
}

impl Default for HabitStore {
    fn default() -> Self {
        Self::new(HabitsState::default())
    }
}
