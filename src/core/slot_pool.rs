//! Slot pool: a counting semaphore with a timed minimum hold per slot.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use tokio::sync::{oneshot, Semaphore};
use tokio::time::Instant;

use crate::runtime::TokioSpawner;

/// Abstraction for spawning the internal per-job task on a runtime.
pub trait Spawn {
    /// Spawn an async task that runs to completion in the background.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Completion hook fired once a job and its hold window have both finished.
pub type DoneCallback = Box<dyn FnOnce() + Send + 'static>;

/// One-shot admission signal returned by [`SlotPool::admit_with_signal`].
///
/// Resolves the moment the job's slot is acquired; it says "admission has
/// happened", not "the job is done". Dropping it without awaiting is fine -
/// the job proceeds regardless.
pub struct Admission {
    rx: oneshot::Receiver<()>,
}

impl Future for Admission {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().rx).poll(cx).map(|_| ())
    }
}

/// Runs the wrapped hook exactly once on drop, so it fires on panic and
/// normal completion alike.
struct CallOnDrop(Option<DoneCallback>);

impl Drop for CallOnDrop {
    fn drop(&mut self) {
        if let Some(hook) = self.0.take() {
            hook();
        }
    }
}

/// Bounded-concurrency admission gate with a minimum per-slot hold window.
///
/// At most `capacity` jobs are in flight at any instant. Each admitted job's
/// slot stays held until `window` has elapsed since acquisition, even when
/// the job body finishes early; jobs that outlast the window release their
/// slot as soon as they end, with no extra sleep.
///
/// Occupancy lives in a [`Semaphore`], so acquisition suspends the internal
/// per-job task (never the caller) and release is RAII-guaranteed: a slot
/// cannot leak, including when the job body panics. Cloning the pool shares
/// the same slot set.
#[derive(Debug, Clone)]
pub struct SlotPool<S = TokioSpawner> {
    slots: Arc<Semaphore>,
    capacity: usize,
    window: Duration,
    spawner: S,
}

impl SlotPool {
    /// Create a pool with `capacity` slots and a minimum hold of `window`.
    ///
    /// `capacity` must be at least 1; a zero-capacity pool never admits
    /// anything. A zero `window` releases slots as soon as the job body
    /// finishes.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn new(capacity: usize, window: Duration) -> Self {
        Self::with_spawner(capacity, window, TokioSpawner::current())
    }
}

impl<S: Spawn> SlotPool<S> {
    /// Create a pool hosting its internal tasks on a custom spawner.
    pub fn with_spawner(capacity: usize, window: Duration, spawner: S) -> Self {
        debug_assert!(capacity >= 1, "slot pool needs at least one slot");
        Self {
            slots: Arc::new(Semaphore::new(capacity)),
            capacity,
            window,
            spawner,
        }
    }

    /// Submit a job and return a one-shot [`Admission`] signal.
    ///
    /// Returns immediately. An internal task waits for a free slot, fires
    /// the signal on acquisition, drives `job` to completion, sleeps out
    /// whatever remains of the hold window, then releases the slot.
    ///
    /// `on_done`, when supplied, fires exactly once after the window sleep
    /// and immediately before release. It also fires when the job panics;
    /// the panic itself is not intercepted and surfaces through the hosting
    /// task per normal Tokio semantics.
    pub fn admit_with_signal<F>(&self, job: F, on_done: Option<DoneCallback>) -> Admission
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (admitted_tx, admitted_rx) = oneshot::channel();
        let slots = Arc::clone(&self.slots);
        let window = self.window;
        tracing::debug!(capacity = self.capacity, "admission scheduled");
        self.spawner.spawn(async move {
            // The pool never closes its semaphore, so acquisition can only
            // wait, not fail.
            let Ok(permit) = Arc::clone(&slots).acquire_owned().await else {
                return;
            };
            let hold_until = Instant::now() + window;
            let _ = admitted_tx.send(());
            tracing::debug!(available = slots.available_permits(), "slot acquired");
            {
                // Dropped after the window sleep on the normal path, during
                // unwind if the job panics.
                let _done = CallOnDrop(on_done);
                job.await;
                tokio::time::sleep_until(hold_until).await;
            }
            tracing::debug!("slot released");
            drop(permit);
        });
        Admission { rx: admitted_rx }
    }

    /// Submit a job and wait until its slot is acquired.
    ///
    /// This is the fire-and-forget convenience wrapper over
    /// [`Self::admit_with_signal`]: it resolves on admission, not on job
    /// completion. Callers that need to observe completion pass an
    /// `on_done` hook to [`Self::admit_with_signal`] instead.
    pub async fn admit<F>(&self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.admit_with_signal(job, None).await;
    }

    /// Number of slots this pool was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Minimum hold window this pool was created with.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Slots currently free.
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }
}
