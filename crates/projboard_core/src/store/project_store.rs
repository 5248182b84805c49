//! Project store with synchronous change notification.
//!
//! # Responsibility
//! - Create project records and keep them in insertion order.
//! - Fan out owned snapshots to listeners in registration order.
//!
//! # Invariants
//! - The store only grows; there is no edit or delete path.
//! - `add_project` performs no validation; callers validate first.
//! - Adds are serialized: snapshot order matches notification order.
//! - Mutation from the thread that is currently notifying returns
//!   `StoreError::ReentrantMutation`; other threads wait for the notification
//!   to finish.
//! - One shared instance exists per process.

use crate::model::project::{Project, ProjectId};
use crate::store::listener::{ListenerId, ListenerRegistry, ProjectListener};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

static SHARED_STORE: Lazy<Arc<ProjectStore>> = Lazy::new(|| Arc::new(ProjectStore::new()));

/// Store-level errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A listener tried to mutate the store while being notified.
    ReentrantMutation,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReentrantMutation => {
                write!(f, "project store cannot be mutated while notifying listeners")
            }
        }
    }
}

impl Error for StoreError {}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered project container with listener fan-out.
#[derive(Default)]
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
    listeners: Mutex<ListenerRegistry>,
    /// Thread currently running listeners, if any.
    notifying: Mutex<Option<ThreadId>>,
}

impl ProjectStore {
    /// Creates an empty store owned by the caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide shared store, creating it on first use.
    ///
    /// Repeated calls, from any thread, return the same instance
    /// (`Arc::ptr_eq` holds).
    pub fn instance() -> Arc<ProjectStore> {
        Arc::clone(&SHARED_STORE)
    }

    /// Registers one listener. It runs after every later `add_project`.
    ///
    /// # Errors
    /// - `StoreError::ReentrantMutation` when called from inside a listener.
    pub fn add_listener(
        &self,
        listener: impl ProjectListener + 'static,
    ) -> StoreResult<ListenerId> {
        self.reject_reentrant("listener_add")?;
        let mut listeners = lock(&self.listeners);
        let id = listeners.add(Box::new(listener));
        debug!(
            "event=listener_add module=store status=ok listener_id={} listeners={}",
            id.get(),
            listeners.len()
        );
        Ok(id)
    }

    /// Unregisters one listener. Returns `false` when the id is unknown.
    ///
    /// Removal is not deferred: a listener cannot unsubscribe itself (or any
    /// other listener) from inside its own callback. Unsubscribe after
    /// `add_project` returns instead.
    ///
    /// # Errors
    /// - `StoreError::ReentrantMutation` when called from inside a listener;
    ///   the listener stays registered.
    pub fn remove_listener(&self, id: ListenerId) -> StoreResult<bool> {
        self.reject_reentrant("listener_remove")?;
        let mut listeners = lock(&self.listeners);
        let removed = listeners.remove(id);
        debug!(
            "event=listener_remove module=store status=ok listener_id={} removed={} listeners={}",
            id.get(),
            removed,
            listeners.len()
        );
        Ok(removed)
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// # Contract
    /// - Generates a fresh `ProjectId`.
    /// - Each listener receives its own copy of the full sequence.
    /// - Listeners run synchronously on the calling thread before this call
    ///   returns.
    ///
    /// # Errors
    /// - `StoreError::ReentrantMutation` when called from inside a listener;
    ///   the store is left unchanged.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
    ) -> StoreResult<ProjectId> {
        self.reject_reentrant("project_add")?;
        let mut listeners = lock(&self.listeners);

        let project = Project::new(title, description, people);
        let id = project.id();
        let snapshot = {
            let mut projects = lock(&self.projects);
            projects.push(project);
            projects.clone()
        };

        info!(
            "event=project_add module=store status=ok count={} listeners={}",
            snapshot.len(),
            listeners.len()
        );
        let _notifying = NotifyingGuard::enter(&self.notifying);
        listeners.notify(&snapshot);
        Ok(id)
    }

    /// Returns a copy of all projects in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        lock(&self.projects).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.projects).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.projects).is_empty()
    }

    fn reject_reentrant(&self, operation: &'static str) -> StoreResult<()> {
        if *lock(&self.notifying) == Some(thread::current().id()) {
            warn!("event={operation} module=store status=rejected reason=reentrant");
            return Err(StoreError::ReentrantMutation);
        }
        Ok(())
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.len())
            .field(
                "listeners",
                &self.listeners.try_lock().map(|registry| registry.len()).ok(),
            )
            .finish()
    }
}

/// Marks the current thread as notifying until dropped, including on unwind.
struct NotifyingGuard<'a> {
    slot: &'a Mutex<Option<ThreadId>>,
}

impl<'a> NotifyingGuard<'a> {
    fn enter(slot: &'a Mutex<Option<ThreadId>>) -> Self {
        *lock(slot) = Some(thread::current().id());
        Self { slot }
    }
}

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        *lock(self.slot) = None;
    }
}

// Why: a panicking listener poisons the registry lock; the data itself stays
// consistent, so later calls keep working instead of cascading the panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
