//! Active/finished list projection.
//!
//! # Responsibility
//! - Filter a snapshot down to one status and shape rows for display.
//! - Keep rows in sync with the store through a listener.
//!
//! # Invariants
//! - Rows follow store insertion order.
//! - Every notification rebuilds the rows from scratch; there is no diffing.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::{ListenerId, ProjectStore, StoreResult};
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListItem {
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    /// e.g. `1 person assigned`, `3 persons assigned`.
    pub people_label: String,
}

impl From<&Project> for ProjectListItem {
    fn from(project: &Project) -> Self {
        Self {
            project_id: project.id(),
            title: project.title().to_string(),
            description: project.description().to_string(),
            people_label: people_label(project.people()),
        }
    }
}

/// Renders the rows for one list from a full snapshot.
pub fn render(status: ProjectStatus, snapshot: &[Project]) -> Vec<ProjectListItem> {
    snapshot
        .iter()
        .filter(|project| project.status() == status)
        .map(ProjectListItem::from)
        .collect()
}

/// Heading shown above a list, e.g. `ACTIVE PROJECTS`.
pub fn heading(status: ProjectStatus) -> String {
    format!("{} PROJECTS", status.as_str().to_ascii_uppercase())
}

fn people_label(people: i64) -> String {
    if people == 1 {
        "1 person assigned".to_string()
    } else {
        format!("{people} persons assigned")
    }
}

/// One list kept current by a store listener.
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    rows: Arc<Mutex<Vec<ProjectListItem>>>,
    listener_id: ListenerId,
}

impl ProjectList {
    /// Renders the current store contents and subscribes for updates.
    ///
    /// # Errors
    /// - Propagates `StoreError::ReentrantMutation` when attached from inside a
    ///   store listener.
    pub fn attach(store: &ProjectStore, status: ProjectStatus) -> StoreResult<Self> {
        let rows = Arc::new(Mutex::new(render(status, &store.projects())));
        let sink = Arc::clone(&rows);
        let listener_id = store.add_listener(move |snapshot: Vec<Project>| {
            let rendered = render(status, &snapshot);
            debug!(
                "event=list_render module=view status={} rows={}",
                status.as_str(),
                rendered.len()
            );
            *lock_rows(&sink) = rendered;
        })?;
        Ok(Self {
            status,
            rows,
            listener_id,
        })
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn heading(&self) -> String {
        heading(self.status)
    }

    /// Returns a copy of the current rows.
    pub fn items(&self) -> Vec<ProjectListItem> {
        lock_rows(&self.rows).clone()
    }

    /// Unsubscribes from the store. Rows keep their last rendered state.
    ///
    /// # Errors
    /// - `StoreError::ReentrantMutation` when called from inside a store
    ///   listener; the list stays attached.
    pub fn detach(&self, store: &ProjectStore) -> StoreResult<bool> {
        store.remove_listener(self.listener_id)
    }
}

fn lock_rows(rows: &Mutex<Vec<ProjectListItem>>) -> MutexGuard<'_, Vec<ProjectListItem>> {
    rows.lock().unwrap_or_else(PoisonError::into_inner)
}
