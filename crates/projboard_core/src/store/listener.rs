//! Listener contract and registration bookkeeping.

use crate::model::project::Project;

/// Receives a full snapshot after every store mutation.
///
/// Any `FnMut(Vec<Project>) + Send` closure is a listener, so callers bind
/// their own receiver at registration time.
pub trait ProjectListener: Send {
    fn on_projects_changed(&mut self, snapshot: Vec<Project>);
}

impl<F> ProjectListener for F
where
    F: FnMut(Vec<Project>) + Send,
{
    fn on_projects_changed(&mut self, snapshot: Vec<Project>) {
        self(snapshot)
    }
}

/// Handle returned on registration; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Registration-ordered listener list.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    entries: Vec<(ListenerId, Box<dyn ProjectListener>)>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, listener: Box<dyn ProjectListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Calls every listener in registration order, each with its own copy.
    pub(crate) fn notify(&mut self, snapshot: &[Project]) {
        for (_, listener) in &mut self.entries {
            listener.on_projects_changed(snapshot.to_vec());
        }
    }
}
