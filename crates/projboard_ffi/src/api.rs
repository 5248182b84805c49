//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose form submission and list rendering as sync FRB calls.
//! - Flatten core errors into stable UTF-8 messages.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All calls share one process-wide board: the shared `ProjectStore` plus
//!   one attached list per status, regardless of the calling thread.

use log::warn;
use once_cell::sync::OnceCell;
use projboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FormError, FormInput, ProjectForm, ProjectList, ProjectListItem, ProjectStatus, ProjectStore,
    StoreResult,
};
use std::sync::Arc;

static BOARD: OnceCell<Board> = OnceCell::new();

/// Shared store with its active/finished lists attached once per process.
struct Board {
    store: Arc<ProjectStore>,
    lists: Vec<ProjectList>,
}

impl Board {
    fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Result envelope for a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectActionResponse {
    pub ok: bool,
    /// Created project ID on success.
    pub project_id: Option<String>,
    /// Text for the UI alert or status line.
    pub message: String,
}

/// One row of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListEntry {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub people_label: String,
}

/// Full render payload for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    /// Normalized list kind, or the raw input when it is unknown.
    pub kind: String,
    pub heading: String,
    pub items: Vec<ProjectListEntry>,
    pub message: String,
}

/// Submits the project form.
///
/// # FFI contract
/// - `people` is the raw text of the headcount field.
/// - Invalid input returns `ok = false` with the fixed alert message.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_project(title: String, description: String, people: String) -> ProjectActionResponse {
    let board = match board() {
        Ok(board) => board,
        Err(err) => {
            return ProjectActionResponse {
                ok: false,
                project_id: None,
                message: format!("submit_project failed: {err}"),
            };
        }
    };
    let form = ProjectForm::new(&board.store);
    match form.submit(&FormInput::new(title, description, people)) {
        Ok(id) => ProjectActionResponse {
            ok: true,
            project_id: Some(id.to_string()),
            message: "Project added.".to_string(),
        },
        Err(FormError::InvalidInput) => ProjectActionResponse {
            ok: false,
            project_id: None,
            message: FormError::InvalidInput.to_string(),
        },
        Err(err) => {
            warn!("event=submit_project module=ffi status=error");
            ProjectActionResponse {
                ok: false,
                project_id: None,
                message: format!("submit_project failed: {err}"),
            }
        }
    }
}

/// Renders one list (`active` or `finished`) from the shared store.
#[flutter_rust_bridge::frb(sync)]
pub fn list_projects(kind: String) -> ProjectListResponse {
    let Some(status) = ProjectStatus::parse(kind.as_str()) else {
        return ProjectListResponse {
            kind,
            heading: String::new(),
            items: Vec::new(),
            message: "unknown list kind; expected active|finished".to_string(),
        };
    };

    let list = match board() {
        Ok(board) => board.list(status),
        Err(err) => {
            return ProjectListResponse {
                kind: status.as_str().to_string(),
                heading: String::new(),
                items: Vec::new(),
                message: format!("list_projects failed: {err}"),
            };
        }
    };
    let Some(list) = list else {
        return ProjectListResponse {
            kind: status.as_str().to_string(),
            heading: String::new(),
            items: Vec::new(),
            message: "list is not attached".to_string(),
        };
    };

    let items = list
        .items()
        .into_iter()
        .map(to_list_entry)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No projects.".to_string()
    } else {
        format!("{} project(s).", items.len())
    };
    ProjectListResponse {
        kind: status.as_str().to_string(),
        heading: list.heading(),
        items,
        message,
    }
}

fn board() -> StoreResult<&'static Board> {
    BOARD.get_or_try_init(|| {
        let store = ProjectStore::instance();
        let lists = [ProjectStatus::Active, ProjectStatus::Finished]
            .into_iter()
            .map(|status| ProjectList::attach(&store, status))
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(Board { store, lists })
    })
}

fn to_list_entry(item: ProjectListItem) -> ProjectListEntry {
    ProjectListEntry {
        project_id: item.project_id.to_string(),
        title: item.title,
        description: item.description,
        people_label: item.people_label,
    }
}

#[cfg(test)]
mod tests {
    use super::{core_version, init_logging, list_projects, ping, submit_project};
    use projboard_core::INVALID_INPUT_MESSAGE;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn submit_then_list_shows_project_in_active_list() {
        let response = submit_project(
            "Build API".to_string(),
            "Backend work".to_string(),
            "3".to_string(),
        );
        assert!(response.ok, "{}", response.message);
        let project_id = response.project_id.expect("created project id");

        let active = list_projects("active".to_string());
        assert_eq!(active.heading, "ACTIVE PROJECTS");
        assert!(active.items.iter().any(|item| item.project_id == project_id));

        let finished = list_projects(" Finished ".to_string());
        assert_eq!(finished.kind, "finished");
        assert!(finished.items.is_empty());
    }

    #[test]
    fn submission_from_another_thread_is_listed_here() {
        let response = std::thread::spawn(|| {
            submit_project(
                "Write docs".to_string(),
                "Docs work for the API".to_string(),
                "2".to_string(),
            )
        })
        .join()
        .expect("submit thread");
        assert!(response.ok, "{}", response.message);
        let project_id = response.project_id.expect("created project id");

        let active = list_projects("active".to_string());
        assert!(active.items.iter().any(|item| item.project_id == project_id));
        assert!(active
            .items
            .iter()
            .any(|item| item.people_label == "2 persons assigned"));
    }

    #[test]
    fn invalid_submission_returns_alert_message() {
        let response = submit_project(String::new(), "Backend work".to_string(), "3".to_string());
        assert!(!response.ok);
        assert_eq!(response.project_id, None);
        assert_eq!(response.message, INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn unknown_list_kind_is_reported() {
        let response = list_projects("archived".to_string());
        assert!(response.items.is_empty());
        assert!(response.message.contains("unknown list kind"));
    }
}
