//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record created by the store.
//! - Define the status selector used by the two rendered lists.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - Fields are read-only after construction; there is no edit path.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one project record.
pub type ProjectId = Uuid;

/// Which list a project is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Newly added, still in progress.
    Active,
    /// Completed. Nothing moves a project here yet.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase label, also used as the list kind at the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a list kind label. Accepts surrounding whitespace and any case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

/// One project entered through the board form.
///
/// The store does not check `people`; callers validate before adding, so a
/// non-positive headcount is representable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: i64,
    status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated ID.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: i64) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates an active project with a caller-provided ID.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> i64 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn new_project_starts_active_with_generated_id() {
        let project = Project::new("Build API", "Backend work", 3);
        assert!(!project.id().is_nil());
        assert_eq!(project.status(), ProjectStatus::Active);
        assert_eq!(project.people(), 3);
    }

    #[test]
    fn status_parse_accepts_labels_case_insensitively() {
        assert_eq!(ProjectStatus::parse(" Active "), Some(ProjectStatus::Active));
        assert_eq!(
            ProjectStatus::parse("FINISHED"),
            Some(ProjectStatus::Finished)
        );
        assert_eq!(ProjectStatus::parse("archived"), None);
    }
}
