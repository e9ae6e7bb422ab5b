//! Catalog commands
//!
//! Add, edit and delete are not backed by any storage: executing them
//! returns `CommandOutcome::BackendPending` with the acknowledgment to show
//! the user, and the catalog is left untouched. Toggling a resource's
//! completion is the only command that changes data.

use super::catalog_data::Catalog;
use std::fmt;
use std::str::FromStr;

/// Record kinds addressable by commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Course,
    Resource,
    Category,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Course => "Course",
            RecordKind::Resource => "Resource",
            RecordKind::Category => "Category",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course" => Ok(RecordKind::Course),
            "resource" => Ok(RecordKind::Resource),
            "category" => Ok(RecordKind::Category),
            _ => Err(format!(
                "Invalid kind '{}'. Valid options are: course, resource, category",
                s
            )),
        }
    }
}

/// Reference to an existing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRef {
    Course(String),
    /// Resource ids are only unique within their course
    Resource { course_id: String, id: String },
    Category(String),
}

impl RecordRef {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordRef::Course(_) => RecordKind::Course,
            RecordRef::Resource { .. } => RecordKind::Resource,
            RecordRef::Category(_) => RecordKind::Category,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RecordRef::Course(id) | RecordRef::Category(id) => id,
            RecordRef::Resource { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCommand {
    Add(RecordKind),
    Edit(RecordRef),
    Delete(RecordRef),
    ToggleCompletion {
        course_id: String,
        resource_id: String,
    },
}

/// User-facing acknowledgment for an action the catalog cannot perform yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: String,
    pub description: String,
    /// Set for actions that would destroy data
    pub destructive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A resource's completion flag was flipped
    Toggled { resource_id: String, completed: bool },
    /// The command targeted nothing; the catalog is unchanged
    Unchanged,
    /// Not implemented without a backend; carries the acknowledgment to show
    BackendPending(Acknowledgment),
}

impl Catalog {
    /// Execute a command against the catalog
    pub fn execute(&mut self, command: CatalogCommand) -> CommandOutcome {
        match command {
            CatalogCommand::ToggleCompletion {
                course_id,
                resource_id,
            } => match self.toggle_resource(&course_id, &resource_id) {
                Some(completed) => {
                    tracing::info!(%course_id, %resource_id, completed, "Toggled resource completion");
                    CommandOutcome::Toggled {
                        resource_id,
                        completed,
                    }
                }
                None => {
                    tracing::debug!(%course_id, %resource_id, "Toggle target not found");
                    CommandOutcome::Unchanged
                }
            },
            CatalogCommand::Add(kind) => {
                tracing::debug!(kind = kind.label(), "Add requested without backend");
                CommandOutcome::BackendPending(Acknowledgment {
                    title: format!("Add New {}", kind),
                    description: format!(
                        "This will open the add {} modal when backend is connected.",
                        kind.label().to_lowercase()
                    ),
                    destructive: false,
                })
            }
            CatalogCommand::Edit(target) => {
                tracing::debug!(kind = target.kind().label(), id = target.id(), "Edit requested without backend");
                CommandOutcome::BackendPending(Acknowledgment {
                    title: format!("Edit {}", target.kind()),
                    description: format!(
                        "Editing {} - This will open the edit modal when backend is connected.",
                        self.display_name(&target)
                    ),
                    destructive: false,
                })
            }
            CatalogCommand::Delete(target) => {
                tracing::debug!(kind = target.kind().label(), id = target.id(), "Delete requested without backend");
                CommandOutcome::BackendPending(Acknowledgment {
                    title: format!("Delete {}", target.kind()),
                    description: format!(
                        "{} {} would be deleted when backend is connected.",
                        target.kind(),
                        target.id()
                    ),
                    destructive: true,
                })
            }
        }
    }

    /// Name or title of the referenced record, falling back to its id
    fn display_name<'a>(&'a self, target: &'a RecordRef) -> &'a str {
        let name = match target {
            RecordRef::Course(id) => self.find_course(id).map(|c| c.name.as_str()),
            RecordRef::Resource { course_id, id } => {
                self.find_resource(course_id, id).map(|r| r.title.as_str())
            }
            RecordRef::Category(id) => self.find_category(id).map(|c| c.name.as_str()),
        };
        name.unwrap_or(target.id())
    }
}
