//! Assignment record and sort orders

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single homework assignment.
///
/// Users never see `id`; they address assignments by their 1-based position
/// in the most recent listing, which is only valid until the next mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Backend identity. `None` for the in-memory store, where identity is
    /// array position; a generated UUID for the document store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub course: String,
    pub due_date: NaiveDate,
    pub complete: bool,
}

impl Assignment {
    /// Create a new, incomplete assignment.
    pub fn new(name: String, course: String, due_date: NaiveDate) -> Self {
        Assignment {
            id: None,
            name,
            course,
            due_date,
            complete: false,
        }
    }

    /// Status label used in listings.
    pub fn status(&self) -> &'static str {
        if self.complete {
            "Complete"
        } else {
            "Incomplete"
        }
    }
}

/// The working-set orderings a store can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending due date; the default, re-applied after create and edit.
    #[default]
    DueDate,
    /// Completed assignments grouped before incomplete ones.
    Completion,
}

/// Stable ascending sort on due date.
pub fn sort_by_due_date(assignments: &mut [Assignment]) {
    assignments.sort_by(|a, b| a.due_date.cmp(&b.due_date));
}

/// Group completed assignments before incomplete ones.
///
/// Same-status pairs compare equal, so the stable sort preserves their
/// relative order within each group.
pub fn sort_by_completion(assignments: &mut [Assignment]) {
    assignments.sort_by(|a, b| b.complete.cmp(&a.complete));
}

/// Apply the given order to the working set.
pub fn apply_order(order: SortOrder, assignments: &mut [Assignment]) {
    match order {
        SortOrder::DueDate => sort_by_due_date(assignments),
        SortOrder::Completion => sort_by_completion(assignments),
    }
}
