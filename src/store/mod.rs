//! Storage layer - The assignment store contract and its backends

pub mod document;
pub mod memory;

use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::Assignment;
use crate::error::{HwtrackError, Result};

pub use document::DocumentStore;
pub use memory::MemoryStore;

/// Storage contract shared by the in-memory and document-collection
/// backends.
///
/// Positions are 1-based display positions taken from the most recent
/// listing; they are only valid until the next mutation.
pub trait AssignmentStore {
    /// Append a new, incomplete assignment and re-sort by due date.
    fn add(&mut self, name: String, course: String, due_date: NaiveDate) -> Result<()>;

    /// The working set in its current order.
    ///
    /// The document backend reloads from the backing collection first, so
    /// the listing observes the latest persisted state.
    fn list(&mut self) -> Result<&[Assignment]>;

    /// Mark the assignment at `position` complete.
    fn mark_complete(&mut self, position: usize) -> Result<()>;

    /// Mark every assignment complete.
    fn mark_all_complete(&mut self) -> Result<()>;

    /// Overwrite name, course and due date at `position`, then re-sort by
    /// due date.
    fn edit(&mut self, position: usize, name: String, course: String, due_date: NaiveDate)
        -> Result<()>;

    /// Remove the assignment at `position`.
    fn delete(&mut self, position: usize) -> Result<()>;

    /// Clear the working set.
    fn delete_all(&mut self) -> Result<()>;

    /// Drop every completed assignment, keeping the rest in relative order.
    fn delete_completed(&mut self) -> Result<()>;

    /// Re-apply the default ascending due-date order.
    fn sort_by_due_date(&mut self) -> Result<()>;

    /// Group completed assignments before incomplete ones.
    fn sort_by_completion(&mut self) -> Result<()>;
}

/// Translate a 1-based display position into a working-set index.
pub(crate) fn index_for(position: usize, len: usize) -> Result<usize> {
    if position >= 1 && position <= len {
        Ok(position - 1)
    } else {
        Err(HwtrackError::InvalidIndex)
    }
}

/// Selectable storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Working set lives in process memory and dies with it.
    #[default]
    Memory,
    /// Working set mirrors a JSON document collection on disk.
    Document,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "document" => Ok(StoreBackend::Document),
            _ => Err(format!("Invalid backend: {} (valid: memory, document)", s)),
        }
    }
}
