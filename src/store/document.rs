//! Document-collection assignment store
//!
//! The backing collection is a JSON file holding one document per
//! assignment. It is the source of truth: every mutation rewrites the full
//! collection and then reloads it, so the in-process working set is a
//! disposable read-through snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{self, Assignment, SortOrder};
use crate::error::{HwtrackError, Result};
use crate::store::{index_for, AssignmentStore};

/// Environment variable naming the collection file.
pub const DB_ENV_VAR: &str = "HWTRACK_DB";

/// Assignment store backed by a JSON document collection on disk.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    order: SortOrder,
    cache: Vec<Assignment>,
}

impl DocumentStore {
    /// Open the collection at `path`.
    ///
    /// A missing file reads as an empty collection (first run); a present
    /// but unreadable or unparsable one is a fatal error.
    pub fn open(path: PathBuf) -> Result<Self> {
        let mut store = DocumentStore {
            path,
            order: SortOrder::default(),
            cache: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Open the collection named by the `HWTRACK_DB` environment variable.
    pub fn open_from_env() -> Result<Self> {
        match std::env::var(DB_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::open(PathBuf::from(path)),
            _ => Err(HwtrackError::Config(format!(
                "{} is not set; it must name the collection file for the document backend",
                DB_ENV_VAR
            ))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_collection(&self) -> Result<Vec<Assignment>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let assignments = serde_json::from_str(&contents)?;
        Ok(assignments)
    }

    /// Discard the working set and re-read the full collection, applying
    /// the active order (collections are unordered).
    fn reload(&mut self) -> Result<()> {
        let mut assignments = self.read_collection()?;
        domain::apply_order(self.order, &mut assignments);
        self.cache = assignments;
        Ok(())
    }

    /// Persist the working set as the whole collection, then reload.
    fn commit(&mut self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.cache)?;
        fs::write(&self.path, contents)?;
        self.reload()
    }
}

impl AssignmentStore for DocumentStore {
    fn add(&mut self, name: String, course: String, due_date: NaiveDate) -> Result<()> {
        let mut assignment = Assignment::new(name, course, due_date);
        assignment.id = Some(Uuid::new_v4());
        self.cache.push(assignment);
        self.order = SortOrder::DueDate;
        self.commit()
    }

    fn list(&mut self) -> Result<&[Assignment]> {
        self.reload()?;
        Ok(&self.cache)
    }

    fn mark_complete(&mut self, position: usize) -> Result<()> {
        let idx = index_for(position, self.cache.len())?;
        self.cache[idx].complete = true;
        self.commit()
    }

    fn mark_all_complete(&mut self) -> Result<()> {
        for assignment in &mut self.cache {
            assignment.complete = true;
        }
        self.commit()
    }

    fn edit(
        &mut self,
        position: usize,
        name: String,
        course: String,
        due_date: NaiveDate,
    ) -> Result<()> {
        let idx = index_for(position, self.cache.len())?;
        let assignment = &mut self.cache[idx];
        assignment.name = name;
        assignment.course = course;
        assignment.due_date = due_date;
        self.order = SortOrder::DueDate;
        self.commit()
    }

    fn delete(&mut self, position: usize) -> Result<()> {
        let idx = index_for(position, self.cache.len())?;
        self.cache.remove(idx);
        self.commit()
    }

    fn delete_all(&mut self) -> Result<()> {
        self.cache.clear();
        self.commit()
    }

    fn delete_completed(&mut self) -> Result<()> {
        self.cache.retain(|a| !a.complete);
        self.commit()
    }

    fn sort_by_due_date(&mut self) -> Result<()> {
        self.order = SortOrder::DueDate;
        domain::sort_by_due_date(&mut self.cache);
        Ok(())
    }

    fn sort_by_completion(&mut self) -> Result<()> {
        self.order = SortOrder::Completion;
        domain::sort_by_completion(&mut self.cache);
        Ok(())
    }
}
