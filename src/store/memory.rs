//! In-memory assignment store

use chrono::NaiveDate;

use crate::domain::{self, Assignment};
use crate::error::Result;
use crate::store::{index_for, AssignmentStore};

/// Working set held in process memory; identity is array position.
#[derive(Debug, Default)]
pub struct MemoryStore {
    assignments: Vec<Assignment>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl AssignmentStore for MemoryStore {
    fn add(&mut self, name: String, course: String, due_date: NaiveDate) -> Result<()> {
        self.assignments.push(Assignment::new(name, course, due_date));
        domain::sort_by_due_date(&mut self.assignments);
        Ok(())
    }

    fn list(&mut self) -> Result<&[Assignment]> {
        Ok(&self.assignments)
    }

    fn mark_complete(&mut self, position: usize) -> Result<()> {
        let idx = index_for(position, self.assignments.len())?;
        self.assignments[idx].complete = true;
        Ok(())
    }

    fn mark_all_complete(&mut self) -> Result<()> {
        for assignment in &mut self.assignments {
            assignment.complete = true;
        }
        Ok(())
    }

    fn edit(
        &mut self,
        position: usize,
        name: String,
        course: String,
        due_date: NaiveDate,
    ) -> Result<()> {
        let idx = index_for(position, self.assignments.len())?;
        let assignment = &mut self.assignments[idx];
        assignment.name = name;
        assignment.course = course;
        assignment.due_date = due_date;
        domain::sort_by_due_date(&mut self.assignments);
        Ok(())
    }

    fn delete(&mut self, position: usize) -> Result<()> {
        let idx = index_for(position, self.assignments.len())?;
        self.assignments.remove(idx);
        Ok(())
    }

    fn delete_all(&mut self) -> Result<()> {
        self.assignments.clear();
        Ok(())
    }

    fn delete_completed(&mut self) -> Result<()> {
        self.assignments.retain(|a| !a.complete);
        Ok(())
    }

    fn sort_by_due_date(&mut self) -> Result<()> {
        domain::sort_by_due_date(&mut self.assignments);
        Ok(())
    }

    fn sort_by_completion(&mut self) -> Result<()> {
        domain::sort_by_completion(&mut self.assignments);
        Ok(())
    }
}
