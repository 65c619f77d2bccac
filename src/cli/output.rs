//! Listing rendering and file export

use std::fs;
use std::path::Path;

use crate::domain::Assignment;
use crate::error::Result;

/// File name the listing export overwrites.
pub const EXPORT_FILE: &str = "assignments.txt";

/// Render the assignment listing.
///
/// The same rendering is printed on the console and written by the export,
/// so the two always match.
pub fn format_listing(assignments: &[Assignment]) -> String {
    let mut output = String::from("Assignments To-Do\n\n");
    for (i, assignment) in assignments.iter().enumerate() {
        output.push_str(&format!(
            "{}.\nCourse: {}\n{}\nDue date: {} [{}]\n\n",
            i + 1,
            assignment.course,
            assignment.name,
            assignment.due_date.format("%Y-%m-%d"),
            assignment.status()
        ));
    }
    output
}

/// Overwrite `path` with the rendered listing.
pub fn write_listing(path: &Path, assignments: &[Assignment]) -> Result<()> {
    fs::write(path, format_listing(assignments))?;
    Ok(())
}
