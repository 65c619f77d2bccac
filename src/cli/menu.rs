//! Interactive menu loop
//!
//! Translates numbered menu choices plus follow-up prompts into single
//! store calls. Generic over the input and output streams so sessions can
//! be driven from buffers in tests; the binary wires stdin and stdout.

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::cli::output::{self, EXPORT_FILE};
use crate::error::{HwtrackError, Result};
use crate::store::AssignmentStore;

/// Run the interactive session until the user picks Exit or input ends.
///
/// Recoverable input errors are printed and the loop continues; backend
/// errors propagate to the caller.
pub fn run<R: BufRead, W: Write>(
    store: &mut dyn AssignmentStore,
    mut input: R,
    mut out: W,
) -> Result<()> {
    write_menu(&mut out)?;

    loop {
        write!(out, "Enter Option Required 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11: ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };

        let Ok(choice) = line.trim().parse::<u32>() else {
            writeln!(out, "Invalid Choice")?;
            continue;
        };

        let outcome = match choice {
            1 => add(store, &mut input, &mut out),
            2 => list(store, &mut out),
            3 => mark_complete(store, &mut input, &mut out),
            4 => mark_all_complete(store, &mut out),
            5 => edit(store, &mut input, &mut out),
            6 => delete(store, &mut input, &mut out),
            7 => delete_all(store, &mut out),
            8 => delete_completed(store, &mut out),
            9 => sort_by_completion(store, &mut out),
            10 => export(store, &mut out),
            11 => return Ok(()),
            _ => {
                writeln!(out, "Invalid Choice")?;
                continue;
            }
        };

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => writeln!(out, "{}", e)?,
            Err(e) => return Err(e),
        }
    }
}

fn write_menu(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nOptions")?;
    writeln!(out, "1. Add Assignment")?;
    writeln!(out, "2. List Assignments")?;
    writeln!(out, "3. Mark as Complete")?;
    writeln!(out, "4. Mark All as Complete")?;
    writeln!(out, "5. Edit Assignment")?;
    writeln!(out, "6. Delete Assignment")?;
    writeln!(out, "7. Delete All Assignments")?;
    writeln!(out, "8. Delete All Completed Assignments")?;
    writeln!(out, "9. Sort Assignments by Completion Status")?;
    writeln!(out, "10. Print Assignments to File")?;
    writeln!(out, "11. Exit")?;
    Ok(())
}

/// Read one line, stripped of its line ending. `None` means end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| HwtrackError::InvalidDate)
}

fn parse_index(text: &str) -> Result<usize> {
    text.trim().parse().map_err(|_| HwtrackError::InvalidIndex)
}

fn add<R: BufRead, W: Write>(
    store: &mut dyn AssignmentStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(name) = prompt(input, out, "Enter Assignment Description: ")? else {
        return Ok(());
    };
    let Some(course) = prompt(input, out, "Enter Course: ")? else {
        return Ok(());
    };
    let Some(date_text) = prompt(input, out, "Enter Due Date (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let due_date = parse_date(&date_text)?;

    store.add(name, course, due_date)?;
    writeln!(out, "Assignment Added")?;
    Ok(())
}

fn list<W: Write>(store: &mut dyn AssignmentStore, out: &mut W) -> Result<()> {
    let assignments = store.list()?;
    write!(out, "\n{}", output::format_listing(assignments))?;
    Ok(())
}

fn mark_complete<R: BufRead, W: Write>(
    store: &mut dyn AssignmentStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(text) = prompt(input, out, "Enter Index: ")? else {
        return Ok(());
    };
    let position = parse_index(&text)?;

    store.mark_complete(position)?;
    writeln!(out, "Assignment Marked as Complete")?;
    Ok(())
}

fn mark_all_complete<W: Write>(store: &mut dyn AssignmentStore, out: &mut W) -> Result<()> {
    store.mark_all_complete()?;
    writeln!(out, "All Assignments Marked as Complete")?;
    Ok(())
}

fn edit<R: BufRead, W: Write>(
    store: &mut dyn AssignmentStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(index_text) = prompt(input, out, "Enter Index: ")? else {
        return Ok(());
    };
    let position = parse_index(&index_text)?;

    let Some(name) = prompt(input, out, "Enter New Assignment Name: ")? else {
        return Ok(());
    };
    let Some(course) = prompt(input, out, "Enter New Course: ")? else {
        return Ok(());
    };
    let Some(date_text) = prompt(input, out, "Enter New Due Date (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let due_date = parse_date(&date_text)?;

    store.edit(position, name, course, due_date)?;
    writeln!(out, "Assignment Edited Successfully")?;
    Ok(())
}

fn delete<R: BufRead, W: Write>(
    store: &mut dyn AssignmentStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(text) = prompt(input, out, "Enter Index: ")? else {
        return Ok(());
    };
    let position = parse_index(&text)?;

    store.delete(position)?;
    writeln!(out, "Assignment Deleted")?;
    Ok(())
}

fn delete_all<W: Write>(store: &mut dyn AssignmentStore, out: &mut W) -> Result<()> {
    store.delete_all()?;
    writeln!(out, "All Assignments Deleted")?;
    Ok(())
}

fn delete_completed<W: Write>(store: &mut dyn AssignmentStore, out: &mut W) -> Result<()> {
    store.delete_completed()?;
    writeln!(out, "All Completed Assignments Deleted")?;
    Ok(())
}

fn sort_by_completion<W: Write>(store: &mut dyn AssignmentStore, out: &mut W) -> Result<()> {
    store.sort_by_completion()?;
    writeln!(out, "Assignments Sorted by Completion Status")?;
    Ok(())
}

fn export<W: Write>(store: &mut dyn AssignmentStore, out: &mut W) -> Result<()> {
    let assignments = store.list()?;

    // Export failures never reach the fatal tier.
    match output::write_listing(Path::new(EXPORT_FILE), assignments) {
        Ok(()) => writeln!(out, "Assignments printed to {}", EXPORT_FILE)?,
        Err(_) => writeln!(out, "Error creating file")?,
    }
    Ok(())
}
