//! Integration tests for the assignment store contract
//!
//! Every property runs against both backends: the in-memory working set and
//! the document collection in a temp directory.

use chrono::NaiveDate;
use hwtrack::store::{AssignmentStore, DocumentStore, MemoryStore};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn with_backends(test: impl Fn(&mut dyn AssignmentStore)) {
    let mut memory = MemoryStore::new();
    test(&mut memory);

    let temp = TempDir::new().unwrap();
    let mut document = DocumentStore::open(temp.path().join("assignments.json")).unwrap();
    test(&mut document);
}

fn names(store: &mut dyn AssignmentStore) -> Vec<String> {
    store
        .list()
        .unwrap()
        .iter()
        .map(|a| a.name.clone())
        .collect()
}

#[test]
fn test_working_set_sorted_after_every_create() {
    with_backends(|store| {
        store
            .add("C".to_string(), "Math".to_string(), date(2024, 6, 10))
            .unwrap();
        store
            .add("A".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();
        assert_eq!(names(store), vec!["A", "C"]);

        store
            .add("B".to_string(), "Math".to_string(), date(2024, 6, 5))
            .unwrap();
        assert_eq!(names(store), vec!["A", "B", "C"]);
    });
}

#[test]
fn test_create_is_stable_on_due_date_ties() {
    with_backends(|store| {
        store
            .add("first".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();
        store
            .add("second".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();
        store
            .add("third".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();
        assert_eq!(names(store), vec!["first", "second", "third"]);
    });
}

#[test]
fn test_out_of_range_positions_leave_set_unchanged() {
    with_backends(|store| {
        store
            .add("A".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();

        for position in [0, 2, 99] {
            assert!(store.mark_complete(position).is_err());
            assert!(store
                .edit(
                    position,
                    "X".to_string(),
                    "Y".to_string(),
                    date(2024, 7, 1)
                )
                .is_err());
            assert!(store.delete(position).is_err());
        }

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "A");
        assert_eq!(listed[0].course, "Math");
        assert_eq!(listed[0].due_date, date(2024, 6, 1));
        assert!(!listed[0].complete);
    });
}

#[test]
fn test_delete_completed_filters_and_preserves_order() {
    with_backends(|store| {
        store
            .add("A".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();
        store
            .add("B".to_string(), "Math".to_string(), date(2024, 6, 2))
            .unwrap();
        store
            .add("C".to_string(), "Math".to_string(), date(2024, 6, 3))
            .unwrap();
        store
            .add("D".to_string(), "Math".to_string(), date(2024, 6, 4))
            .unwrap();

        store.mark_complete(1).unwrap();
        store.mark_complete(3).unwrap();
        store.delete_completed().unwrap();

        assert_eq!(names(store), vec!["B", "D"]);
        assert!(store.list().unwrap().iter().all(|a| !a.complete));
    });
}

#[test]
fn test_mark_all_complete_marks_everything() {
    with_backends(|store| {
        store
            .add("A".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();
        store
            .add("B".to_string(), "Math".to_string(), date(2024, 6, 2))
            .unwrap();

        store.mark_all_complete().unwrap();
        assert!(store.list().unwrap().iter().all(|a| a.complete));
    });
}

#[test]
fn test_round_trip_single_assignment() {
    with_backends(|store| {
        store
            .add("Essay".to_string(), "Biology".to_string(), date(2024, 5, 1))
            .unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Essay");
        assert_eq!(listed[0].course, "Biology");
        assert_eq!(listed[0].due_date, date(2024, 5, 1));
        assert!(!listed[0].complete);
    });
}

#[test]
fn test_delete_all_clears_working_set() {
    with_backends(|store| {
        store
            .add("A".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();
        store
            .add("B".to_string(), "Math".to_string(), date(2024, 6, 2))
            .unwrap();

        store.delete_all().unwrap();
        assert!(store.list().unwrap().is_empty());
    });
}

// End-to-end lifecycle: B sorts before A by due date, gets marked at
// position 1, groups first under completion order, and is dropped by
// delete-completed.
#[test]
fn test_completion_scenario() {
    with_backends(|store| {
        store
            .add("A".to_string(), "Math".to_string(), date(2024, 6, 10))
            .unwrap();
        store
            .add("B".to_string(), "History".to_string(), date(2024, 6, 1))
            .unwrap();
        assert_eq!(names(store), vec!["B", "A"]);

        store.mark_complete(1).unwrap();
        {
            let listed = store.list().unwrap();
            let b = listed.iter().find(|a| a.name == "B").unwrap();
            assert!(b.complete);
        }

        store.sort_by_completion().unwrap();
        assert_eq!(names(store), vec!["B", "A"]);

        store.delete_completed().unwrap();
        assert_eq!(names(store), vec!["A"]);
    });
}

#[test]
fn test_sort_by_due_date_restores_default_order() {
    with_backends(|store| {
        store
            .add("A".to_string(), "Math".to_string(), date(2024, 6, 10))
            .unwrap();
        store
            .add("B".to_string(), "Math".to_string(), date(2024, 6, 1))
            .unwrap();

        store.mark_complete(2).unwrap();
        store.sort_by_completion().unwrap();
        assert_eq!(names(store), vec!["A", "B"]);

        store.sort_by_due_date().unwrap();
        assert_eq!(names(store), vec!["B", "A"]);
    });
}
