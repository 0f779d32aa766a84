use book_buddy::library::{
    BookTable, FormMode, Library, LibraryError, LibraryManager, LibraryObserver, RecordAction,
    RowId,
};
use book_buddy::{BookRecord, ReadingStatus};

fn book(title: &str, author: &str, status: ReadingStatus) -> BookRecord {
    BookRecord::new(title, author, status)
}

fn table_records(table: &BookTable) -> Vec<BookRecord> {
    table.records().cloned().collect()
}

fn fill(manager: &mut LibraryManager, title: &str, author: &str, status: ReadingStatus) {
    let inputs = manager.inputs_mut();
    inputs.title = title.to_string();
    inputs.author = author.to_string();
    inputs.status = status;
}

#[test]
fn add_appends_at_the_end() {
    let mut library = Library::new(());
    library.add("Dune", "Herbert", ReadingStatus::NotStarted).unwrap();
    let before = library.len();

    let index = library.add("Hyperion", "Simmons", ReadingStatus::InProgress).unwrap();

    assert_eq!(library.len(), before + 1);
    assert_eq!(index, before);
    assert_eq!(
        library.list().last(),
        Some(&book("Hyperion", "Simmons", ReadingStatus::InProgress))
    );
}

#[test]
fn add_with_missing_field_never_mutates() {
    let mut library = Library::new(());
    library.add("Dune", "Herbert", ReadingStatus::NotStarted).unwrap();

    for (title, author) in [("", "Simmons"), ("Hyperion", ""), ("", "")] {
        assert_eq!(
            library.add(title, author, ReadingStatus::Completed),
            Err(LibraryError::Validation)
        );
    }
    assert_eq!(library.list(), &[book("Dune", "Herbert", ReadingStatus::NotStarted)]);
}

#[test]
fn edit_replaces_only_the_target() {
    let mut library = Library::new(());
    for title in ["A", "B", "C"] {
        library.add(title, "Author", ReadingStatus::NotStarted).unwrap();
    }

    library.edit(Some(1), "B2", "Other", ReadingStatus::Completed).unwrap();

    assert_eq!(
        library.list(),
        &[
            book("A", "Author", ReadingStatus::NotStarted),
            book("B2", "Other", ReadingStatus::Completed),
            book("C", "Author", ReadingStatus::NotStarted),
        ]
    );
}

#[test]
fn edit_without_selection_reports_selection_first() {
    let mut library = Library::new(());
    library.add("Dune", "Herbert", ReadingStatus::NotStarted).unwrap();

    let err = library.edit(None, "", "", ReadingStatus::NotStarted).unwrap_err();
    assert_eq!(
        err,
        LibraryError::Selection {
            action: RecordAction::Edit
        }
    );
    assert_eq!(err.heading(), "Selection Error");
    assert_eq!(err.to_string(), "Please select a book to edit.");
}

#[test]
fn delete_shifts_later_records_up() {
    let mut library = Library::new(());
    for title in ["A", "B", "C", "D"] {
        library.add(title, "Author", ReadingStatus::InProgress).unwrap();
    }

    let removed = library.delete(Some(1)).unwrap();

    assert_eq!(removed.title, "B");
    assert_eq!(library.len(), 3);
    let titles: Vec<&str> = library.list().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C", "D"]);
    assert_eq!(library.get(1), Some(&book("C", "Author", ReadingStatus::InProgress)));
}

#[test]
fn delete_without_selection_leaves_store_unchanged() {
    let mut library = Library::new(());
    library.add("Dune", "Herbert", ReadingStatus::NotStarted).unwrap();

    assert_eq!(
        library.delete(None),
        Err(LibraryError::Selection {
            action: RecordAction::Delete
        })
    );
    assert_eq!(library.len(), 1);
}

#[test]
fn table_never_drifts_from_the_store() {
    let mut library = Library::new(BookTable::new());
    let statuses = ReadingStatus::ALL;
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

    for step in 0..200usize {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let pick = (seed >> 33) as usize;
        let status = statuses[pick % statuses.len()];
        let selection = if library.is_empty() || pick % 7 == 0 {
            None
        } else {
            Some(pick % (library.len() + 1))
        };
        let title = if pick % 11 == 0 { String::new() } else { format!("Book {step}") };

        let _ = match pick % 3 {
            0 => library.add(&title, "Author", status).map(|_| ()),
            1 => library.edit(selection, &title, "Editor", status).map(|_| ()),
            _ => library.delete(selection).map(|_| ()),
        };

        let table = library.observer();
        assert_eq!(table_records(table), library.list());
        for row in table.rows() {
            assert_eq!(row.id, RowId::from_index(row.index));
            assert_eq!(table.index_of(row.id), Some(row.index));
        }
    }
}

#[test]
fn custom_observer_sees_every_successful_change() {
    struct Counter(usize, usize);

    impl LibraryObserver for Counter {
        fn refresh(&mut self, records: &[BookRecord]) {
            self.0 += 1;
            self.1 = records.len();
        }
    }

    let mut library = Library::new(Counter(0, 0));
    library.add("Dune", "Herbert", ReadingStatus::NotStarted).unwrap();
    let _ = library.add("", "", ReadingStatus::NotStarted);
    library.add("Hyperion", "Simmons", ReadingStatus::NotStarted).unwrap();

    assert_eq!(library.observer().0, 3);
    assert_eq!(library.observer().1, 2);
}

#[test]
fn dune_and_hyperion_walkthrough() {
    let mut manager = LibraryManager::new();
    fill(&mut manager, "Dune", "Herbert", ReadingStatus::NotStarted);
    manager.add_book().unwrap();
    fill(&mut manager, "Hyperion", "Simmons", ReadingStatus::InProgress);
    manager.add_book().unwrap();

    assert_eq!(
        manager.records(),
        &[
            book("Dune", "Herbert", ReadingStatus::NotStarted),
            book("Hyperion", "Simmons", ReadingStatus::InProgress),
        ]
    );

    let row_one = RowId::new(1).unwrap();
    assert!(manager.select_row(row_one));
    assert_eq!(manager.mode(), FormMode::Editing(row_one));
    manager.inputs_mut().title = "Dune Messiah".to_string();
    manager.edit_book().unwrap();
    assert_eq!(manager.records()[0].title, "Dune Messiah");
    assert_eq!(
        manager.records()[1],
        book("Hyperion", "Simmons", ReadingStatus::InProgress)
    );

    assert!(manager.select_row(row_one));
    manager.delete_book().unwrap();
    assert_eq!(
        manager.records(),
        &[book("Hyperion", "Simmons", ReadingStatus::InProgress)]
    );
    assert_eq!(table_records(manager.table()), manager.records());
    assert_eq!(manager.mode(), FormMode::Create);
    assert_eq!(manager.inputs().status, ReadingStatus::NotStarted);
}

#[test]
fn new_manager_starts_empty() {
    let mut manager = LibraryManager::new();
    fill(&mut manager, "Dune", "Herbert", ReadingStatus::NotStarted);
    manager.add_book().unwrap();
    drop(manager);

    let manager = LibraryManager::new();
    assert!(manager.records().is_empty());
    assert!(manager.table().is_empty());
}
