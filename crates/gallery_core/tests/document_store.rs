use gallery_core::{
    CancellationToken, DocumentStore, Gallery, Mutation, StoreError, Work,
};
use std::fs;
use std::sync::Arc;
use std::thread;

fn seeded() -> Vec<Gallery> {
    let mut one = Gallery::new("Gallery One", "Beja", "Baltazar Braz");
    one.works.push(Work::new("obra 1", "artista 1", 1900, 1000.0));
    one.works.push(Work::new("obra 2", "artista 2", 1910, 2000.0));
    let two = Gallery::new("Gallery Two", "Bragança", "Bernardo Beltrão");
    vec![one, two]
}

#[test]
fn missing_file_loads_as_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::open(dir.path().join("absent.json"));

    let galleries = store.load(&CancellationToken::new()).unwrap();
    assert!(galleries.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn blank_and_null_files_load_as_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let cancel = CancellationToken::new();

    for (name, content) in [("blank.json", "  \n"), ("null.json", "null")] {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        let store = DocumentStore::open(&path);
        assert!(store.load(&cancel).unwrap().is_empty(), "{name}");
    }
}

#[test]
fn corrupt_file_is_reported_not_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    fs::write(&path, "{ not json").unwrap();
    let store = DocumentStore::open(&path);
    let cancel = CancellationToken::new();

    let err = store.load(&cancel).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));

    let err = store
        .mutate(&cancel, |galleries| {
            galleries.push(Gallery::new("A", "B", "C"));
            Ok::<_, StoreError>(Mutation::Changed(()))
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn save_then_load_returns_equal_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::open(dir.path().join("nested").join("galleries.json"));
    let cancel = CancellationToken::new();
    let galleries = seeded();

    store.save(&galleries, &cancel).unwrap();
    let loaded = store.load(&cancel).unwrap();

    assert_eq!(loaded, galleries);
}

#[test]
fn saving_a_loaded_document_is_byte_stable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stable.json");
    let store = DocumentStore::open(&path);
    let cancel = CancellationToken::new();

    store.save(&seeded(), &cancel).unwrap();
    let first = fs::read(&path).unwrap();

    let loaded = store.load(&cancel).unwrap();
    store.save(&loaded, &cancel).unwrap();

    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn legacy_pascal_case_document_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"[
  {
    "Id": "6f1c1f8e-4c3e-4d0a-9c55-2b7a0f4f2a11",
    "Name": "Gallery One",
    "City": "Beja",
    "Manager": "Baltazar Braz",
    "ArtWorksOnDisplay": [
      {
        "Id": "0b9f5a52-8d0e-4c8e-9f0e-3f7d2b8c1a22",
        "Name": "obra 1",
        "Author": "artista 1",
        "CreationYear": 1900,
        "AskPrice": 1000.0
      }
    ]
  },
  {
    "Id": "1d2e3f40-5a6b-4c7d-8e9f-a0b1c2d3e4f5",
    "Name": "Gallery Two",
    "City": "Bragança",
    "Manager": "Bernardo Beltrão",
    "ArtWorksOnDisplay": null
  }
]"#,
    )
    .unwrap();

    let galleries = DocumentStore::open(&path)
        .load(&CancellationToken::new())
        .unwrap();

    assert_eq!(galleries.len(), 2);
    assert_eq!(galleries[0].name, "Gallery One");
    assert_eq!(galleries[0].works.len(), 1);
    assert_eq!(galleries[0].works[0].creation_year, 1900);
    assert_eq!(galleries[0].works[0].ask_price, 1000.0);
    assert_eq!(galleries[1].city, "Bragança");
    assert!(galleries[1].works.is_empty());
}

#[test]
fn cancelled_token_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cancelled.json");
    let store = DocumentStore::open(&path);
    store.save(&seeded(), &CancellationToken::new()).unwrap();
    let before = fs::read(&path).unwrap();

    let cancel = CancellationToken::new();
    cancel.cancel();

    assert!(matches!(store.load(&cancel), Err(StoreError::Cancelled)));
    assert!(matches!(
        store.save(&[], &cancel),
        Err(StoreError::Cancelled)
    ));
    let mutated = store.mutate(&cancel, |galleries| {
        galleries.clear();
        Ok::<_, StoreError>(Mutation::Changed(()))
    });
    assert!(matches!(mutated, Err(StoreError::Cancelled)));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn cancellation_inside_mutate_skips_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("late_cancel.json");
    let store = DocumentStore::open(&path);
    let cancel = CancellationToken::new();

    let result = store.mutate(&cancel, |galleries| {
        galleries.push(Gallery::new("A", "B", "C"));
        cancel.cancel();
        Ok::<_, StoreError>(Mutation::Changed(()))
    });

    assert!(matches!(result, Err(StoreError::Cancelled)));
    assert!(!path.exists());
}

#[test]
fn concurrent_mutations_do_not_lose_updates() {
    const WRITERS: usize = 8;

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(DocumentStore::open(dir.path().join("shared.json")));

    let handles: Vec<_> = (0..WRITERS)
        .map(|n| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .mutate(&CancellationToken::new(), |galleries| {
                        galleries.push(Gallery::new(format!("Gallery {n}"), "Beja", "Manager"));
                        Ok::<_, StoreError>(Mutation::Changed(()))
                    })
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let galleries = store.load(&CancellationToken::new()).unwrap();
    assert_eq!(galleries.len(), WRITERS);
}

#[test]
fn failed_save_reports_write_error_and_keeps_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocked.json");
    let store = DocumentStore::open(&path);
    let cancel = CancellationToken::new();
    store.save(&seeded(), &cancel).unwrap();
    let before = fs::read(&path).unwrap();

    // A directory squatting on the temp name makes the write fail.
    fs::create_dir(dir.path().join("blocked.json.tmp")).unwrap();

    let err = store.save(&[], &cancel).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));

    let err = store
        .mutate(&cancel, |galleries| {
            galleries.clear();
            Ok::<_, StoreError>(Mutation::Changed(()))
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));

    assert_eq!(fs::read(&path).unwrap(), before);
    let names: Vec<_> = store
        .load(&cancel)
        .unwrap()
        .into_iter()
        .map(|gallery| gallery.name)
        .collect();
    assert_eq!(names, vec!["Gallery One", "Gallery Two"]);
}

#[test]
fn unreadable_document_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folder.json");
    fs::create_dir(&path).unwrap();
    let store = DocumentStore::open(&path);

    let err = store.load(&CancellationToken::new()).unwrap_err();

    match err {
        StoreError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
