use roster_core::{
    ChangeOutcome, DbError, RepoError, SqliteStudentRepository, Store, StudentRecord,
    StudentRepository, StudentService,
};
use tempfile::TempDir;

fn ready_repo() -> (TempDir, SqliteStudentRepository) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("students.db"));
    store.ensure_schema().unwrap();
    (dir, SqliteStudentRepository::new(store))
}

fn ana() -> StudentRecord {
    StudentRecord::new(1, "Ana", "Doe", 20, "F", "PCM")
}

#[test]
fn insert_and_get_roundtrip() {
    let (_dir, repo) = ready_repo();

    repo.insert(&ana()).unwrap();

    let loaded = repo.get_by_id(1).unwrap().unwrap();
    assert_eq!(loaded, ana());
}

#[test]
fn get_missing_id_returns_none() {
    let (_dir, repo) = ready_repo();
    assert!(repo.get_by_id(404).unwrap().is_none());
}

#[test]
fn duplicate_insert_fails_and_keeps_original_row() {
    let (_dir, repo) = ready_repo();
    repo.insert(&ana()).unwrap();

    let impostor = StudentRecord::new(1, "Ben", "Smith", 30, "M", "HEG");
    let err = repo.insert(&impostor).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey(1)), "unexpected: {err}");

    assert_eq!(repo.get_by_id(1).unwrap().unwrap(), ana());
    assert_eq!(repo.get_all().unwrap().len(), 1);
}

#[test]
fn get_all_tracks_inserts_and_deletes() {
    let (_dir, repo) = ready_repo();
    assert!(repo.get_all().unwrap().is_empty());

    for id in [3, 1, 2] {
        let record = StudentRecord::new(id, format!("First{id}"), "Last", 18, "X", "MCB");
        repo.insert(&record).unwrap();
    }

    let ids: Vec<_> = repo.get_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 2, 3]);

    assert_eq!(repo.delete(2).unwrap(), 1);
    let ids: Vec<_> = repo.get_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn update_missing_id_reports_zero_and_leaves_storage_unchanged() {
    let (_dir, repo) = ready_repo();
    repo.insert(&ana()).unwrap();

    let ghost = StudentRecord::new(9, "Ghost", "Row", 50, "?", "?");
    assert_eq!(repo.update(&ghost).unwrap(), 0);

    assert!(repo.get_by_id(9).unwrap().is_none());
    assert_eq!(repo.get_all().unwrap(), vec![ana()]);
}

#[test]
fn delete_missing_id_reports_zero() {
    let (_dir, repo) = ready_repo();
    assert_eq!(repo.delete(77).unwrap(), 0);
}

#[test]
fn validation_failure_blocks_insert_and_update() {
    let (_dir, repo) = ready_repo();

    let blank = StudentRecord::new(2, " ", "Doe", 20, "F", "PCM");
    assert!(matches!(
        repo.insert(&blank).unwrap_err(),
        RepoError::Validation(_)
    ));
    assert!(repo.get_by_id(2).unwrap().is_none());

    repo.insert(&ana()).unwrap();
    let mut edited = ana();
    edited.last_name = String::new();
    assert!(matches!(
        repo.update(&edited).unwrap_err(),
        RepoError::Validation(_)
    ));
    assert_eq!(repo.get_by_id(1).unwrap().unwrap(), ana());
}

#[test]
fn negative_age_is_stored_as_is() {
    let (_dir, repo) = ready_repo();
    let record = StudentRecord::new(4, "Tiny", "Tim", -3, "M", "PCB");

    repo.insert(&record).unwrap();
    assert_eq!(repo.get_by_id(4).unwrap().unwrap().age, -3);
}

#[test]
fn operations_without_schema_report_errors() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteStudentRepository::new(Store::new(dir.path().join("bare.db")));

    assert!(matches!(repo.insert(&ana()), Err(RepoError::Db(DbError::Sqlite(_)))));
    assert!(repo.get_all().is_err());
    assert!(repo.delete(1).is_err());
}

#[test]
fn unreachable_store_reports_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("no-such-dir").join("students.db"));
    let repo = SqliteStudentRepository::new(store);

    let err = repo.get_by_id(1).unwrap_err();
    assert!(
        matches!(err, RepoError::Db(DbError::Connection { .. })),
        "unexpected: {err}"
    );
}

#[test]
fn full_lifecycle_scenario() {
    let (_dir, repo) = ready_repo();
    let service = StudentService::new(repo);

    service.register(&ana()).unwrap();
    assert_eq!(service.find(1).unwrap().unwrap(), ana());

    let mut older = ana();
    older.age = 21;
    assert_eq!(service.update(&older).unwrap(), ChangeOutcome::Applied);

    let loaded = service.find(1).unwrap().unwrap();
    assert_eq!(loaded.age, 21);
    assert_eq!(loaded.first_name, "Ana");
    assert_eq!(loaded.last_name, "Doe");
    assert_eq!(loaded.gender, "F");
    assert_eq!(loaded.combination, "PCM");

    assert_eq!(service.remove(1).unwrap(), ChangeOutcome::Applied);
    assert!(service.find(1).unwrap().is_none());
    assert_eq!(service.remove(1).unwrap(), ChangeOutcome::NotFound(1));
    assert_eq!(service.update(&older).unwrap(), ChangeOutcome::NotFound(1));
}

#[test]
fn data_persists_across_repository_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");
    let store = Store::new(&path);
    store.ensure_schema().unwrap();

    SqliteStudentRepository::new(store).insert(&ana()).unwrap();

    let reopened = SqliteStudentRepository::new(Store::new(&path));
    assert_eq!(reopened.get_all().unwrap(), vec![ana()]);
}

#[test]
fn legacy_rows_with_empty_names_still_list_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE students (
            id integer PRIMARY KEY,
            firstName text NOT NULL,
            lastName text NOT NULL,
            age integer,
            gender text,
            combination text
        );
        INSERT INTO students VALUES (1, 'Ana', 'Doe', 20, 'F', 'PCM');
        INSERT INTO students VALUES (2, '', 'Blank', NULL, NULL, NULL);",
    )
    .unwrap();
    drop(conn);

    let store = Store::new(&path);
    store.ensure_schema().unwrap();
    let repo = SqliteStudentRepository::new(store);

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], ana());
    assert_eq!(all[1], StudentRecord::new(2, "", "Blank", 0, "", ""));

    let legacy = repo.get_by_id(2).unwrap().unwrap();
    assert_eq!(legacy.first_name, "");

    let repaired = StudentRecord::new(2, "Bea", "Blank", 19, "F", "HEG");
    assert_eq!(repo.update(&repaired).unwrap(), 1);
    assert_eq!(repo.get_by_id(2).unwrap().unwrap(), repaired);
}
