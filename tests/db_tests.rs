use std::collections::BTreeSet;

use contact_hero::db::*;
use contact_hero::migrate;
use contact_hero::model::*;

fn person(name: &str, phone: &str, tag_names: &[&str], picture: Option<&str>) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new("someone@example.com").unwrap(),
        Address::new("4th street").unwrap(),
        CurrentPosition::new("Director").unwrap(),
        Company::new("Umbrella").unwrap(),
        picture.map(|p| ProfilePicture::new(p).unwrap()),
        tag_names.iter().map(|t| Tag::new(t).unwrap()).collect(),
    )
}

/// `AddressBook` equality ignores tags and pictures, so compare them directly.
fn assert_same_details(actual: &AddressBook, expected: &AddressBook) {
    assert_eq!(actual, expected);
    for (a, e) in actual.person_list().iter().zip(expected.person_list()) {
        assert_eq!(a.tag_set(), e.tag_set());
        assert_eq!(a.profile_picture(), e.profile_picture());
    }
    for (a, e) in actual.job_list().iter().zip(expected.job_list()) {
        assert_eq!(a.tags(), e.tags());
    }
}

fn sample_book() -> AddressBook {
    let jobs = vec![Job::new(
        JobTitle::new("Site Reliability Engineer").unwrap(),
        Location::new("Remote").unwrap(),
        Skill::new("Linux").unwrap(),
        [Tag::new("urgent").unwrap()].into_iter().collect(),
    )];
    AddressBook::from_parts(
        vec![
            person("Elle Meyer", "9482224", &["colleague", "friend"], Some("pics/elle.png")),
            person("Fiona Kunz", "9482427", &[], None),
        ],
        jobs,
    )
    .unwrap()
}

// ==========================================================================
// STORAGE TESTS
// ==========================================================================

#[test]
fn empty_database_loads_empty_book() {
    let conn = schema::test_connection();
    let book = storage::load_address_book(&conn).unwrap();
    assert_eq!(book, AddressBook::new());
}

#[test]
fn save_then_load_address_book() {
    let conn = schema::test_connection();
    let book = sample_book();
    storage::save_address_book(&conn, &book).unwrap();

    let loaded = storage::load_address_book(&conn).unwrap();
    assert_eq!(loaded, book);

    let elle = &loaded.person_list()[0];
    assert_eq!(elle.profile_picture().as_str(), "pics/elle.png");
    let expected: BTreeSet<Tag> = ["colleague", "friend"].iter().map(|t| Tag::new(t).unwrap()).collect();
    assert_eq!(elle.tag_set(), expected);
    assert!(loaded.person_list()[1].profile_picture().is_empty());
    assert_eq!(loaded.job_list()[0].tags().len(), 1);
}

#[test]
fn save_replaces_previous_contents() {
    let conn = schema::test_connection();
    storage::save_address_book(&conn, &sample_book()).unwrap();

    let smaller = AddressBook::from_parts(vec![person("George Best", "9482442", &[], None)], vec![]).unwrap();
    storage::save_address_book(&conn, &smaller).unwrap();

    assert_eq!(person_repo::count(&conn).unwrap(), 1);
    assert_eq!(storage::load_address_book(&conn).unwrap(), smaller);
}

#[test]
fn corrupt_row_fails_validation_on_load() {
    let conn = schema::test_connection();
    conn.execute(
        "INSERT INTO persons (position, name, phone, email, address, current_position, company)
         VALUES (0, 'R@chel', '123', 'a@b.c', 'x', 'y', 'z')",
        [],
    )
    .unwrap();
    let err = storage::load_address_book(&conn).unwrap_err();
    assert_eq!(err.kind(), contact_hero::error::ErrorKind::Validation);
}

#[test]
fn accounts_round_trip_without_session() {
    let conn = schema::test_connection();
    let mut accounts = AccountsManager::new();
    accounts.register("jason", "secret123").unwrap();
    accounts.register("mary_lee", "hunter22").unwrap();
    accounts.login("jason", "secret123").unwrap();
    storage::save_accounts(&conn, &accounts).unwrap();

    let mut loaded = storage::load_accounts(&conn).unwrap();
    assert!(!loaded.is_logged_in());
    assert!(loaded.has_username("mary_lee"));
    loaded.login("jason", "secret123").unwrap();
    assert_eq!(loaded.current_user(), Some("jason"));
}

// ==========================================================================
// JSON IMPORT / EXPORT TESTS
// ==========================================================================

#[test]
fn write_then_read_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let book = sample_book();

    migrate::write_json(&path, &book).unwrap();
    assert_same_details(&migrate::read_json(&path).unwrap(), &book);
}

#[test]
fn read_json_rejects_invalid_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"persons":[{"name":"Amy","phone":"+65","email":"amy@example.com","address":"x","current_position":"y","company":"z"}],"jobs":[]}"#,
    )
    .unwrap();
    assert!(migrate::read_json(&path).is_err());
}

#[test]
fn import_then_export_through_database() {
    let dir = tempfile::tempdir().unwrap();
    let json_in = dir.path().join("in.json");
    let json_out = dir.path().join("out.json");
    let db_path = dir.path().join("hero.db");

    migrate::write_json(&json_in, &sample_book()).unwrap();
    let stats = migrate::import_json(&json_in, &db_path).unwrap();
    assert_eq!(
        stats,
        migrate::TransferStats {
            persons: 2,
            jobs: 1,
            tags: 2
        }
    );

    // A second import into the same file is refused
    assert!(migrate::import_json(&json_in, &db_path).is_err());

    migrate::export_json(&db_path, &json_out).unwrap();
    assert_same_details(&migrate::read_json(&json_out).unwrap(), &sample_book());
}

#[test]
fn export_from_missing_database_fails_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("typo.db");
    let json_out = dir.path().join("out.json");

    let err = migrate::export_json(&db_path, &json_out).unwrap_err();
    assert_eq!(err.kind(), contact_hero::error::ErrorKind::NotFound);
    assert!(!db_path.exists());
    assert!(!json_out.exists());
}
