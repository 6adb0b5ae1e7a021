use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use rusqlite::Connection;

use crate::db::{schema, storage};
use crate::error::{HeroError, HeroResult};
use crate::model::{AddressBook, ReadOnlyAddressBook};

#[derive(Debug, PartialEq, Eq)]
pub struct TransferStats {
    pub persons: usize,
    pub jobs: usize,
    pub tags: usize,
}

impl TransferStats {
    fn of(book: &dyn ReadOnlyAddressBook) -> Self {
        Self {
            persons: book.person_list().len(),
            jobs: book.job_list().len(),
            tags: book.tag_list().len(),
        }
    }
}

/// Writes `book` as pretty-printed JSON.
pub fn write_json(path: &Path, book: &dyn ReadOnlyAddressBook) -> HeroResult<()> {
    let book = AddressBook::from_read_only(book)?;
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &book)?;
    writer.flush()?;
    Ok(())
}

/// Reads an address book from JSON. Field values and uniqueness are checked
/// while deserializing.
pub fn read_json(path: &Path) -> HeroResult<AddressBook> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Imports a JSON address book into a fresh SQLite database.
pub fn import_json(json_path: &Path, db_path: &Path) -> HeroResult<TransferStats> {
    if db_path.exists() {
        return Err(HeroError::Other(format!(
            "Database file {} already exists",
            db_path.display()
        )));
    }
    let book = read_json(json_path)?;
    create_database(db_path, |conn| storage::save_address_book(conn, &book))?;

    let stats = TransferStats::of(&book);
    info!(
        "event=import_json persons={} jobs={}",
        stats.persons, stats.jobs
    );
    Ok(stats)
}

/// Exports the address book stored in `db_path` to JSON.
pub fn export_json(db_path: &Path, json_path: &Path) -> HeroResult<TransferStats> {
    if !db_path.exists() {
        return Err(HeroError::not_found("Database file", db_path.display()));
    }
    let conn = Connection::open(db_path)?;
    schema::initialize(&conn)?;
    let book = storage::load_address_book(&conn)?;
    write_json(json_path, &book)?;

    let stats = TransferStats::of(&book);
    info!(
        "event=export_json persons={} jobs={}",
        stats.persons, stats.jobs
    );
    Ok(stats)
}

/// Creates and fills a new database file. The file is removed again if
/// `fill` fails so a retry does not hit an empty leftover.
fn create_database<F>(db_path: &Path, fill: F) -> HeroResult<()>
where
    F: FnOnce(&Connection) -> HeroResult<()>,
{
    let result = Connection::open(db_path)
        .map_err(HeroError::from)
        .and_then(|conn| {
            schema::initialize(&conn)?;
            fill(&conn)?;
            conn.close().map_err(|(_, e)| HeroError::from(e))
        });
    if let Err(e) = result {
        if db_path.exists() {
            if let Err(remove_err) = fs::remove_file(db_path) {
                warn!(
                    "event=import_cleanup status=error reason=\"{}\"",
                    remove_err
                );
            }
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fill_removes_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("hero.db");

        let result = create_database(&db_path, |conn| {
            conn.execute("INSERT INTO jobs (position, title, location, skill) VALUES (0, 'a', 'b', 'c')", [])?;
            Err(HeroError::Other("disk full".into()))
        });
        assert!(result.is_err());
        assert!(!db_path.exists());

        create_database(&db_path, |_| Ok(())).unwrap();
        assert!(db_path.exists());
    }
}
