use rusqlite::Connection;

use crate::error::HeroResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> HeroResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS persons (
            position INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            address TEXT NOT NULL,
            current_position TEXT NOT NULL,
            company TEXT NOT NULL,
            profile_picture TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS person_tags (
            person_position INTEGER NOT NULL REFERENCES persons(position) ON DELETE CASCADE,
            tag_order INTEGER NOT NULL,
            tag TEXT NOT NULL,
            PRIMARY KEY (person_position, tag)
        );

        CREATE TABLE IF NOT EXISTS jobs (
            position INTEGER PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            location TEXT NOT NULL,
            skill TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS job_tags (
            job_position INTEGER NOT NULL REFERENCES jobs(position) ON DELETE CASCADE,
            tag_order INTEGER NOT NULL,
            tag TEXT NOT NULL,
            PRIMARY KEY (job_position, tag)
        );

        CREATE TABLE IF NOT EXISTS accounts (
            username TEXT PRIMARY KEY NOT NULL,
            password_hash TEXT NOT NULL,
            registered_at TEXT NOT NULL
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
