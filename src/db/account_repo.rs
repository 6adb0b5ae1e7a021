use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::{HeroError, HeroResult};
use crate::model::Account;

pub fn upsert(conn: &Connection, account: &Account) -> HeroResult<()> {
    conn.execute(
        "INSERT INTO accounts (username, password_hash, registered_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(username) DO UPDATE SET password_hash = excluded.password_hash",
        params![
            account.username,
            account.password_hash,
            account.registered_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn find_all(conn: &Connection) -> HeroResult<Vec<Account>> {
    let mut stmt = conn.prepare(
        "SELECT username, password_hash, registered_at FROM accounts ORDER BY username",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(username, password_hash, registered_at)| {
            let registered_at = DateTime::parse_from_rfc3339(&registered_at)
                .map_err(|e| HeroError::Other(format!("Invalid timestamp: {}", e)))?
                .with_timezone(&Utc);
            Ok(Account {
                username,
                password_hash,
                registered_at,
            })
        })
        .collect()
}

pub fn delete_all(conn: &Connection) -> HeroResult<()> {
    conn.execute("DELETE FROM accounts", [])?;
    Ok(())
}
