use rusqlite::{params, Connection};

use crate::error::HeroResult;
use crate::model::{
    Address, Company, CurrentPosition, Email, Name, Person, Phone, ProfilePicture, Tag,
};

struct PersonRow {
    position: i64,
    name: String,
    phone: String,
    email: String,
    address: String,
    current_position: String,
    company: String,
    profile_picture: String,
}

pub fn insert(conn: &Connection, position: usize, person: &Person) -> HeroResult<()> {
    conn.execute(
        "INSERT INTO persons (position, name, phone, email, address, current_position, company, profile_picture)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            position as i64,
            person.name().as_str(),
            person.phone().as_str(),
            person.email().as_str(),
            person.address().as_str(),
            person.current_position().as_str(),
            person.company().as_str(),
            person.profile_picture().as_str(),
        ],
    )?;

    for (order, tag) in person.tags().iter().enumerate() {
        conn.execute(
            "INSERT INTO person_tags (person_position, tag_order, tag) VALUES (?1, ?2, ?3)",
            params![position as i64, order as i64, tag.as_str()],
        )?;
    }
    Ok(())
}

/// All persons in stored order. Every field is re-validated.
pub fn find_all(conn: &Connection) -> HeroResult<Vec<Person>> {
    let mut stmt = conn.prepare(
        "SELECT position, name, phone, email, address, current_position, company, profile_picture
         FROM persons ORDER BY position",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(PersonRow {
                position: row.get(0)?,
                name: row.get(1)?,
                phone: row.get(2)?,
                email: row.get(3)?,
                address: row.get(4)?,
                current_position: row.get(5)?,
                company: row.get(6)?,
                profile_picture: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(|row| row_to_person(conn, row)).collect()
}

pub fn count(conn: &Connection) -> HeroResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM persons", [], |row| row.get(0))?;
    Ok(n as usize)
}

pub fn delete_all(conn: &Connection) -> HeroResult<()> {
    conn.execute("DELETE FROM person_tags", [])?;
    conn.execute("DELETE FROM persons", [])?;
    Ok(())
}

fn find_tags(conn: &Connection, position: i64) -> HeroResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag FROM person_tags WHERE person_position = ?1 ORDER BY tag_order",
    )?;
    let tags = stmt
        .query_map(params![position], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(tags)
}

fn row_to_person(conn: &Connection, row: PersonRow) -> HeroResult<Person> {
    let tags = find_tags(conn, row.position)?
        .iter()
        .map(|t| Tag::new(t))
        .collect::<HeroResult<_>>()?;

    Ok(Person::new(
        Name::new(&row.name)?,
        Phone::new(&row.phone)?,
        Email::new(&row.email)?,
        Address::new(&row.address)?,
        CurrentPosition::new(&row.current_position)?,
        Company::new(&row.company)?,
        Some(ProfilePicture::new(&row.profile_picture)?),
        tags,
    ))
}
