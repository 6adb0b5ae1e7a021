use rusqlite::{params, Connection};

use crate::error::HeroResult;
use crate::model::{Job, JobTitle, Location, Skill, Tag};

pub fn insert(conn: &Connection, position: usize, job: &Job) -> HeroResult<()> {
    conn.execute(
        "INSERT INTO jobs (position, title, location, skill) VALUES (?1, ?2, ?3, ?4)",
        params![
            position as i64,
            job.title().as_str(),
            job.location().as_str(),
            job.skill().as_str(),
        ],
    )?;

    for (order, tag) in job.tags().iter().enumerate() {
        conn.execute(
            "INSERT INTO job_tags (job_position, tag_order, tag) VALUES (?1, ?2, ?3)",
            params![position as i64, order as i64, tag.as_str()],
        )?;
    }
    Ok(())
}

pub fn find_all(conn: &Connection) -> HeroResult<Vec<Job>> {
    let mut stmt = conn.prepare("SELECT position, title, location, skill FROM jobs ORDER BY position")?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut jobs = Vec::with_capacity(rows.len());
    for (position, title, location, skill) in rows {
        let mut tag_stmt =
            conn.prepare("SELECT tag FROM job_tags WHERE job_position = ?1 ORDER BY tag_order")?;
        let tags = tag_stmt
            .query_map(params![position], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?
            .iter()
            .map(|t| Tag::new(t))
            .collect::<HeroResult<_>>()?;

        jobs.push(Job::new(
            JobTitle::new(&title)?,
            Location::new(&location)?,
            Skill::new(&skill)?,
            tags,
        ));
    }
    Ok(jobs)
}

pub fn delete_all(conn: &Connection) -> HeroResult<()> {
    conn.execute("DELETE FROM job_tags", [])?;
    conn.execute("DELETE FROM jobs", [])?;
    Ok(())
}
