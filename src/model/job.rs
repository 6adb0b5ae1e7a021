use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::fields::{JobTitle, Location, Skill, Tag};
use super::unique_list::{Unique, UniqueTagList};

/// An open job listing. Identity is (title, location, skill).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    title: JobTitle,
    location: Location,
    skill: Skill,
    #[serde(default)]
    tags: UniqueTagList,
}

impl Job {
    pub fn new(title: JobTitle, location: Location, skill: Skill, tags: BTreeSet<Tag>) -> Self {
        Self {
            title,
            location,
            skill,
            tags: UniqueTagList::from(tags),
        }
    }

    pub fn title(&self) -> &JobTitle {
        &self.title
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn skill(&self) -> &Skill {
        &self.skill
    }

    pub fn tags(&self) -> &UniqueTagList {
        &self.tags
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.location == other.location && self.skill == other.skill
    }
}

impl Eq for Job {}

impl Unique for Job {
    const ENTITY: &'static str = "Job";

    fn key(&self) -> String {
        format!("{} ({})", self.title, self.location)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Location: {} Skill: {} Tags: ", self.title, self.location, self.skill)?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, tags: &[&str]) -> Job {
        Job::new(
            JobTitle::new(title).unwrap(),
            Location::new("Singapore").unwrap(),
            Skill::new("Rust").unwrap(),
            tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
        )
    }

    #[test]
    fn equality_ignores_tags() {
        assert_eq!(job("Backend Engineer", &["urgent"]), job("Backend Engineer", &[]));
        assert_ne!(job("Backend Engineer", &[]), job("Frontend Engineer", &[]));
    }

    #[test]
    fn key_names_title_and_location() {
        assert_eq!(job("Backend Engineer", &[]).key(), "Backend Engineer (Singapore)");
    }
}
