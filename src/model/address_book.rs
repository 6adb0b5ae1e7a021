use serde::{Deserialize, Serialize};

use crate::error::{HeroError, HeroResult};

use super::fields::Tag;
use super::job::Job;
use super::person::Person;
use super::unique_list::{UniqueList, UniqueTagList};

/// Read access to an address book. Persistence and the model facade only
/// ever need this view.
pub trait ReadOnlyAddressBook {
    fn person_list(&self) -> &[Person];

    fn job_list(&self) -> &[Job];

    /// Every tag in use by at least one person, in first-seen order.
    fn tag_list(&self) -> &[Tag];
}

/// Owns the person and job collections. Duplicates are rejected at every
/// mutation; the master tag list is rebuilt from the persons afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "AddressBookData", into = "AddressBookData")]
pub struct AddressBook {
    persons: UniqueList<Person>,
    jobs: UniqueList<Job>,
    tags: UniqueTagList,
}

/// Serialized form of an [`AddressBook`]; the tag list is derived on load.
#[derive(Serialize, Deserialize)]
pub struct AddressBookData {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    jobs: Vec<Job>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `data`, validating the uniqueness of both collections.
    pub fn from_read_only(data: &dyn ReadOnlyAddressBook) -> HeroResult<Self> {
        Self::from_parts(data.person_list().to_vec(), data.job_list().to_vec())
    }

    pub fn from_parts(persons: Vec<Person>, jobs: Vec<Job>) -> HeroResult<Self> {
        let mut book = Self {
            persons: UniqueList::from_vec(persons)?,
            jobs: UniqueList::from_vec(jobs)?,
            tags: UniqueTagList::new(),
        };
        book.sync_master_tags();
        Ok(book)
    }

    /// Replaces all contents with a copy of `data`. Leaves `self` untouched on
    /// error.
    pub fn reset_data(&mut self, data: &dyn ReadOnlyAddressBook) -> HeroResult<()> {
        *self = Self::from_read_only(data)?;
        Ok(())
    }

    pub fn add_person(&mut self, person: Person) -> HeroResult<()> {
        self.persons.add(person)?;
        self.sync_master_tags();
        Ok(())
    }

    pub fn update_person(&mut self, target: &Person, edited: Person) -> HeroResult<()> {
        self.persons.set(target, edited)?;
        self.sync_master_tags();
        Ok(())
    }

    pub fn remove_person(&mut self, person: &Person) -> HeroResult<Person> {
        let removed = self.persons.remove(person)?;
        self.sync_master_tags();
        Ok(removed)
    }

    /// Strips `tag` from every person. Either every affected person is
    /// rewritten or nothing changes.
    pub fn remove_tag(&mut self, tag: &Tag) -> HeroResult<usize> {
        if !self.tags.contains(tag) {
            return Err(HeroError::not_found("Tag", tag));
        }

        let mut affected = 0;
        let rewritten: Vec<Person> = self
            .persons
            .iter()
            .map(|p| {
                if p.has_tag(tag) {
                    affected += 1;
                    p.without_tag(tag)
                } else {
                    p.clone()
                }
            })
            .collect();

        let persons = UniqueList::from_vec(rewritten)?;
        self.persons = persons;
        self.sync_master_tags();
        Ok(affected)
    }

    pub fn add_job(&mut self, job: Job) -> HeroResult<()> {
        self.jobs.add(job)
    }

    pub fn remove_job(&mut self, job: &Job) -> HeroResult<Job> {
        self.jobs.remove(job)
    }

    fn sync_master_tags(&mut self) {
        let mut tags = UniqueTagList::new();
        for person in &self.persons {
            tags.merge_from(person.tags());
        }
        self.tags = tags;
    }
}

impl ReadOnlyAddressBook for AddressBook {
    fn person_list(&self) -> &[Person] {
        self.persons.as_slice()
    }

    fn job_list(&self) -> &[Job] {
        self.jobs.as_slice()
    }

    fn tag_list(&self) -> &[Tag] {
        self.tags.as_slice()
    }
}

impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.persons.as_slice() == other.persons.as_slice()
            && self.jobs.as_slice() == other.jobs.as_slice()
    }
}

impl TryFrom<AddressBookData> for AddressBook {
    type Error = HeroError;

    fn try_from(data: AddressBookData) -> HeroResult<Self> {
        Self::from_parts(data.persons, data.jobs)
    }
}

impl From<AddressBook> for AddressBookData {
    fn from(book: AddressBook) -> Self {
        Self {
            persons: book.persons.as_slice().to_vec(),
            jobs: book.jobs.as_slice().to_vec(),
        }
    }
}
