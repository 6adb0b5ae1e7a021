use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::fields::{Address, Company, CurrentPosition, Email, Name, Phone, ProfilePicture, Tag};
use super::unique_list::{Unique, UniqueTagList};

/// A contact in the address book.
///
/// Identity is the tuple (name, phone, email, address, current position,
/// company). The profile picture and tags do not take part in equality, so
/// two entries differing only by tags are duplicates of each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    current_position: CurrentPosition,
    company: Company,
    #[serde(default)]
    profile_picture: ProfilePicture,
    #[serde(default)]
    tags: UniqueTagList,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        current_position: CurrentPosition,
        company: Company,
        profile_picture: Option<ProfilePicture>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            current_position,
            company,
            profile_picture: profile_picture.unwrap_or_default(),
            tags: UniqueTagList::from(tags),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn current_position(&self) -> &CurrentPosition {
        &self.current_position
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn profile_picture(&self) -> &ProfilePicture {
        &self.profile_picture
    }

    pub fn tags(&self) -> &UniqueTagList {
        &self.tags
    }

    pub fn tag_set(&self) -> BTreeSet<Tag> {
        self.tags.to_set()
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Copy of this person without `tag`. Returns an identical copy when the
    /// tag is absent.
    pub fn without_tag(&self, tag: &Tag) -> Person {
        let mut copy = self.clone();
        let _ = copy.tags.remove(tag);
        copy
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Person {
        let mut copy = self.clone();
        copy.tags = UniqueTagList::from(tags);
        copy
    }

    pub fn with_profile_picture(&self, picture: ProfilePicture) -> Person {
        let mut copy = self.clone();
        copy.profile_picture = picture;
        copy
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.current_position == other.current_position
            && self.company == other.company
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.email.hash(state);
        self.address.hash(state);
        self.current_position.hash(state);
        self.company.hash(state);
    }
}

impl Unique for Person {
    const ENTITY: &'static str = "Person";

    fn key(&self) -> String {
        self.name.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Current Position: {} Company: {} Tags: ",
            self.name, self.phone, self.email, self.address, self.current_position, self.company
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amy() -> Person {
        Person::new(
            Name::new("Amy Bee").unwrap(),
            Phone::new("11111111").unwrap(),
            Email::new("amy@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6").unwrap(),
            CurrentPosition::new("Engineer").unwrap(),
            Company::new("Acme").unwrap(),
            None,
            [Tag::new("friend").unwrap()].into_iter().collect(),
        )
    }

    #[test]
    fn missing_picture_defaults_to_empty() {
        assert!(amy().profile_picture().is_empty());
    }

    #[test]
    fn equality_ignores_tags_and_picture() {
        let plain = amy().with_tags(BTreeSet::new());
        let pictured = amy().with_profile_picture(ProfilePicture::new("amy.png").unwrap());
        assert_eq!(amy(), plain);
        assert_eq!(amy(), pictured);
    }

    #[test]
    fn without_tag_removes_only_that_tag() {
        let friend = Tag::new("friend").unwrap();
        let person = amy();
        let stripped = person.without_tag(&friend);
        assert!(person.has_tag(&friend));
        assert!(!stripped.has_tag(&friend));
        assert!(stripped.tags().is_empty());
    }

    #[test]
    fn display_lists_fields_and_tags() {
        let text = amy().to_string();
        assert!(text.starts_with("Amy Bee Phone: 11111111"));
        assert!(text.ends_with("Tags: [friend]"));
    }
}
