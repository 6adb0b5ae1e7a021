use crate::error::{HeroError, HeroResult};
use crate::model::filter::{self, show_all};
use crate::model::{AddressBook, Model, Person, Tag};
use crate::parser::{Index, PersonEdits};

pub fn add_person(model: &mut dyn Model, person: Person) -> HeroResult<Person> {
    model.add_person(person.clone())?;
    Ok(person)
}

/// Resolves `index` against the currently displayed persons.
pub fn person_at(model: &dyn Model, index: Index) -> HeroResult<Person> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or_else(|| HeroError::not_found("Person", format!("index {}", index)))
}

pub fn edit_person(model: &mut dyn Model, index: Index, edits: &PersonEdits) -> HeroResult<Person> {
    let target = person_at(model, index)?;
    let edited = edits.apply(&target);
    model.update_person(&target, edited.clone())?;
    model.update_filtered_person_list(show_all());
    Ok(edited)
}

pub fn delete_person(model: &mut dyn Model, index: Index) -> HeroResult<Person> {
    let target = person_at(model, index)?;
    model.delete_person(&target)?;
    Ok(target)
}

/// Shows only persons whose name contains one of `keywords`. Returns the
/// number of matches.
pub fn find_persons(model: &mut dyn Model, keywords: Vec<String>) -> usize {
    model.update_filtered_person_list(filter::name_contains_keywords(keywords));
    model.filtered_person_list().len()
}

pub fn find_by_tag(model: &mut dyn Model, tag: Tag) -> usize {
    model.update_filtered_person_list(filter::tag_matches(tag));
    model.filtered_person_list().len()
}

pub fn list_persons(model: &mut dyn Model) -> usize {
    model.update_filtered_person_list(show_all());
    model.filtered_person_list().len()
}

pub fn delete_tag(model: &mut dyn Model, tag: &Tag) -> HeroResult<()> {
    model.delete_tag(tag)
}

/// Empties the address book. Accounts are kept.
pub fn clear(model: &mut dyn Model) -> HeroResult<()> {
    model.reset_data(&AddressBook::new())
}
