use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

use crate::error::{HeroError, HeroResult};

use super::fields::Tag;

/// Element of a [`UniqueList`]. Duplicate detection uses `PartialEq`;
/// `ENTITY` and `key` only feed error messages.
pub trait Unique: PartialEq + Clone {
    const ENTITY: &'static str;

    fn key(&self) -> String;
}

impl Unique for Tag {
    const ENTITY: &'static str = "Tag";

    fn key(&self) -> String {
        self.to_string()
    }
}

/// Insertion-ordered list that never holds two equal elements.
#[derive(Debug, Clone)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

pub type UniqueTagList = UniqueList<Tag>;

impl<T: Unique> UniqueList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a list from `items`, failing on the first duplicate.
    pub fn from_vec(items: Vec<T>) -> HeroResult<Self> {
        let mut list = Self::new();
        for item in items {
            list.add(item)?;
        }
        Ok(list)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing == item)
    }

    pub fn add(&mut self, item: T) -> HeroResult<()> {
        if self.contains(&item) {
            return Err(HeroError::already_exists(T::ENTITY, item.key()));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, item: &T) -> HeroResult<T> {
        let pos = self.position(item)?;
        Ok(self.items.remove(pos))
    }

    /// Replaces `target` with `edited` in place.
    pub fn set(&mut self, target: &T, edited: T) -> HeroResult<()> {
        let pos = self.position(target)?;
        if &edited != target && self.contains(&edited) {
            return Err(HeroError::already_exists(T::ENTITY, edited.key()));
        }
        self.items[pos] = edited;
        Ok(())
    }

    /// Replaces every element. On error the list is left unchanged.
    pub fn set_all(&mut self, items: Vec<T>) -> HeroResult<()> {
        *self = Self::from_vec(items)?;
        Ok(())
    }

    /// Adds every element of `other` not already present.
    pub fn merge_from(&mut self, other: &UniqueList<T>) {
        for item in &other.items {
            if !self.contains(item) {
                self.items.push(item.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn position(&self, item: &T) -> HeroResult<usize> {
        self.items
            .iter()
            .position(|existing| existing == item)
            .ok_or_else(|| HeroError::not_found(T::ENTITY, item.key()))
    }
}

impl<T: Unique + Ord> UniqueList<T> {
    pub fn to_set(&self) -> BTreeSet<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Unique> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two lists are equal when they hold the same elements, in any order.
impl<T: Unique> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.items.iter().all(|item| other.contains(item))
    }
}

impl<T: Unique + Eq> Eq for UniqueList<T> {}

impl<T: Unique + Ord> From<BTreeSet<T>> for UniqueList<T> {
    fn from(set: BTreeSet<T>) -> Self {
        Self {
            items: set.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for UniqueList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Unique + Deserialize<'de>> Deserialize<'de> for UniqueList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        UniqueList::from_vec(items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> Tag {
        Tag::new(s).unwrap()
    }

    #[test]
    fn add_rejects_duplicate() {
        let mut list = UniqueTagList::new();
        list.add(tag("friend")).unwrap();
        let err = list.add(tag("friend")).unwrap_err();
        assert!(matches!(err, HeroError::AlreadyExists { .. }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_missing_fails() {
        let mut list = UniqueTagList::new();
        assert!(matches!(list.remove(&tag("friend")), Err(HeroError::NotFound { .. })));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let list = UniqueTagList::from_vec(vec![tag("zeta"), tag("alpha"), tag("mid")]).unwrap();
        let names: Vec<&str> = list.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut list = UniqueTagList::from_vec(vec![tag("a"), tag("b"), tag("c")]).unwrap();
        list.set(&tag("b"), tag("x")).unwrap();
        let names: Vec<&str> = list.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["a", "x", "c"]);
    }

    #[test]
    fn set_rejects_collision_with_other_element() {
        let mut list = UniqueTagList::from_vec(vec![tag("a"), tag("b")]).unwrap();
        assert!(list.set(&tag("a"), tag("b")).is_err());
        // Replacing with itself is allowed
        assert!(list.set(&tag("a"), tag("a")).is_ok());
    }

    #[test]
    fn set_all_with_duplicates_leaves_list_unchanged() {
        let mut list = UniqueTagList::from_vec(vec![tag("a")]).unwrap();
        assert!(list.set_all(vec![tag("b"), tag("b")]).is_err());
        assert_eq!(list.as_slice(), &[tag("a")]);
    }

    #[test]
    fn merge_from_skips_existing() {
        let mut list = UniqueTagList::from_vec(vec![tag("a"), tag("b")]).unwrap();
        let other = UniqueTagList::from_vec(vec![tag("b"), tag("c")]).unwrap();
        list.merge_from(&other);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn equality_ignores_order() {
        let left = UniqueTagList::from_vec(vec![tag("a"), tag("b")]).unwrap();
        let right = UniqueTagList::from_vec(vec![tag("b"), tag("a")]).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn deserialize_rejects_duplicates() {
        assert!(serde_json::from_str::<UniqueTagList>(r#"["a","a"]"#).is_err());
        let list: UniqueTagList = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(list.len(), 2);
    }
}
