use std::cell::OnceCell;
use std::fmt;

use super::fields::Tag;
use super::job::Job;
use super::person::Person;

pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Predicate-derived projection of a backing slice.
///
/// The matching positions are computed on first read after the predicate or
/// the backing data changes, then reused until the next `invalidate`.
pub struct FilteredView<T> {
    predicate: Predicate<T>,
    visible: OnceCell<Vec<usize>>,
}

impl<T: 'static> FilteredView<T> {
    pub fn new() -> Self {
        Self {
            predicate: Box::new(|_| true),
            visible: OnceCell::new(),
        }
    }

    pub fn set_predicate(&mut self, predicate: Predicate<T>) {
        self.predicate = predicate;
        self.invalidate();
    }

    /// Drops cached positions; call whenever the backing slice changes.
    pub fn invalidate(&mut self) {
        self.visible = OnceCell::new();
    }

    pub fn is_computed(&self) -> bool {
        self.visible.get().is_some()
    }

    pub fn view<'a>(&self, source: &'a [T]) -> Vec<&'a T> {
        let positions = self.visible.get_or_init(|| {
            source
                .iter()
                .enumerate()
                .filter(|(_, item)| (self.predicate)(item))
                .map(|(i, _)| i)
                .collect()
        });
        positions.iter().filter_map(|&i| source.get(i)).collect()
    }
}

impl<T: 'static> Default for FilteredView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FilteredView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredView")
            .field("visible", &self.visible.get())
            .finish_non_exhaustive()
    }
}

pub fn show_all<T: 'static>() -> Predicate<T> {
    Box::new(|_| true)
}

/// Matches persons whose name contains any keyword as a whole word,
/// ignoring case.
pub fn name_contains_keywords(keywords: Vec<String>) -> Predicate<Person> {
    let keywords: Vec<String> = keywords.into_iter().map(|k| k.to_lowercase()).collect();
    Box::new(move |person| {
        person
            .name()
            .as_str()
            .split_whitespace()
            .any(|word| keywords.contains(&word.to_lowercase()))
    })
}

pub fn tag_matches(tag: Tag) -> Predicate<Person> {
    Box::new(move |person| person.has_tag(&tag))
}

pub fn job_title_contains_keywords(keywords: Vec<String>) -> Predicate<Job> {
    let keywords: Vec<String> = keywords.into_iter().map(|k| k.to_lowercase()).collect();
    Box::new(move |job| {
        job.title()
            .as_str()
            .split_whitespace()
            .any(|word| keywords.contains(&word.to_lowercase()))
    })
}
