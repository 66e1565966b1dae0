use crate::core::store::MenuStore;
use crate::domain::model::{Course, CourseAverage, MenuItem, Price};

/// Read-only derivations over a borrowed store snapshot.
#[derive(Debug, Clone, Copy)]
pub struct MenuQuery<'a> {
    store: &'a MenuStore,
}

impl<'a> MenuQuery<'a> {
    pub fn new(store: &'a MenuStore) -> Self {
        Self { store }
    }

    /// One entry per requested course, in the requested order. A course
    /// without items averages to 0.00.
    pub fn average_by_course(&self, courses: &[Course]) -> Vec<CourseAverage> {
        courses
            .iter()
            .map(|&course| {
                let average = Price::mean(
                    self.store
                        .iter()
                        .filter(|item| item.course() == course)
                        .map(MenuItem::price),
                )
                .unwrap_or(Price::ZERO);
                CourseAverage { course, average }
            })
            .collect()
    }

    /// Items of `course` in store order.
    pub fn filter_by_course(&self, course: Course) -> Vec<&'a MenuItem> {
        self.store
            .iter()
            .filter(|item| item.course() == course)
            .collect()
    }

    pub fn total_items(&self) -> usize {
        self.store.len()
    }
}
