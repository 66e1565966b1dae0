use crate::domain::model::{Course, MenuItem, Price};
use crate::domain::ports::IdGenerator;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;

/// Raw add-item form input, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }

    /// Turns the form into an item. Name and price must be present, the
    /// description may be blank and a blank course falls back to `default_course`.
    /// An id is drawn only once the form is valid.
    pub fn into_item<G>(self, ids: &mut G, default_course: Course) -> Result<MenuItem>
    where
        G: IdGenerator + ?Sized,
    {
        let name = validate_required_field("name", &self.name)?;
        let price: Price = validate_required_field("price", &self.price)?.parse()?;
        let course = if self.course.trim().is_empty() {
            default_course
        } else {
            self.course.parse()?
        };

        Ok(MenuItem::new(
            ids.next_id(),
            name,
            self.description.trim(),
            course,
            price,
        ))
    }
}
