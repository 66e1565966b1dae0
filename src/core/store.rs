use crate::core::query::MenuQuery;
use crate::domain::model::{ItemId, MenuItem};

/// Ordered collection of menu items. Insertion order is preserved and
/// removal never reorders the survivors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`. Id uniqueness is the caller's job.
    pub fn add(&mut self, item: MenuItem) {
        tracing::debug!("Adding menu item {} ({})", item.id(), item.name());
        self.items.push(item);
    }

    /// Drops every item with the given id and returns how many went away.
    /// An unknown id leaves the store untouched.
    pub fn remove(&mut self, id: &ItemId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = before - self.items.len();
        tracing::debug!("Removed {} item(s) with id {}", removed, id);
        removed
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// 1-based lookup matching the numbering of the menu listing.
    pub fn position(&self, number: usize) -> Option<&MenuItem> {
        number.checked_sub(1).and_then(|index| self.items.get(index))
    }

    pub fn query(&self) -> MenuQuery<'_> {
        MenuQuery::new(self)
    }
}

impl<'a> IntoIterator for &'a MenuStore {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<MenuItem> for MenuStore {
    fn from_iter<T: IntoIterator<Item = MenuItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
