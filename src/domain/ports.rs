use crate::domain::model::ItemId;

/// Source of fresh item identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}
