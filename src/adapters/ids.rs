use crate::domain::model::ItemId;
use crate::domain::ports::IdGenerator;
use uuid::Uuid;

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ItemId {
        ItemId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonic `item-N` ids, handy when output must be reproducible.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        self.next += 1;
        ItemId::new(format!("item-{}", self.next))
    }
}
