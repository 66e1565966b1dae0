pub mod draft;
pub mod query;
pub mod session;
pub mod store;

pub use crate::domain::model::{Course, CourseAverage, ItemId, MenuItem, Price};
pub use crate::domain::ports::IdGenerator;
pub use crate::utils::error::Result;
