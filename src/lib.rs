pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ids::{SequentialIds, UuidGenerator};
pub use app::{OutputFormat, Renderer, Shell, ShellSummary};
pub use config::toml_config::{MenuConfig, MenuSettings};
pub use crate::core::{
    draft::ItemDraft,
    query::MenuQuery,
    session::{Command, MenuSession, Outcome, RemoveTarget},
    store::MenuStore,
};
pub use domain::model::{Course, CourseAverage, ItemId, MenuItem, Price};
pub use domain::ports::IdGenerator;
pub use utils::error::{MenuError, Result};
