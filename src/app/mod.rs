pub mod command;
pub mod render;
pub mod shell;

pub use render::{OutputFormat, Renderer};
pub use shell::{Shell, ShellSummary};
