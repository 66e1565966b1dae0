pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::MenuConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "menu-manager")]
#[command(about = "Manage a restaurant menu from the terminal")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// How command results are written
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Override the menu title from the settings file
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Settings file (or defaults) with command line overrides applied.
    pub fn load_settings(&self) -> Result<MenuConfig> {
        let mut config = match &self.config {
            Some(path) => MenuConfig::from_file(path)?,
            None => MenuConfig::default(),
        };

        if let Some(title) = &self.title {
            config.menu.title = title.clone();
        }
        if self.json_logs {
            config.logging.json = true;
        }

        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(title) = &self.title {
            validate_non_empty_string("title", title)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["menu-manager"]);
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.load_settings().unwrap(), MenuConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = CliConfig::parse_from([
            "menu-manager",
            "--output",
            "json",
            "--title",
            "Night Menu",
            "--json-logs",
        ]);
        assert_eq!(cli.output, OutputFormat::Json);
        let config = cli.load_settings().unwrap();
        assert_eq!(config.menu.title, "Night Menu");
        assert!(config.logging.json);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let cli = CliConfig::parse_from(["menu-manager", "--title", "  "]);
        assert!(cli.validate().is_err());
    }
}
