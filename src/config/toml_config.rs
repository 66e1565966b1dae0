use crate::domain::model::Course;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_unique, Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub menu: MenuSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    pub title: String,
    pub currency_symbol: String,
    pub summary_courses: Vec<Course>,
    pub default_course: Course,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            title: "Christoffel's Cooking Menu".to_string(),
            currency_symbol: "R".to_string(),
            summary_courses: Course::ALL.to_vec(),
            default_course: Course::Starters,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl MenuConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("menu.title", &self.menu.title)?;
        validate_non_empty_string("menu.currency_symbol", &self.menu.currency_symbol)?;
        validate_non_empty_list("menu.summary_courses", &self.menu.summary_courses)?;
        validate_unique("menu.summary_courses", &self.menu.summary_courses)?;

        if let Some(level) = &self.logging.level {
            let valid_levels = ["error", "warn", "info", "debug", "trace"];
            if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(MenuError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
