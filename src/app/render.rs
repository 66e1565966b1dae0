use crate::core::session::Outcome;
use crate::domain::model::{CourseAverage, MenuItem, Price};
use crate::utils::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const HELP_TEXT: &str = "\
Commands:
  add <name> | <description> | <course> | <price>   add a dish
  remove <id or number>                             remove a dish
  menu                                              title, averages and full menu
  averages                                          average price per course
  filter [course]                                   dishes of one course
  courses                                           list the courses
  help                                              show this help
  quit                                              leave";

/// Turns outcomes into the text written back to the user.
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    currency_symbol: String,
}

impl Renderer {
    pub fn new(format: OutputFormat, currency_symbol: impl Into<String>) -> Self {
        Self {
            format,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn render(&self, outcome: &Outcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
            OutputFormat::Text => Ok(self.render_text(outcome)),
        }
    }

    pub fn render_error(&self, error: &MenuError) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "outcome": "error",
                "message": error.to_string(),
                "suggestion": error.recovery_suggestion(),
            })
            .to_string(),
            OutputFormat::Text => format!("error: {}", error.user_friendly_message()),
        }
    }

    fn money(&self, price: Price) -> String {
        format!("{}{}", self.currency_symbol, price)
    }

    fn render_text(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Added { item } => format!(
                "Added {} ({}) - {} [id: {}]",
                item.name(),
                item.course(),
                self.money(item.price()),
                item.id()
            ),
            Outcome::Removed {
                removed: 1,
                item: Some(item),
                ..
            } => format!(
                "Removed {} ({}) [id: {}]",
                item.name(),
                item.course(),
                item.id()
            ),
            Outcome::Removed {
                id: Some(id),
                removed,
                ..
            } if *removed > 1 => format!("Removed {} items with id {}", removed, id),
            Outcome::Removed { target, .. } => {
                format!("No menu item matches {}; menu unchanged", target)
            }
            Outcome::Overview {
                title,
                total_items,
                averages,
                items,
            } => {
                let mut out = String::new();
                let _ = writeln!(out, "{}", title);
                let _ = writeln!(out, "Total Menu Items: {}", total_items);
                let _ = writeln!(out);
                let _ = writeln!(out, "Average Price by Course");
                let _ = writeln!(out, "{}", self.averages_table(averages));
                let _ = writeln!(out);
                let _ = write!(out, "Full Menu");
                if items.is_empty() {
                    let _ = write!(out, "\n  (no items)");
                }
                for (index, item) in items.iter().enumerate() {
                    let _ = write!(
                        out,
                        "\n{}. {} ({}) - {}",
                        index + 1,
                        item.name(),
                        item.course(),
                        self.money(item.price())
                    );
                    self.push_description(&mut out, item);
                }
                out
            }
            Outcome::Averages { averages } => self.averages_table(averages),
            Outcome::Filtered { course, items } => {
                if items.is_empty() {
                    return format!("No {} on the menu", course);
                }
                let mut out = format!("{}:", course);
                for item in items {
                    let _ = write!(out, "\n- {} - {}", item.name(), self.money(item.price()));
                    self.push_description(&mut out, item);
                }
                out
            }
            Outcome::Courses { courses } => courses
                .iter()
                .map(|course| course.name())
                .collect::<Vec<_>>()
                .join(", "),
            Outcome::Help => HELP_TEXT.to_string(),
            Outcome::Quit => "Goodbye".to_string(),
        }
    }

    fn averages_table(&self, averages: &[CourseAverage]) -> String {
        let header = format!("Average Price ({})", self.currency_symbol);
        let mut out = format!("{:<10}  {}", "Course", header);
        for average in averages {
            let _ = write!(out, "\n{:<10}  {}", average.course.name(), average.average);
        }
        out
    }

    fn push_description(&self, out: &mut String, item: &MenuItem) {
        if !item.description().is_empty() {
            let _ = write!(out, "\n   {}", item.description());
        }
    }
}
