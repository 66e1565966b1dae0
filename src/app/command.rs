use crate::core::draft::ItemDraft;
use crate::core::session::{Command, RemoveTarget};
use crate::domain::model::{Course, ItemId};
use crate::utils::error::{MenuError, Result};
use std::str::FromStr;

/// Parses one shell line, e.g. `add Soup | Tomato soup | Starters | 25.00`.
impl FromStr for Command {
    type Err = MenuError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add(parse_draft(rest))),
            "remove" | "rm" => parse_remove(rest).map(Command::Remove),
            "menu" | "home" | "list" => Ok(Command::Overview),
            "averages" | "avg" => Ok(Command::Averages),
            "filter" => {
                if rest.is_empty() {
                    Ok(Command::Filter(None))
                } else {
                    rest.parse::<Course>().map(|course| Command::Filter(Some(course)))
                }
            }
            "courses" => Ok(Command::Courses),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(MenuError::UnknownCommandError {
                command: keyword.to_string(),
            }),
        }
    }
}

/// Fields are `|`-separated in form order; missing trailing fields stay blank
/// so the presence checks report them.
fn parse_draft(rest: &str) -> ItemDraft {
    let mut fields = rest.splitn(4, '|').map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();
    let name = next();
    let description = next();
    let course = next();
    let price = next();
    ItemDraft {
        name,
        description,
        course,
        price,
    }
}

fn parse_remove(rest: &str) -> Result<RemoveTarget> {
    if rest.is_empty() {
        return Err(MenuError::MissingFieldError {
            field: "id".to_string(),
        });
    }
    // Generated ids are never purely numeric, so digits mean a listing number.
    match rest.parse::<usize>() {
        Ok(number) => Ok(RemoveTarget::Position(number)),
        Err(_) => Ok(RemoveTarget::Id(ItemId::from(rest))),
    }
}
