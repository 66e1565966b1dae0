use crate::adapters::ids::UuidGenerator;
use crate::config::toml_config::MenuSettings;
use crate::core::draft::ItemDraft;
use crate::core::store::MenuStore;
use crate::domain::model::{Course, CourseAverage, ItemId, MenuItem};
use crate::domain::ports::IdGenerator;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

/// Which item a remove command points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveTarget {
    Id(ItemId),
    /// 1-based number from the menu listing.
    Position(usize),
}

impl fmt::Display for RemoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveTarget::Id(id) => write!(f, "{}", id),
            RemoveTarget::Position(number) => write!(f, "#{}", number),
        }
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(ItemDraft),
    Remove(RemoveTarget),
    Overview,
    Averages,
    Filter(Option<Course>),
    Courses,
    Help,
    Quit,
}

/// Result of one command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Added {
        item: MenuItem,
    },
    /// `removed` counts every dropped copy; `item` is the first of them.
    Removed {
        target: RemoveTarget,
        id: Option<ItemId>,
        removed: usize,
        item: Option<MenuItem>,
    },
    Overview {
        title: String,
        total_items: usize,
        averages: Vec<CourseAverage>,
        items: Vec<MenuItem>,
    },
    Averages {
        averages: Vec<CourseAverage>,
    },
    Filtered {
        course: Course,
        items: Vec<MenuItem>,
    },
    Courses {
        courses: Vec<Course>,
    },
    Help,
    Quit,
}

/// Top-level application state: the only owner of the menu.
pub struct MenuSession<G: IdGenerator = UuidGenerator> {
    store: MenuStore,
    settings: MenuSettings,
    ids: G,
}

impl MenuSession<UuidGenerator> {
    pub fn new(settings: MenuSettings) -> Self {
        Self::with_id_generator(settings, UuidGenerator)
    }
}

impl<G: IdGenerator> MenuSession<G> {
    pub fn with_id_generator(settings: MenuSettings, ids: G) -> Self {
        Self {
            store: MenuStore::new(),
            settings,
            ids,
        }
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!("Executing {:?}", command);

        let outcome = match command {
            Command::Add(draft) => {
                let item = draft.into_item(&mut self.ids, self.settings.default_course)?;
                tracing::info!("Added '{}' to {}", item.name(), item.course());
                self.store.add(item.clone());
                Outcome::Added { item }
            }
            Command::Remove(target) => {
                let id = match &target {
                    RemoveTarget::Id(id) => Some(id.clone()),
                    RemoveTarget::Position(number) => {
                        self.store.position(*number).map(|item| item.id().clone())
                    }
                };
                let (item, removed) = match &id {
                    Some(id) => {
                        let item = self.store.get(id).cloned();
                        (item, self.store.remove(id))
                    }
                    None => (None, 0),
                };
                match &item {
                    Some(item) => tracing::info!(
                        "Removed {} item(s) named '{}' from {}",
                        removed,
                        item.name(),
                        item.course()
                    ),
                    None => tracing::info!("No menu item matches {}, menu unchanged", target),
                }
                Outcome::Removed {
                    target,
                    id,
                    removed,
                    item,
                }
            }
            Command::Overview => {
                let query = self.store.query();
                Outcome::Overview {
                    title: self.settings.title.clone(),
                    total_items: query.total_items(),
                    averages: query.average_by_course(&self.settings.summary_courses),
                    items: self.store.items().to_vec(),
                }
            }
            Command::Averages => Outcome::Averages {
                averages: self
                    .store
                    .query()
                    .average_by_course(&self.settings.summary_courses),
            },
            Command::Filter(course) => {
                let course = course.unwrap_or(self.settings.default_course);
                let items = self
                    .store
                    .query()
                    .filter_by_course(course)
                    .into_iter()
                    .cloned()
                    .collect();
                Outcome::Filtered { course, items }
            }
            Command::Courses => Outcome::Courses {
                courses: Course::ALL.to_vec(),
            },
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };

        Ok(outcome)
    }
}
