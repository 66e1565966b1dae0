use crate::utils::error::{MenuError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\.(\d{1,2}))?$").expect("price pattern is valid"));

/// Course category a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starters,
    Mains,
    Desserts,
}

impl Course {
    /// Summary order used when nothing else is configured.
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];

    pub fn name(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MenuError::UnknownCourseError {
                value: trimmed.to_string(),
            })
    }
}

/// Non-negative amount held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Arithmetic mean rounded half-up to the cent; `None` for no prices.
    pub fn mean<I>(prices: I) -> Option<Price>
    where
        I: IntoIterator<Item = Price>,
    {
        let (sum, count) = prices
            .into_iter()
            .fold((0u128, 0u128), |(sum, count), price| {
                (sum + u128::from(price.0), count + 1)
            });
        if count == 0 {
            return None;
        }
        let rounded = (2 * sum + count) / (2 * count);
        // The mean never exceeds the largest input, so it fits back into u64.
        Some(Price(rounded as u64))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = |reason: &str| MenuError::InvalidPriceError {
            value: trimmed.to_string(),
            reason: reason.to_string(),
        };

        let caps = PRICE_PATTERN
            .captures(trimmed)
            .ok_or_else(|| invalid("expected a non-negative amount with at most two decimals"))?;

        let units: u64 = caps[1].parse().map_err(|_| invalid("amount is too large"))?;
        let cents = match caps.get(2).map(|m| m.as_str()) {
            Some(frac) if frac.len() == 1 => frac.parse::<u64>().unwrap_or(0) * 10,
            Some(frac) => frac.parse::<u64>().unwrap_or(0),
            None => 0,
        };

        units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(Price)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Opaque identifier of a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

/// A dish on the menu. Items are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    id: ItemId,
    name: String,
    description: String,
    course: Course,
    price: Price,
}

impl MenuItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            course,
            price,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// Average price of one course, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseAverage {
    pub course: Course,
    pub average: Price,
}

impl fmt::Display for CourseAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.course, self.average)
    }
}
