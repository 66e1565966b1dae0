use crate::utils::error::{MenuError, Result};
use std::collections::HashSet;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a>(field_name: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MenuError::MissingFieldError {
            field: field_name.to_string(),
        });
    }
    Ok(trimmed)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<T: Eq + Hash + std::fmt::Display>(field_name: &str, values: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(MenuError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "menu.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field_trims() {
        assert_eq!(validate_required_field("name", "  Soup ").unwrap(), "Soup");
        assert!(matches!(
            validate_required_field("name", "   "),
            Err(MenuError::MissingFieldError { .. })
        ));
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("courses", &["a", "b"]).is_ok());
        assert!(validate_unique("courses", &["a", "a"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        let empty: [u8; 0] = [];
        assert!(validate_non_empty_list("courses", &empty).is_err());
        assert!(validate_non_empty_list("courses", &[1]).is_ok());
    }
}
