use crate::utils::error::{BookingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BookingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BookingError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("movies_file", "movies.txt").is_ok());
        assert!(validate_path("movies_file", "./data/movies.txt").is_ok());
        assert!(validate_path("movies_file", "").is_err());
        assert!(validate_path("movies_file", "   ").is_err());
        assert!(validate_path("movies_file", "bad\0path").is_err());
    }
}
