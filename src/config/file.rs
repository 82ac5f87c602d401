use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

/// Optional TOML config file. Every field is optional; anything missing
/// falls back to the CLI flag or its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub movies_file: Option<String>,
    pub showtimes_file: Option<String>,
    pub ticket_dir: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            movies_file = "data/movies.txt"
            showtimes_file = "data/showtimes.txt"
            ticket_dir = "tickets"
        "#;
        let config: FileConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.movies_file.as_deref(), Some("data/movies.txt"));
        assert_eq!(config.showtimes_file.as_deref(), Some("data/showtimes.txt"));
        assert_eq!(config.ticket_dir.as_deref(), Some("tickets"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let config: FileConfig = toml::from_str("movies_file = \"m.txt\"").unwrap();
        assert_eq!(config.movies_file.as_deref(), Some("m.txt"));
        assert!(config.showtimes_file.is_none());
        assert!(config.ticket_dir.is_none());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("booking.toml");
        std::fs::write(&path, "movies_file = [not toml").unwrap();
        assert!(FileConfig::from_file(&path).is_err());
    }
}
