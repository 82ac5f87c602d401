pub mod file;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::file::FileConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

const DEFAULT_MOVIES_FILE: &str = "movies.txt";
const DEFAULT_SHOWTIMES_FILE: &str = "showtimes.txt";
const DEFAULT_TICKET_DIR: &str = ".";

#[derive(Debug, Clone, Parser)]
#[command(name = "cinema-booking")]
#[command(about = "Console movie ticket booking over flat-file catalogs")]
pub struct CliConfig {
    /// Movie catalog file, one `title,duration,rating` line per movie
    #[arg(long)]
    pub movies: Option<String>,

    /// Showtime schedule file, one `title,time,screen` line per showtime
    #[arg(long)]
    pub showtimes: Option<String>,

    /// Directory ticket files are written into
    #[arg(long)]
    pub ticket_dir: Option<String>,

    /// Optional TOML config file; explicit flags win over its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// The settings the rest of the program runs on, after the CLI flags,
/// the config file, and the defaults have been merged in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub movies_file: String,
    pub showtimes_file: String,
    pub ticket_dir: String,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        Ok(Settings {
            movies_file: self
                .movies
                .clone()
                .or(file.movies_file)
                .unwrap_or_else(|| DEFAULT_MOVIES_FILE.to_string()),
            showtimes_file: self
                .showtimes
                .clone()
                .or(file.showtimes_file)
                .unwrap_or_else(|| DEFAULT_SHOWTIMES_FILE.to_string()),
            ticket_dir: self
                .ticket_dir
                .clone()
                .or(file.ticket_dir)
                .unwrap_or_else(|| DEFAULT_TICKET_DIR.to_string()),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("movies_file", &self.movies_file)?;
        validate_path("showtimes_file", &self.showtimes_file)?;
        validate_path("ticket_dir", &self.ticket_dir)?;
        Ok(())
    }
}
