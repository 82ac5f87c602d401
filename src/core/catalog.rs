use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::model::{Movie, Showtime};
use crate::utils::error::Result;

/// The in-memory catalog for one session: movies plus the showtimes that
/// reference them. Constructed in main and passed down; never global.
#[derive(Debug, Default)]
pub struct Theater {
    pub movies: Vec<Movie>,
    pub showtimes: Vec<Showtime>,
}

impl Theater {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub fn add_showtime(&mut self, showtime: Showtime) {
        self.showtimes.push(showtime);
    }

    /// Linear first-match scan. Duplicate titles are not rejected at load
    /// time, so with duplicates every showtime resolves to the first entry.
    pub fn find_movie_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.title == title)
    }

    pub fn movie_lines(&self) -> Vec<String> {
        self.movies
            .iter()
            .enumerate()
            .map(|(idx, movie)| format!("{}. {}", idx + 1, movie))
            .collect()
    }

    pub fn showtime_lines(&self) -> Vec<String> {
        self.showtimes
            .iter()
            .enumerate()
            .map(|(idx, showtime)| {
                format!(
                    "{}. {} at {} on screen {}",
                    idx + 1,
                    showtime.movie.title,
                    showtime.time,
                    showtime.screen
                )
            })
            .collect()
    }

    /// Loads `title,duration,rating` lines. A missing or unreadable file is
    /// a diagnostic, not an error; the catalog is left as it was.
    pub fn load_movies_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => self.load_movies_from_reader(file),
            Err(e) => {
                tracing::warn!("Movie file {} not found: {}", path.display(), e);
                Ok(0)
            }
        }
    }

    pub fn load_movies_from_reader<R: Read>(&mut self, source: R) -> Result<usize> {
        let mut loaded = 0;
        for record in records(source) {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping movie line due to format error: {}", e);
                    continue;
                }
            };
            if is_blank(&record) {
                continue;
            }
            if record.len() != 3 {
                tracing::warn!(
                    "Skipping movie line {:?}: expected 3 fields, got {}",
                    record,
                    record.len()
                );
                continue;
            }
            let duration_mins: u32 = match record[1].parse() {
                Ok(duration) => duration,
                Err(_) => {
                    tracing::warn!(
                        "Skipping movie line {:?}: duration '{}' is not an integer",
                        record,
                        &record[1]
                    );
                    continue;
                }
            };
            self.add_movie(Movie::new(&record[0], duration_mins, &record[2]));
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Loads `title,time,screen` lines. Same per-line recovery as the movie
    /// loader, plus the title must resolve against the loaded movies.
    pub fn load_showtimes_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => self.load_showtimes_from_reader(file),
            Err(e) => {
                tracing::warn!("Showtime file {} not found: {}", path.display(), e);
                Ok(0)
            }
        }
    }

    pub fn load_showtimes_from_reader<R: Read>(&mut self, source: R) -> Result<usize> {
        let mut loaded = 0;
        for record in records(source) {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping showtime line due to format error: {}", e);
                    continue;
                }
            };
            if is_blank(&record) {
                continue;
            }
            if record.len() != 3 {
                tracing::warn!(
                    "Skipping showtime line {:?}: expected 3 fields, got {}",
                    record,
                    record.len()
                );
                continue;
            }
            let screen: u32 = match record[2].parse() {
                Ok(screen) => screen,
                Err(_) => {
                    tracing::warn!(
                        "Skipping showtime line {:?}: screen '{}' is not an integer",
                        record,
                        &record[2]
                    );
                    continue;
                }
            };
            let movie = match self.find_movie_by_title(&record[0]) {
                Some(movie) => movie.clone(),
                None => {
                    tracing::warn!("Movie '{}' not found in the movie list", &record[0]);
                    continue;
                }
            };
            self.add_showtime(Showtime::new(movie, &record[1], screen));
            loaded += 1;
        }
        Ok(loaded)
    }
}

fn records<R: Read>(source: R) -> impl Iterator<Item = csv::Result<StringRecord>> {
    ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(source)
        .into_records()
}

// Whitespace-only lines trim down to a single empty field.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}
