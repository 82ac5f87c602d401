use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{BookingError, Result};

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;
pub const TOTAL_SEATS: usize = GRID_ROWS * GRID_COLS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub duration_mins: u32,
    pub rating: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, duration_mins: u32, rating: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration_mins,
            rating: rating.into(),
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Duration: {} mins, Rating: {}",
            self.title, self.duration_mins, self.rating
        )
    }
}

/// A validated grid coordinate. Construction is the bounds check, so a
/// `Seat` held by anyone is always inside the 5x5 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    row: usize,
    col: usize,
}

impl Seat {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return Err(BookingError::SeatOutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Booking flags for one showtime. A seat goes Available -> Booked at most
/// once; there is no unbooking.
#[derive(Debug, Clone, Default)]
pub struct SeatGrid {
    booked: [[bool; GRID_COLS]; GRID_ROWS],
}

impl SeatGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_booked(&self, seat: Seat) -> bool {
        self.booked[seat.row()][seat.col()]
    }

    /// Marks the seat booked. Fails without mutating when the seat is
    /// already taken.
    pub fn book(&mut self, seat: Seat) -> Result<()> {
        if self.booked[seat.row()][seat.col()] {
            return Err(BookingError::SeatTaken {
                row: seat.row(),
                col: seat.col(),
            });
        }
        self.booked[seat.row()][seat.col()] = true;
        Ok(())
    }

    pub fn available_count(&self) -> usize {
        TOTAL_SEATS
            - self
                .booked
                .iter()
                .flatten()
                .filter(|&&taken| taken)
                .count()
    }

    /// Console layout block, one marker per seat.
    pub fn render(&self) -> String {
        let mut out = String::from("Seats Layout (X = Booked, . = Available):");
        for row in &self.booked {
            out.push('\n');
            let markers: Vec<&str> = row.iter().map(|&taken| if taken { "X" } else { "." }).collect();
            out.push_str(&markers.join(" "));
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct Showtime {
    pub movie: Movie,
    pub time: String,
    pub screen: u32,
    pub seats: SeatGrid,
}

impl Showtime {
    pub fn new(movie: Movie, time: impl Into<String>, screen: u32) -> Self {
        Self {
            movie,
            time: time.into(),
            screen,
            seats: SeatGrid::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub movie_title: String,
    pub time: String,
    pub duration_mins: u32,
    pub seat: Seat,
}

impl Ticket {
    pub fn for_seat(showtime: &Showtime, seat: Seat) -> Self {
        Self {
            movie_title: showtime.movie.title.clone(),
            time: showtime.time.clone(),
            duration_mins: showtime.movie.duration_mins,
            seat,
        }
    }

    /// Ticket files are keyed by movie title and 0-indexed seat coordinates.
    /// Two showtimes of the same movie collide on the same seat's name; the
    /// flat-file format carries no disambiguator and we keep its naming.
    pub fn file_name(&self) -> String {
        format!(
            "ticket_{}_seat_{}_{}.txt",
            self.movie_title,
            self.seat.row(),
            self.seat.col()
        )
    }

    /// The ticket body, seat coordinates 1-indexed for the reader.
    pub fn render(&self) -> String {
        format!(
            "Movie: {}\nTime: {}\nDuration: {} mins\nSeat: Row {}, Column {}\n",
            self.movie_title,
            self.time,
            self.duration_mins,
            self.seat.row() + 1,
            self.seat.col() + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showtime() -> Showtime {
        Showtime::new(Movie::new("Inception", 148, "PG-13"), "18:00", 1)
    }

    #[test]
    fn test_movie_display() {
        let movie = Movie::new("Inception", 148, "PG-13");
        assert_eq!(
            movie.to_string(),
            "Inception - Duration: 148 mins, Rating: PG-13"
        );
    }

    #[test]
    fn test_seat_bounds() {
        assert!(Seat::new(0, 0).is_ok());
        assert!(Seat::new(4, 4).is_ok());
        assert!(Seat::new(5, 0).is_err());
        assert!(Seat::new(0, 5).is_err());
    }

    #[test]
    fn test_fresh_grid_all_available() {
        let grid = SeatGrid::new();
        assert_eq!(grid.available_count(), TOTAL_SEATS);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                assert!(!grid.is_booked(Seat::new(row, col).unwrap()));
            }
        }
    }

    #[test]
    fn test_book_seat_success_then_failure() {
        let mut grid = SeatGrid::new();
        let seat = Seat::new(2, 3).unwrap();

        assert!(grid.book(seat).is_ok());
        assert!(grid.is_booked(seat));

        let second = grid.book(seat);
        assert!(matches!(
            second,
            Err(crate::utils::error::BookingError::SeatTaken { row: 2, col: 3 })
        ));
        assert!(grid.is_booked(seat));
        assert_eq!(grid.available_count(), TOTAL_SEATS - 1);
    }

    #[test]
    fn test_grid_render_marks_booked_seats() {
        let mut grid = SeatGrid::new();
        grid.book(Seat::new(0, 1).unwrap()).unwrap();

        let rendered = grid.render();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Seats Layout (X = Booked, . = Available):"
        );
        assert_eq!(lines.next().unwrap(), ". X . . .");
        assert_eq!(lines.next().unwrap(), ". . . . .");
    }

    #[test]
    fn test_ticket_render_and_file_name() {
        let ticket = Ticket::for_seat(&showtime(), Seat::new(0, 0).unwrap());
        assert_eq!(ticket.file_name(), "ticket_Inception_seat_0_0.txt");
        assert_eq!(
            ticket.render(),
            "Movie: Inception\nTime: 18:00\nDuration: 148 mins\nSeat: Row 1, Column 1\n"
        );
    }
}
