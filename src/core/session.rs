use crate::core::catalog::Theater;
use crate::domain::model::{Seat, Showtime, Ticket, TOTAL_SEATS};
use crate::domain::ports::{Console, TicketSink};
use crate::utils::error::Result;

/// Drives one interactive booking: pick a showtime, pick a seat count,
/// claim seats one at a time, print tickets. All bad input re-prompts;
/// the only failure that escapes is a ticket that cannot be written.
pub struct BookingSession<C: Console, T: TicketSink> {
    console: C,
    tickets: T,
}

impl<C: Console, T: TicketSink> BookingSession<C, T> {
    pub fn new(console: C, tickets: T) -> Self {
        Self { console, tickets }
    }

    /// Hands the console back, transcript and all. Used by tests that
    /// assert on the dialogue.
    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self, theater: &mut Theater) -> Result<Vec<Seat>> {
        let Some(index) = self.choose_showtime(theater)? else {
            return Ok(Vec::new());
        };

        let selected = &theater.showtimes[index];
        self.console.say(&format!(
            "You have selected the showtime for: {}",
            selected.movie
        ));

        let num_seats = self.choose_seat_count()?;
        let booked = self.choose_seats(&mut theater.showtimes[index], num_seats)?;

        self.console
            .say(&format!("You have selected seats: {}", seat_list(&booked)));

        let showtime = &theater.showtimes[index];
        for seat in &booked {
            let ticket = Ticket::for_seat(showtime, *seat);
            let location = self.tickets.write(&ticket)?;
            tracing::debug!("Ticket written to {}", location);
            self.console
                .say(&format!("Ticket for seat {} printed.", seat));
        }

        Ok(booked)
    }

    fn choose_showtime(&mut self, theater: &Theater) -> Result<Option<usize>> {
        if theater.showtimes.is_empty() {
            self.console.say("No showtimes available.");
            return Ok(None);
        }

        self.console.say("Showtimes:");
        for line in theater.showtime_lines() {
            self.console.say(&line);
        }

        loop {
            let answer = self
                .console
                .prompt("Choose a showtime by entering the corresponding number: ")?;
            match answer.trim().parse::<usize>() {
                Ok(choice) if (1..=theater.showtimes.len()).contains(&choice) => {
                    return Ok(Some(choice - 1));
                }
                Ok(_) => self
                    .console
                    .say("Invalid choice. Please enter a number within the list range."),
                Err(_) => self
                    .console
                    .say("Invalid input. Please enter a valid number."),
            }
        }
    }

    fn choose_seat_count(&mut self) -> Result<usize> {
        loop {
            let answer = self
                .console
                .prompt("How many seats would you like to book? ")?;
            match answer.trim().parse::<usize>() {
                Ok(count) if (1..=TOTAL_SEATS).contains(&count) => return Ok(count),
                Ok(_) => self.console.say(
                    "Invalid number of seats. Please enter a number between 1 and 25.",
                ),
                Err(_) => self
                    .console
                    .say("Invalid input. Please enter a valid number."),
            }
        }
    }

    /// Collects exactly `num_seats` successful bookings, re-prompting for as
    /// long as it takes. Returns the seats in booking order.
    pub fn choose_seats(
        &mut self,
        showtime: &mut Showtime,
        num_seats: usize,
    ) -> Result<Vec<Seat>> {
        let mut booked = Vec::with_capacity(num_seats);
        while booked.len() < num_seats {
            self.console.say(&showtime.seats.render());

            let Some(row) = self.prompt_number("Enter the row number (0-4): ")? else {
                continue;
            };
            let Some(col) = self.prompt_number("Enter the column number (0-4): ")? else {
                continue;
            };

            let seat = match Seat::new(row, col) {
                Ok(seat) => seat,
                Err(_) => {
                    self.console
                        .say("Invalid seat. Enter row and column numbers between 0 and 4.");
                    continue;
                }
            };

            match showtime.seats.book(seat) {
                Ok(()) => {
                    self.console
                        .say(&format!("Seat {} booked successfully.", seat));
                    booked.push(seat);
                }
                Err(_) => self
                    .console
                    .say(&format!("Seat {} is already booked.", seat)),
            }
        }
        Ok(booked)
    }

    fn prompt_number(&mut self, message: &str) -> Result<Option<usize>> {
        let answer = self.console.prompt(message)?;
        match answer.trim().parse::<usize>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => {
                self.console.say("Invalid input. Enter valid numbers.");
                Ok(None)
            }
        }
    }
}

fn seat_list(seats: &[Seat]) -> String {
    seats
        .iter()
        .map(Seat::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
