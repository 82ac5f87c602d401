pub mod catalog;
pub mod session;

pub use crate::domain::model::{Movie, Seat, SeatGrid, Showtime, Ticket};
pub use crate::domain::ports::{Console, TicketSink};
pub use crate::utils::error::Result;
