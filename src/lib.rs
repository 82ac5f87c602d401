pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::console::{ScriptedConsole, StdioConsole};
pub use crate::adapters::tickets::FsTicketSink;
pub use crate::config::{CliConfig, Settings};
pub use crate::core::{catalog::Theater, session::BookingSession};
pub use crate::domain::model::{Movie, Seat, SeatGrid, Showtime, Ticket};
pub use crate::domain::ports::{Console, TicketSink};
pub use crate::utils::error::{BookingError, Result};
