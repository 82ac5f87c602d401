use crate::domain::model::Ticket;
use crate::utils::error::Result;

/// The interactive dialogue with the user. `say` is fire-and-forget output;
/// `prompt` prints a message and blocks for one reply line.
pub trait Console {
    fn say(&mut self, line: &str);
    fn prompt(&mut self, message: &str) -> Result<String>;
}

/// Where finished tickets go. Returns the location the ticket was written
/// to, for reporting.
pub trait TicketSink {
    fn write(&self, ticket: &Ticket) -> Result<String>;
}
