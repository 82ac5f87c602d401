pub mod console;
pub mod tickets;
