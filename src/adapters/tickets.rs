use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::model::Ticket;
use crate::domain::ports::TicketSink;
use crate::utils::error::{BookingError, Result};

/// Writes one text file per ticket under a base directory. Write failures
/// propagate; booked seats without a ticket on disk are not acceptable.
#[derive(Debug, Clone)]
pub struct FsTicketSink {
    base_dir: PathBuf,
}

impl FsTicketSink {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }
}

impl TicketSink for FsTicketSink {
    fn write(&self, ticket: &Ticket) -> Result<String> {
        let path = self.base_dir.join(ticket.file_name());

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| BookingError::Ticket {
                path: path.display().to_string(),
                source,
            })?;
        }

        fs::write(&path, ticket.render()).map_err(|source| BookingError::Ticket {
            path: path.display().to_string(),
            source,
        })?;

        Ok(path.display().to_string())
    }
}
