use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Seat ({row}, {col}) is out of range, rows and columns go from 0 to 4")]
    SeatOutOfRange { row: usize, col: usize },

    #[error("Seat ({row}, {col}) is already booked")]
    SeatTaken { row: usize, col: usize },

    #[error("Console input closed before the booking finished")]
    InputClosed,

    #[error("Failed to write ticket {path}: {source}")]
    Ticket {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BookingError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value for '{}' is not usable: {}", field, reason)
            }
            BookingError::Toml(_) => "The config file is not valid TOML.".to_string(),
            BookingError::Ticket { path, .. } => {
                format!("Could not write the ticket file at {}.", path)
            }
            BookingError::InputClosed => {
                "The console input ended before the booking finished.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookingError::InvalidConfigValue { .. } => {
                "Check the command line flags and the config file for typos."
            }
            BookingError::Toml(_) => "Fix the TOML syntax reported above and retry.",
            BookingError::Ticket { .. } => {
                "Check that the ticket directory exists and is writable."
            }
            BookingError::InputClosed => "Run the tool in an interactive terminal.",
            BookingError::Io(_) => "Check file paths and permissions.",
            _ => "Re-run with --verbose for more detail.",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;
