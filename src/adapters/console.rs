use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::domain::ports::Console;
use crate::utils::error::{BookingError, Result};

/// Console over stdin/stdout. Prompts print without a trailing newline and
/// flush so the cursor sits after the question.
#[derive(Debug, Default)]
pub struct StdioConsole;

impl Console for StdioConsole {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        print!("{}", message);
        io::stdout().flush()?;

        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            return Err(BookingError::InputClosed);
        }
        Ok(answer.trim().to_string())
    }
}

/// Canned console for tests: replies come from a fixed script, everything
/// said or asked lands in the transcript.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.transcript.push(message.to_string());
        self.replies.pop_front().ok_or(BookingError::InputClosed)
    }
}
