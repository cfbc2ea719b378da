//! Interactive collection of a booking from a terminal.

use std::io::{BufRead, Write};

use crate::error::AppResult;

const DAY_PROMPT: &str =
    "Enter a day to book (0: Mon, 1: Tue, 2: Wed, 3: Thu, 4: Fri, 5: Sat, 6: Sun): ";
const TIME_PROMPT: &str = "Enter a time to book (for example 10:00 am): ";
const DURATION_PROMPT: &str = "Enter a duration to book (in minutes): ";

/// A booking exactly as typed, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBooking {
    pub day: String,
    pub at: String,
    pub duration: String,
}

/// Asks for day, time and duration in turn.
///
/// End of input yields empty answers, which fail validation later rather
/// than here.
///
/// ## Errors
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<RawBooking> {
    writeln!(output, "=== VENUE RESERVATION ===")?;

    Ok(RawBooking {
        day: ask_line(input, output, DAY_PROMPT)?,
        at: ask_line(input, output, TIME_PROMPT)?,
        duration: ask_line(input, output, DURATION_PROMPT)?,
    })
}

fn ask_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> AppResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
