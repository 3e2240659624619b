use std::io::{BufRead, Write};

use crate::console::{Console, ConsoleError};
use crate::models::CinemaRoom;

/// Печатает схему зала: B — проданные места, S — свободные.
pub fn show_seats<R: BufRead, W: Write>(
    room: &CinemaRoom,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    console.write_line("Cinema:")?;

    let mut header = String::from(" ");
    for seat in 1..=room.seats_per_row() {
        header.push_str(&format!(" {}", seat));
    }
    console.write_line(&header)?;

    for (index, row) in room.rows().enumerate() {
        let mut line = (index + 1).to_string();
        for seat in row {
            line.push_str(if seat.booked { " B" } else { " S" });
        }
        console.write_line(&line)?;
    }

    Ok(())
}
