use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::console::{Console, ConsoleError};
use crate::models::CinemaRoom;

/// Цикл покупки билета: запрашивает координаты, пока бронирование
/// не пройдет. Единственный повторяющийся сценарий в системе.
pub fn buy_ticket<R: BufRead, W: Write>(
    room: &mut CinemaRoom,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    loop {
        let row = console.prompt_int("Enter a row number:")?;
        let seat = console.prompt_int("Enter a seat number in that row:")?;

        match room.book_ticket(row, seat) {
            Ok(ticket) => {
                info!(
                    "Ticket sold: row {} seat {} for ${}",
                    ticket.row, ticket.seat, ticket.price
                );
                console.write_line(&format!("Ticket price: ${}", ticket.price))?;
                return Ok(());
            }
            Err(err) => {
                warn!("Booking rejected for row {} seat {}: {}", row, seat, err);
                console.write_line(&err.to_string())?;
            }
        }
    }
}
