//! statistics.rs
//!
//! Модуль статистики продаж по залу.
//!
//! Включает в себя следующую функциональность:
//! - Подсчет количества проданных билетов.
//! - Расчет процента занятых мест.
//! - Расчет текущей и максимально возможной выручки.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::{Console, ConsoleError};
use crate::models::CinemaRoom;

pub fn show_statistics<R: BufRead, W: Write>(
    room: &CinemaRoom,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    let stats = room.statistics();
    let percentage = (stats.purchased_tickets * 100) as f64 / room.total_seats() as f64;

    debug!(
        "Statistics: {} tickets, {:.2}% occupancy, income ${} of ${}",
        stats.purchased_tickets, percentage, stats.current_income, stats.total_income
    );

    console.write_line(&format!(
        "Number of purchased tickets: {}",
        stats.purchased_tickets
    ))?;
    console.write_line(&format!("Percentage: {:.2}%", percentage))?;
    console.write_line(&format!("Current income: ${}", stats.current_income))?;
    console.write_line(&format!("Total income: ${}", stats.total_income))?;

    Ok(())
}
