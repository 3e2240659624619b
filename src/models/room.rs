use serde::Serialize;

use crate::services::pricing;

use super::booking::{BookingError, Ticket};
use super::seat::Seat;

// Зал кинотеатра: прямоугольная сетка мест, индексация (ряд, место).
// Наружу координаты 1-based, внутри 0-based.
#[derive(Debug, Clone, Serialize)]
pub struct CinemaRoom {
    num_rows: usize,
    seats_per_row: usize,
    total_seats: usize,
    seats: Vec<Vec<Seat>>,
}

/// Сводка продаж: полный пересчет по всем местам на каждый вызов,
/// без кеширования.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub purchased_tickets: usize,
    pub current_income: u64,
    pub total_income: u64,
}

impl CinemaRoom {
    // Вызывающая сторона отвечает за положительные размеры
    pub fn new(num_rows: usize, seats_per_row: usize) -> Self {
        let total_seats = num_rows * seats_per_row;
        let seats = (0..num_rows)
            .map(|row| {
                let price = pricing::price_for_row(row, num_rows, total_seats);
                vec![Seat::new(price); seats_per_row]
            })
            .collect();

        Self {
            num_rows,
            seats_per_row,
            total_seats,
            seats,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    pub fn total_seats(&self) -> usize {
        self.total_seats
    }

    /// Ряды зала в порядке от экрана, для отрисовки схемы.
    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.seats.iter().map(|row| row.as_slice())
    }

    /// Продает место (row, seat), координаты 1-based.
    ///
    /// При любой ошибке зал остается нетронутым; при успехе меняется
    /// ровно одно место, и обратного пути у него нет.
    pub fn book_ticket(&mut self, row: i64, seat: i64) -> Result<Ticket, BookingError> {
        if row < 1
            || row > self.num_rows as i64
            || seat < 1
            || seat > self.seats_per_row as i64
        {
            return Err(BookingError::InvalidCoordinate);
        }

        let target = &mut self.seats[(row - 1) as usize][(seat - 1) as usize];
        if target.booked {
            return Err(BookingError::AlreadyBooked);
        }

        target.booked = true;
        Ok(Ticket {
            row,
            seat,
            price: target.price,
        })
    }

    pub fn statistics(&self) -> Statistics {
        let mut purchased_tickets = 0;
        let mut current_income = 0;
        let mut total_income = 0;

        for seat in self.seats.iter().flatten() {
            if seat.booked {
                purchased_tickets += 1;
                current_income += u64::from(seat.price);
            }
            total_income += u64::from(seat.price);
        }

        Statistics {
            purchased_tickets,
            current_income,
            total_income,
        }
    }
}
