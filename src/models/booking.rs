use serde::Serialize;
use thiserror::Error;

// Тексты сообщений — часть консольного протокола, не менять
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Wrong input!")]
    InvalidCoordinate,
    #[error("That ticket has already been purchased!")]
    AlreadyBooked,
}

/// Результат успешной покупки: координаты места (1-based) и его цена.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub row: i64,
    pub seat: i64,
    pub price: u32,
}
