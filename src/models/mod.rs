pub mod booking;
pub mod room;
pub mod seat;

pub use booking::{BookingError, Ticket};
pub use room::{CinemaRoom, Statistics};
pub use seat::Seat;
