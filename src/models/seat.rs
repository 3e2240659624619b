use serde::Serialize;

// Место в зале: цена фиксируется при создании зала и больше не меняется
#[derive(Debug, Clone, Serialize)]
pub struct Seat {
    pub booked: bool,
    pub price: u32,
}

impl Seat {
    pub fn new(price: u32) -> Self {
        Self {
            booked: false,
            price,
        }
    }
}
