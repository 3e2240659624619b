//! pricing.rs
//!
//! Правило ценообразования зала.
//!
//! Маленькие залы (до 60 мест включительно) продаются по единой цене.
//! В больших залах передняя половина рядов дороже задней; граница —
//! целочисленная половина числа рядов.

/// Вместимость, до которой весь зал продается по единой цене.
pub const SMALL_ROOM_CAPACITY: usize = 60;
/// Цена мест передней половины (и всех мест маленького зала).
pub const FRONT_HALF_PRICE: u32 = 10;
/// Цена мест задней половины большого зала.
pub const BACK_HALF_PRICE: u32 = 8;

/// Цена места в ряду `row` (0-based) для зала заданной геометрии.
pub fn price_for_row(row: usize, num_rows: usize, total_seats: usize) -> u32 {
    if total_seats <= SMALL_ROOM_CAPACITY {
        return FRONT_HALF_PRICE;
    }

    if row < num_rows / 2 {
        FRONT_HALF_PRICE
    } else {
        BACK_HALF_PRICE
    }
}
