//! Сквозные сценарии: полный сеанс меню на буферах в памяти,
//! от выбора пункта до выхода, с проверкой точного транскрипта.

use std::io::Cursor;

use cinema_room::config::{AppConfig, Config, RoomConfig};
use cinema_room::console::Console;
use cinema_room::controllers;
use cinema_room::models::CinemaRoom;
use cinema_room::AppState;

const MENU: &str = "1.  Show the seats\n2.  Buy a ticket\n3.  Statistics\n0.  Exit\n";

fn test_config() -> Config {
    Config {
        app: AppConfig {
            environment: "test".to_string(),
            rust_log: "off".to_string(),
        },
        room: RoomConfig {
            num_rows: None,
            seats_per_row: None,
        },
    }
}

fn run_session(num_rows: usize, seats_per_row: usize, input: &str) -> String {
    let room = CinemaRoom::new(num_rows, seats_per_row);
    let mut state = AppState::new(room, test_config());
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());

    controllers::run(&mut state, &mut console).expect("session ends with Exit");

    let (_, bytes) = console.into_parts();
    String::from_utf8(bytes).expect("console output is utf-8")
}

#[test]
fn shows_seats_buys_ticket_and_reports_statistics() {
    // зал 2x2: все места по $10
    let transcript = run_session(2, 2, "1\n2\n1\n1\n1\n3\n0\n");

    let expected = format!(
        "{MENU}\
         Cinema:\n  1 2\n1 S S\n2 S S\n\
         {MENU}\
         Enter a row number:\nEnter a seat number in that row:\nTicket price: $10\n\
         {MENU}\
         Cinema:\n  1 2\n1 B S\n2 S S\n\
         {MENU}\
         Number of purchased tickets: 1\n\
         Percentage: 25.00%\n\
         Current income: $10\n\
         Total income: $40\n\
         {MENU}"
    );
    assert_eq!(transcript, expected);
}

#[test]
fn rebooking_a_seat_reprompts_until_success() {
    let transcript = run_session(2, 2, "2\n1\n1\n2\n1\n1\n1\n2\n0\n");

    let expected = format!(
        "{MENU}\
         Enter a row number:\nEnter a seat number in that row:\nTicket price: $10\n\
         {MENU}\
         Enter a row number:\nEnter a seat number in that row:\n\
         That ticket has already been purchased!\n\
         Enter a row number:\nEnter a seat number in that row:\nTicket price: $10\n\
         {MENU}"
    );
    assert_eq!(transcript, expected);
}

#[test]
fn back_half_of_a_large_room_is_cheaper() {
    // 10x10: 100 мест, ряды 6-10 по $8
    let transcript = run_session(10, 10, "2\n6\n1\n3\n0\n");

    let expected = format!(
        "{MENU}\
         Enter a row number:\nEnter a seat number in that row:\nTicket price: $8\n\
         {MENU}\
         Number of purchased tickets: 1\n\
         Percentage: 1.00%\n\
         Current income: $8\n\
         Total income: $900\n\
         {MENU}"
    );
    assert_eq!(transcript, expected);
}

#[test]
fn out_of_range_coordinates_print_wrong_input() {
    let transcript = run_session(2, 2, "2\n3\n1\n1\n2\n0\n");

    let expected = format!(
        "{MENU}\
         Enter a row number:\nEnter a seat number in that row:\nWrong input!\n\
         Enter a row number:\nEnter a seat number in that row:\nTicket price: $10\n\
         {MENU}"
    );
    assert_eq!(transcript, expected);
}

#[test]
fn unknown_menu_option_is_recoverable() {
    let transcript = run_session(2, 2, "9\n0\n");
    assert_eq!(transcript, format!("{MENU}Unknown option!\n{MENU}"));
}

#[test]
fn garbage_input_is_re_read_everywhere() {
    let transcript = run_session(2, 2, "two\n2\n?\n1\n1\n0\n");

    let expected = format!(
        "{MENU}\
         Please enter a number!\n\
         Enter a row number:\nPlease enter a number!\nEnter a seat number in that row:\n\
         Ticket price: $10\n\
         {MENU}"
    );
    assert_eq!(transcript, expected);
}
