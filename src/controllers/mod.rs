pub mod bookings;
pub mod seating;
pub mod statistics;

use std::io::{BufRead, Write};

use tracing::info;

use crate::console::{Console, ConsoleError};
use crate::AppState;

// Пункты главного меню в фиксированном порядке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    ShowSeats,
    BuyTicket,
    Statistics,
}

impl MenuAction {
    const ALL: [MenuAction; 4] = [
        MenuAction::Exit,
        MenuAction::ShowSeats,
        MenuAction::BuyTicket,
        MenuAction::Statistics,
    ];

    fn description(self) -> &'static str {
        match self {
            MenuAction::Exit => "Exit",
            MenuAction::ShowSeats => "Show the seats",
            MenuAction::BuyTicket => "Buy a ticket",
            MenuAction::Statistics => "Statistics",
        }
    }

    fn from_selection(selection: i64) -> Option<MenuAction> {
        match selection {
            0 => Some(MenuAction::Exit),
            1 => Some(MenuAction::ShowSeats),
            2 => Some(MenuAction::BuyTicket),
            3 => Some(MenuAction::Statistics),
            _ => None,
        }
    }
}

/// Главный цикл: показывает меню и выполняет выбранное действие,
/// пока пользователь не выберет Exit.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    loop {
        render_menu(console)?;

        let selection = console.read_int()?;
        match MenuAction::from_selection(selection) {
            Some(MenuAction::Exit) => {
                info!("Exit selected, shutting down");
                return Ok(());
            }
            Some(MenuAction::ShowSeats) => seating::show_seats(&state.room, console)?,
            Some(MenuAction::BuyTicket) => bookings::buy_ticket(&mut state.room, console)?,
            Some(MenuAction::Statistics) => statistics::show_statistics(&state.room, console)?,
            None => console.write_line("Unknown option!")?,
        }
    }
}

// Exit печатается последним: меню заканчивается выходом
fn render_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
    for (index, action) in MenuAction::ALL.iter().enumerate().skip(1) {
        console.write_line(&format!("{}.  {}", index, action.description()))?;
    }
    console.write_line(&format!("0.  {}", MenuAction::Exit.description()))?;
    Ok(())
}
