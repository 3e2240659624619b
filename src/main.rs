use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_room::{
    config::Config,
    console::Console,
    controllers,
    models::CinemaRoom,
    AppState,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // stdout занят консольным протоколом, логи уходят в stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Cinema Room Manager");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    // Размеры зала: либо из окружения, либо из стартовых вопросов
    let (num_rows, seats_per_row) = match config.room.preset() {
        Some(preset) => preset,
        None => (
            console.prompt_usize("Enter the number of rows:")?,
            console.prompt_usize("Enter the number of seats in each row:")?,
        ),
    };

    let room = CinemaRoom::new(num_rows, seats_per_row);
    info!(
        "Cinema room initialized: {} rows x {} seats per row, {} seats total",
        room.num_rows(),
        room.seats_per_row(),
        room.total_seats()
    );

    let mut state = AppState::new(room, config);
    controllers::run(&mut state, &mut console)?;

    info!("Cinema Room Manager stopped");
    Ok(())
}
