pub mod config;
pub mod console;
pub mod controllers;
pub mod models;
pub mod services;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub room: models::CinemaRoom,
    pub config: config::Config,
}

impl AppState {
    pub fn new(room: models::CinemaRoom, config: config::Config) -> Self {
        Self { room, config }
    }
}
