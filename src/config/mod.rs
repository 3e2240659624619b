use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub room: RoomConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Предустановленная геометрия зала; если обе переменные заданы,
// стартовые вопросы о размерах пропускаются
#[derive(Debug, Clone, Deserialize)]
pub struct RoomConfig {
    pub num_rows: Option<usize>,
    pub seats_per_row: Option<usize>,
}

impl RoomConfig {
    pub fn preset(&self) -> Option<(usize, usize)> {
        match (self.num_rows, self.seats_per_row) {
            (Some(num_rows), Some(seats_per_row)) => Some((num_rows, seats_per_row)),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_room=info".to_string()),
            },
            room: RoomConfig {
                num_rows: env::var("CINEMA_ROWS")
                    .ok()
                    .map(|value| value.parse().expect("CINEMA_ROWS must be a valid number")),
                seats_per_row: env::var("CINEMA_SEATS_PER_ROW").ok().map(|value| {
                    value
                        .parse()
                        .expect("CINEMA_SEATS_PER_ROW must be a valid number")
                }),
            },
        }
    }
}
