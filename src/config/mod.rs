use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub venue: VenueConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Конфигурация зала: длины рядов в порядке следования
#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
    pub rows: Vec<usize>,
}

impl Config {
    /// Подхватывает .env (если есть) и читает конфигурацию из окружения.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT")
                    .unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seating_system=debug".to_string()),
            },
            venue: VenueConfig {
                rows: parse_rows(
                    &env::var("VENUE_ROWS").unwrap_or_else(|_| "12,12,12,10,10".to_string()),
                ),
            },
        }
    }
}

// VENUE_ROWS имеет вид "12,12,10" - длина каждого ряда по порядку
fn parse_rows(raw: &str) -> Vec<usize> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse()
                .expect("VENUE_ROWS must be a comma-separated list of row sizes")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rows_accepts_spaces_and_zeros() {
        assert_eq!(parse_rows("12, 10,8"), vec![12, 10, 8]);
        assert_eq!(parse_rows("0,3,0"), vec![0, 3, 0]);
        assert_eq!(parse_rows("5"), vec![5]);
    }

    #[test]
    #[should_panic(expected = "VENUE_ROWS")]
    fn parse_rows_rejects_garbage() {
        parse_rows("12,abc");
    }
}
