pub mod config;
pub mod error;
pub mod models;
pub mod venue;

use tracing::info;

// Shared state для одной сессии работы с залом
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::Config,
    pub venue: venue::Venue,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        let venue = venue::Venue::new(&config.venue.rows);
        info!(
            "Venue initialized: {} rows, {} seats",
            venue.row_count(),
            venue.total_seats()
        );
        Self { config, venue }
    }
}
