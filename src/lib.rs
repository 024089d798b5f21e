//! Agricultural advisory backend: signup/login, reference data, advisories, contact form, price trends.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod prices;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use prices::PriceTable;
pub use routes::{api_routes, app_router, common_routes};
pub use state::AppState;
pub use store::Database;
