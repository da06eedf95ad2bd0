pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod otel;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use state::AppState;
pub use store::PeopleStore;
