pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod relay;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};
