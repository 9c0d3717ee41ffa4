//! HTTP boundary for the customer record service.
//!
//! Parses requests, invokes [`CustomerService`] and maps its classified errors
//! onto status codes. No transformation logic lives here.
//!
//! [`CustomerService`]: customer_core_api::CustomerService

pub mod api;
pub mod config;
pub mod state;
pub mod telemetry;

pub use config::{AppConfig, ConfigError};
pub use state::AppState;
