pub mod error_handler;
pub mod handlers;
pub mod routes;
