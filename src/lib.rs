pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod handler;
pub mod invocation_log;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod utils;
