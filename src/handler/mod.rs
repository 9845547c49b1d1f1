pub mod context;
pub mod health_handler;
pub mod hello_handler;
pub mod ping_handler;
