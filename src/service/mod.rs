pub mod hello_service;
pub mod ping_service;
