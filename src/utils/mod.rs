pub mod display_name;

pub use display_name::{DEFAULT_NAME, to_display_name};
