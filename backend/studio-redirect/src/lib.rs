// Studio Redirect Function Library

pub mod config;
pub mod handlers;
pub mod telemetry;

pub use config::StudioConfig;
pub use handlers::{function_handler, handle, RedirectRequest, RedirectResponse};
