//! Application state and input handling.

pub mod handler;
pub mod state;

pub use handler::Handler;
pub use state::{App, View};
