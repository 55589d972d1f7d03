pub mod client;
pub mod config;
pub mod resources;
pub mod utils;

pub use client::Client;
pub use config::ClientConfig;
pub use utils::error::{OnfleetError, Result};
