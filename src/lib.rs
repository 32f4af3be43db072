pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::{router, AppState};
pub use config::Settings;
pub use core::{ActivityRegistry, InMemoryRegistry};
pub use utils::error::{ActivityError, Result};
