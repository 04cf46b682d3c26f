// Domain layer - Core business logic
pub mod domain;

// Application layer - Simulation engine and driver loop
pub mod application;

// Infrastructure layer - configuration, errors, console output
pub mod config;
pub mod error;
pub mod rendering;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets, Algorithm};
pub use application::Simulation;
pub use config::Config;
pub use error::{Error, Result};
pub use rendering::{Renderer, TerminalRenderer};
