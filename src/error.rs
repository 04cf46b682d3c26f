//! Error types for the console driver.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the external collaborators. The simulation itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
