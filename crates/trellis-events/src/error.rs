//! Event and host error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Cross-origin history update rejected: {0}")]
    CrossOrigin(String),
}
