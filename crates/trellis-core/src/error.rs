//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("History API is already patched on this page")]
    AlreadyPatched,

    #[error("Navigation error: {0}")]
    Navigation(#[from] trellis_navigation::NavigationError),

    #[error("Host error: {0}")]
    Events(#[from] trellis_events::EventError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Router not initialized")]
    NotInitialized,
}
