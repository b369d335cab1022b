//! # Errors

use thiserror::Error;

/// # Error
///
/// Errors produced by the engine core and its host loop.
#[derive(Debug, Error)]
pub enum Error {
    /// A component, vertex, or pool slot was accessed outside its valid range.
    #[error("invalid index {index}, valid indexes are 0..{len}")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// Number of addressable items.
        len: usize,
    },

    /// A vector component was accessed by a name other than `x` or `y`.
    #[error("invalid axis '{0}', valid axes are 'x' and 'y'")]
    InvalidAxis(char),

    /// A zero-length vector has no direction.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// The host event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The host window could not be created.
    #[error("window error: {0}")]
    Window(#[from] winit::error::OsError),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
