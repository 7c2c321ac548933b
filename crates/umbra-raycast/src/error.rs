//! Error types for scene construction.

use thiserror::Error;

/// Fatal problems with scene input, detected before any pixel is rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Viewport has no pixels.
    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    EmptyViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Viewport corners do not span a plane the viewpoint can look through.
    #[error("degenerate viewport: {0}")]
    DegenerateViewport(String),

    /// Light position is not finite, or brightness is negative or not finite.
    #[error("light {index} is invalid: {reason}")]
    InvalidLight {
        /// Position of the light in the scene's light list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Shape parameters cannot describe a surface.
    #[error("shape {index} is invalid: {reason}")]
    InvalidShape {
        /// Position of the shape in the scene's shape list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
