//! Error types surfaced at the upload boundary and by the view state machine.

use crate::session::ViewState;
use thiserror::Error;

/// Reasons an upload is rejected. None of these change the session state.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The picker or drop delivered nothing.
    #[error("No file was selected")]
    NoFile,

    /// More than one file was dropped at once.
    #[error("Please upload a single image ({count} files were provided)")]
    MultipleFiles { count: usize },

    /// MIME type does not start with `image/`.
    #[error("Please upload an image file (JPEG, PNG)")]
    InvalidFileType { mime: String },

    /// File exceeds the configured size limit.
    #[error("File size should be less than {}MB", .limit / (1024 * 1024))]
    FileTooLarge { size: u64, limit: u64 },

    /// The bytes claim to be an image but could not be decoded.
    #[error("The image could not be read: {0}")]
    DecodeFailure(#[from] image::ImageError),
}

/// Errors returned by [`crate::Session`] operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The requested action is not available in the current view state.
    #[error("Cannot {action} while {state:?}")]
    InvalidTransition {
        action: &'static str,
        state: ViewState,
    },
}
