/// Error taxonomy for the editor
///
/// Every operation that can fail reports one of these four kinds.
/// Each variant carries a fixed one-line message shown to the user;
/// errors are terminal for the action (no retry) and never fatal.

use thiserror::Error;

/// All errors the editor can surface to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    /// An operation needed a photo but none is loaded
    #[error("No photo selected.")]
    NoPhoto,

    /// The picked file could not be decoded, or the transform
    /// could not produce an output
    #[error("Invalid photo format.")]
    InvalidFormat,

    /// An unrecognized failure from a collaborator
    #[error("Unknown error.")]
    Unknown,

    /// The library write or catalog insert failed
    #[error("Failed to save photo.")]
    SaveFailed,
}
