use std::path::PathBuf;
use thiserror::Error;

/// Convenient result type for `fbtool-lib`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("flashing tool not found or not executable: {}", path.display())]
    ToolUnavailable { path: PathBuf },

    #[error("mismatching image and device: expected `{expected}`, device reports `{actual}`")]
    DeviceMismatch { expected: String, actual: String },

    #[error("flashing declined by user")]
    UserDeclined,

    #[error("`{action}` failed (exit={code:?}): {output}")]
    ActionFailed {
        action: String,
        code: Option<i32>,
        output: String,
    },
}
