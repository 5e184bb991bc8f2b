use thiserror::Error;

/// Uniform error taxonomy across all tools.
///
/// Every binary catches these at top level and surfaces them as
/// `{"ok": false, "error": ...}` with exit code 1; none escape as panics.
/// The Display strings are part of the CLI contract (automated callers match
/// on them), so changes here are breaking.
#[derive(Debug, Error)]
pub enum WinctlError {
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Window not found: {0}")]
    WindowNotFound(String),

    #[error("Window has zero size: {width}x{height}")]
    ZeroSizeWindow { width: i32, height: i32 },

    #[error("All capture methods failed")]
    CaptureFailed,

    #[error("PNG encoding failed: {0}")]
    EncoderUnavailable(String),

    /// Input-synthesis collaborator failure, reported verbatim.
    #[error("{0}")]
    InputSynthesisFailed(String),

    #[error("Failed to launch console: {0}")]
    LaunchFailed(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WinctlError>;
