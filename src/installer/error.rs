/// Failure taxonomy for the staged install flow.
///
/// Every variant renders to the diagnostic string handed back across the
/// binder boundary, naming the stage that failed and wrapping the cause.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InstallError {
    #[error("Failed to get system services: {0}")]
    ServiceResolution(String),
    #[error("Failed to create install session: {0}")]
    SessionCreation(String),
    #[error("Failed to open install session {id}: {reason}")]
    SessionOpen { id: i32, reason: String },
    #[error("Failed to stage {path}: {reason}")]
    Streaming { path: String, reason: String },
    #[error("Failed to commit install session: {0}")]
    Commit(String),
    /// The commit callback died without ever delivering a result.
    #[error("Installation failed: no result from PackageInstaller.")]
    NoResult,
    /// The platform processed the session and reported a failure status.
    #[error("Installation failed with status {status}: {message}")]
    Platform { status: i32, message: String },
}
