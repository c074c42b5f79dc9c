//! Error types shared across the termalert crates

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures the component and its demo can surface.
///
/// The alert itself never errors observably; these cover the edges around
/// it: terminal acquisition and release, display probing, settings parsing,
/// and the demo's message plumbing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Raw mode, alternate screen, or mouse capture could not be toggled.
    #[error("terminal: {0}")]
    Terminal(String),

    /// The attached terminal rejected a size or pixel-geometry query.
    #[error("display probe: {0}")]
    Display(String),

    /// A settings file exists but cannot be used.
    #[error("cannot use settings from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// The update loop's message channel lost its receiver.
    #[error("message channel closed")]
    ChannelClosed,
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }

    pub fn display(message: impl Into<String>) -> Self {
        Self::Display(message.into())
    }

    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Errors that should abort the demo rather than degrade.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal(_) | Error::ChannelClosed)
    }

    pub fn is_recoverable(&self) -> bool {
        !self.is_fatal()
    }
}

/// Attach a logged context line to an error as it propagates.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Context built lazily, for messages that format something.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::terminal("raw mode refused").to_string(),
            "terminal: raw mode refused"
        );

        let err = Error::config("/home/u/.config/termalert/config.toml", "bad key");
        assert!(err.to_string().contains("config.toml"));
        assert!(err.to_string().contains("bad key"));
    }

    #[test]
    fn test_io_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_fatal_split() {
        assert!(Error::terminal("no tty").is_fatal());
        assert!(Error::ChannelClosed.is_fatal());
        assert!(Error::display("no pixel report").is_recoverable());
        assert!(!Error::display("no pixel report").is_fatal());
    }

    #[test]
    fn test_result_ext_context() {
        let failed: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = failed.context("opening settings").unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let ok: std::result::Result<u8, std::io::Error> = Ok(7);
        assert_eq!(ok.with_context(|| "unused".to_string()).unwrap(), 7);
    }
}
