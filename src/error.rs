// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Errors shared by the sorts, the playback engine and the front end.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An unknown algorithm or pivot name, or an input the algorithm
    /// cannot accept. Always reported before anything is mutated.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A merge step produced something that is not a bijection.
    /// This is a bug in the merge, never a user error.
    #[error("invalid permutation: {perm:?}")]
    InvalidPermutation { perm: Vec<usize> },

    /// The renderer failed while drawing a frame.
    #[error("render failed: {0}")]
    Render(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Error {
        return Error::InvalidArgument {
            message: message.into(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_is_displayed() {
        let error = Error::invalid("unknown pivot `fifth`");
        assert_eq!(error.to_string(), "invalid argument: unknown pivot `fifth`");
    }

    #[test]
    fn render_error_keeps_source() {
        let error = Error::Render(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        let source = std::error::Error::source(&error).expect("has source");
        assert_eq!(source.to_string(), "closed");
    }
}
