// Error Module
// Failures surfaced by text generation.

use std::io;

/// Errors returned by [`crate::Generator::generate`]
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The output sink rejected a write. Text written before the failure stays written.
    #[error("failed to write generated text: {0}")]
    Write(#[from] io::Error),
}

impl GenerateError {
    /// The underlying I/O error kind
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            GenerateError::Write(err) => err.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_message() {
        let err = GenerateError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(
            err.to_string(),
            "failed to write generated text: pipe closed"
        );
    }
}
