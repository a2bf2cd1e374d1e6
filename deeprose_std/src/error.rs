use deeprose_util::io::IoErrorWithPath;
use std::fmt::{Display, Formatter};

#[must_use]
#[derive(Debug)]
pub enum EmbedError {
    /// The stdlib source could not be opened or read.
    Input(IoErrorWithPath),
    /// The header could not be created or written.
    Output(IoErrorWithPath),
}

pub type EmbedResult<T> = Result<T, EmbedError>;

impl EmbedError {
    pub fn io_error(&self) -> &IoErrorWithPath {
        match self {
            EmbedError::Input(e) | EmbedError::Output(e) => e,
        }
    }
}

impl Display for EmbedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedError::Input(e) => write!(f, "failed to read stdlib source {e}"),
            EmbedError::Output(e) => write!(f, "failed to write header {e}"),
        }
    }
}

impl std::error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}
