use thiserror::Error;

pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// A lexical error. Scanning stops at the first one.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScanError {
    #[error("Unexpected character.")]
    UnexpectedCharacter { line: usize, character: char },
    #[error("Unterminated string.")]
    UnterminatedString { line: usize },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::UnterminatedString { line } => *line,
        }
    }

    /// Render the diagnostic the way the host prints it, `[line N] Error: message`.
    pub fn report(&self) -> String {
        format!("[line {}] Error: {self}", self.line())
    }
}
