//! Error codes for Monkey diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    IllegalCharacter,
    IntegerOverflow,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IllegalCharacter => "E0001",
            ErrorCode::IntegerOverflow => "E0002",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::IllegalCharacter => Some(
                "remove the character; only ASCII letters, digits, `_` and operators are allowed",
            ),
            ErrorCode::IntegerOverflow => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
