//! Errors reported by the lexer's helper APIs.
//!
//! Scanning itself never fails: unknown bytes become `Illegal` tokens.

use monkey_common::Span;
use monkey_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

use crate::TokenKind;

/// Errors from building a [`KeywordTable`](crate::KeywordTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    #[error("`{kind}` is not a keyword token kind")]
    NotAKeyword { kind: TokenKind },

    #[error("keyword text {text:?} can never be scanned as an identifier")]
    InvalidText { text: String },

    #[error("keyword {text:?} is already defined")]
    Duplicate { text: String },
}

/// Errors from interpreting a token's literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("expected an integer literal, found `{kind}`")]
    NotAnInteger { kind: TokenKind },

    #[error("integer literal `{literal}` does not fit in 64 bits")]
    Overflow { literal: String },
}

impl LiteralError {
    /// Convert the error into a diagnostic pointing at `span`.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let diagnostic = Diagnostic::error(DiagnosticKind::Literal, span, self.to_string());
        match self {
            LiteralError::Overflow { .. } => diagnostic
                .with_code(ErrorCode::IntegerOverflow)
                .with_label(Label::new(span, "literal out of range"))
                .with_note(format!("the largest integer is {}", i64::MAX)),
            LiteralError::NotAnInteger { .. } => diagnostic,
        }
    }
}
