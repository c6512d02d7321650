//! Lexical analysis for Monkey.
//! Monkey 词法分析模块。
//!
//! This crate provides the scanner that converts source code into tokens.
//! 本 crate 提供扫描器，将源代码转换为 token 序列。
//!
//! ```
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().literal, "five");
//! ```

mod error;
mod keywords;
mod scanner;
mod token;

pub use error::{KeywordError, LiteralError};
pub use keywords::KeywordTable;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
