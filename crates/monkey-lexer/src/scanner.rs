//! The Monkey scanner.
//! Monkey 扫描器。

use monkey_common::Span;
use monkey_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use tracing::{debug, trace};

use crate::token::{Token, TokenKind};
use crate::KeywordTable;

/// The Monkey scanner.
/// Monkey 扫描器。
///
/// Converts source code into a sequence of tokens, one byte at a time.
/// 逐字节地将源代码转换为 token 序列。
pub struct Scanner<'src> {
    /// Source text being scanned
    /// 正在扫描的源码
    source: &'src str,
    /// Index of the byte currently being examined
    /// 当前正在查看的字节的位置
    position: usize,
    /// Index of the next byte to read, always `position + 1`
    /// 下一个要读取的字节位置，总是 `position + 1`
    read_position: usize,
    /// The byte at `position`, or `None` once the input is exhausted
    /// `position` 处的字节；输入耗尽后为 `None`
    ch: Option<u8>,
    /// Reserved words recognised in identifier runs
    /// 标识符中识别的保留字
    keywords: &'src KeywordTable,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner using the standard keyword table.
    /// 使用标准关键字表创建新的扫描器。
    pub fn new(source: &'src str) -> Self {
        Self::with_keywords(source, KeywordTable::standard())
    }

    /// Create a new scanner with a custom keyword table.
    /// 使用自定义关键字表创建新的扫描器。
    pub fn with_keywords(source: &'src str, keywords: &'src KeywordTable) -> Self {
        let mut scanner = Self {
            source,
            position: 0,
            read_position: 0,
            ch: None,
            keywords,
        };
        scanner.read_char();
        scanner
    }

    /// Scan the entire source and return tokens and diagnostics.
    /// 扫描整个源代码，返回 token 列表和诊断信息。
    ///
    /// The token list ends with exactly one `Eof`. Every `Illegal` token
    /// gets one diagnostic.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();

        loop {
            let token = self.next_token();
            if token.kind == TokenKind::Illegal {
                // An illegal token is one byte, the one just consumed
                // 非法 token 只有一个字节，即刚刚消耗的字节
                let byte = self.source.as_bytes()[self.position - 1];
                diagnostics.push(illegal_character(byte, &token));
            }
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            diagnostics = diagnostics.len(),
            "tokenized source"
        );
        (tokens, diagnostics)
    }

    /// Produce the next token. Returns `Eof` forever once the input is
    /// exhausted.
    /// 生成下一个 token。输入耗尽后始终返回 `Eof`。
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(kind = %token.kind, literal = %token.literal, span = ?token.span, "token");
        token
    }

    fn scan_token(&mut self) -> Token {
        // Skip whitespace - 跳过空白字符
        self.skip_whitespace();

        let start = self.position;

        // Check for end of input - 检查是否到达输入末尾
        let Some(ch) = self.ch else {
            return Token::new(TokenKind::Eof, "", Span::point(self.source.len()));
        };

        let kind = match ch {
            // Single character tokens - 单字符 token
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Asterisk,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,

            // Assign or equals - 赋值或等于
            b'=' => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }

            // Bang or not-equals - 感叹号或不等于
            b'!' => {
                if self.peek_char() == Some(b'=') {
                    self.read_char();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }

            // Runs consume themselves and skip the trailing advance
            // 连续字节会自行前进，因此跳过末尾的前进
            b if is_letter(b) => return self.identifier(),
            b if is_digit(b) => return self.number(),

            _ => {
                debug!(byte = ch, position = start, "illegal byte");
                TokenKind::Illegal
            }
        };

        // `read_position` is one past the last byte of the token here
        // 此时 `read_position` 指向 token 最后一个字节之后
        let end = self.read_position;
        let literal = String::from_utf8_lossy(&self.source.as_bytes()[start..end]).into_owned();
        self.read_char();
        Token::new(kind, literal, Span::from_usize(start, end))
    }

    /// Advance to the next byte.
    /// 前进到下一个字节。
    fn read_char(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Peek at the next byte without consuming it.
    /// 查看下一个字节但不消耗它。
    fn peek_char(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_position).copied()
    }

    /// Skip whitespace bytes.
    /// 跳过空白字节。
    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.read_char();
        }
    }

    /// Consume a maximal run of bytes matching `pred`, starting at the
    /// current byte.
    /// 消耗从当前字节开始、满足 `pred` 的最长字节序列。
    fn read_run(&mut self, pred: fn(u8) -> bool) -> (&'src str, Span) {
        let source = self.source;
        let start = self.position;
        while self.ch.is_some_and(pred) {
            self.read_char();
        }
        // Both ends sit next to ASCII bytes, so they are char boundaries.
        let text = &source[start..self.position];
        (text, Span::from_usize(start, self.position))
    }

    /// Scan an identifier or keyword.
    /// 扫描标识符或关键字。
    fn identifier(&mut self) -> Token {
        let (text, span) = self.read_run(is_letter);
        Token::new(self.keywords.lookup(text), text, span)
    }

    /// Scan an integer literal.
    /// 扫描整数字面量。
    fn number(&mut self) -> Token {
        let (text, span) = self.read_run(is_digit);
        Token::new(TokenKind::Int, text, span)
    }

}

/// Build the diagnostic for an illegal token.
/// 为非法 token 构建诊断信息。
fn illegal_character(byte: u8, token: &Token) -> Diagnostic {
    Diagnostic::error(
        DiagnosticKind::Lexer,
        token.span,
        format!("illegal character '{}'", byte.escape_ascii()),
    )
    .with_code(ErrorCode::IllegalCharacter)
    .with_label(Label::new(token.span, "not part of any token"))
}

/// Letters and underscore start and continue identifiers.
pub(crate) fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = Scanner::new(source).tokenize();
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_construction_reads_first_byte() {
        let scanner = Scanner::new("let");
        assert_eq!(scanner.ch, Some(b'l'));
        assert_eq!(scanner.position, 0);
        assert_eq!(scanner.read_position, 1);
    }

    #[test]
    fn test_construction_empty_source() {
        let scanner = Scanner::new("");
        assert_eq!(scanner.ch, None);
        assert_eq!(scanner.position, 0);
        assert_eq!(scanner.read_position, 1);
    }

    #[test]
    fn test_read_char_keeps_cursor_invariant() {
        let mut scanner = Scanner::new("ab");
        for expected in [Some(b'b'), None, None] {
            scanner.read_char();
            assert_eq!(scanner.ch, expected);
            assert_eq!(scanner.read_position, scanner.position + 1);
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let scanner = Scanner::new("=!");
        assert_eq!(scanner.peek_char(), Some(b'!'));
        assert_eq!(scanner.peek_char(), Some(b'!'));
        assert_eq!(scanner.ch, Some(b'='));
        assert_eq!(scanner.position, 0);
    }

    #[test]
    fn test_peek_at_end() {
        let scanner = Scanner::new("=");
        assert_eq!(scanner.peek_char(), None);
    }

    #[test]
    fn test_run_stops_before_next_byte() {
        let mut scanner = Scanner::new("abc;");
        let token = scanner.next_token();
        assert_eq!(token.literal, "abc");
        assert_eq!(scanner.ch, Some(b';'));
        assert_eq!(scanner.position, 3);
    }

    #[test]
    fn test_double_char_operator_advances_past_both() {
        let mut scanner = Scanner::new("==1");
        let token = scanner.next_token();
        assert_eq!(token.kind, TokenKind::Eq);
        assert_eq!(token.span, Span::from_usize(0, 2));
        assert_eq!(scanner.ch, Some(b'1'));
    }

    #[test]
    fn test_embedded_nul_is_illegal() {
        assert_eq!(
            kinds("a\0b"),
            vec![
                TokenKind::Ident,
                TokenKind::Illegal,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_non_ascii_bytes_are_illegal_one_by_one() {
        let (tokens, diagnostics) = Scanner::new("é").tokenize();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].literal, "\u{FFFD}");
        assert_eq!(tokens[0].span, Span::from_usize(0, 1));
        assert_eq!(tokens[1].span, Span::from_usize(1, 2));
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "illegal character '\\xc3'");
    }

    #[test]
    fn test_illegal_diagnostic() {
        let (_, diagnostics) = Scanner::new("x @ y").tokenize();
        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.message, "illegal character '@'");
        assert_eq!(diag.code, Some(ErrorCode::IllegalCharacter));
        assert_eq!(diag.span, Span::from_usize(2, 3));
    }

    #[test]
    fn test_literal_follows_cursor() {
        let mut scanner = Scanner::new("a != b");
        scanner.next_token();
        let token = scanner.next_token();
        assert_eq!(token.literal, "!=");
        assert_eq!(token.span, Span::from_usize(2, 4));
        assert_eq!(scanner.position, 4);
        assert_eq!(scanner.read_position, 5);
    }

    #[test]
    fn test_illegal_diagnostic_uses_consumed_byte() {
        let (tokens, diagnostics) = Scanner::new("1 # 2 $").tokenize();
        let illegal: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Illegal)
            .map(|t| t.literal.as_str())
            .collect();
        assert_eq!(illegal, vec!["#", "$"]);
        assert_eq!(diagnostics[0].message, "illegal character '#'");
        assert_eq!(diagnostics[1].message, "illegal character '$'");
        assert_eq!(diagnostics[1].span, Span::from_usize(6, 7));
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
        for _ in 0..3 {
            let token = scanner.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
            assert_eq!(token.span, Span::point(1));
        }
    }
}
