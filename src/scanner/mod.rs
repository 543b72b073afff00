use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use ahash::AHasher;
use tracing::debug;

use crate::common::BYTES_PER_TOKEN_ESTIMATE;
use crate::config::ScannerConfig;
use crate::error::{ScanError, ScanResult};
use token::KEYWORDS;
pub use token::{Literal, Token, TokenKind};

pub mod token;

/// Single-use scanner over a fully buffered source text.
///
/// `start` is the first byte of the lexeme being recognised and `current` the next unread
/// byte, so `start <= current <= source.len()` holds throughout. `line` counts every `\n`
/// consumed, including those inside comments and string literals.
pub struct Scanner<'source> {
    identifiers: HashMap<&'static str, TokenKind, BuildHasherDefault<AHasher>>,
    config: ScannerConfig,
    source: &'source str,
    tokens: Vec<Token<'source>>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    pub fn with_config(source: &'source str, config: ScannerConfig) -> Self {
        Self {
            identifiers: KEYWORDS.into_iter().collect(),
            config,
            source,
            tokens: Vec::with_capacity(source.len() / BYTES_PER_TOKEN_ESTIMATE),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Drain the whole source. Stops at the first lexical error, in which case the
    /// tokens recognised so far are dropped along with the scanner.
    pub fn scan_tokens(mut self) -> ScanResult<Vec<Token<'source>>> {
        debug!(bytes = self.source.len(), "scanning source");
        while !self.is_at_end() {
            self.start = self.current;
            if let Err(err) = self.scan_token() {
                debug!(
                    line = err.line(),
                    scanned = self.tokens.len(),
                    "scan aborted: {err}"
                );
                return Err(err);
            }
        }
        debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "scan finished"
        );
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> ScanResult<()> {
        let byte = self.advance();
        match byte {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::BangEqual),
                false => self.add_token(TokenKind::Bang),
            },
            b'=' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::EqualEqual),
                false => self.add_token(TokenKind::Equal),
            },
            b'<' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::LessEqual),
                false => self.add_token(TokenKind::Less),
            },
            b'>' => match self.is_match(b'=') {
                true => self.add_token(TokenKind::GreaterEqual),
                false => self.add_token(TokenKind::Greater),
            },
            b'/' => match self.is_match(b'/') {
                true => self.skip_line_comment(),
                false => self.add_token(TokenKind::Slash),
            },
            b' ' | b'\r' | b'\t' => (),
            b'\n' => self.line += 1,
            b'"' => self.string()?,
            b if is_digit(b) => self.number(),
            // the `r` is left for the next lexeme
            b'o' if self.config.or_shortcut && self.peek() == Some(b'r') => {
                self.add_token(TokenKind::Or)
            }
            b if is_alpha(b) => self.identifier(),
            _ => return Err(self.unexpected_character()),
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        byte
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current + 1).copied()
    }

    fn is_match(&mut self, byte: u8) -> bool {
        if self.peek() != Some(byte) {
            return false;
        }
        self.current += 1;
        true
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push(Token::new(kind, self.lexeme(), self.line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal<'source>) {
        self.push(Token::new(kind, self.lexeme(), self.line).with_literal(literal));
    }

    fn push(&mut self, token: Token<'source>) {
        #[cfg(feature = "debug_trace")]
        tracing::trace!(line = token.line, "{token}");
        self.tokens.push(token);
    }

    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|byte| byte != b'\n') {
            self.current += 1;
        }
    }

    fn string(&mut self) -> ScanResult<()> {
        while let Some(byte) = self.peek() {
            if byte == b'"' {
                break;
            }
            if byte == b'\n' {
                self.line += 1;
            }
            self.current += 1;
        }
        if self.is_at_end() {
            return Err(ScanError::UnterminatedString { line: self.line });
        }
        // closing quote
        self.current += 1;
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::String(value));
        Ok(())
    }

    fn number(&mut self) {
        self.skip_digits();
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(is_digit) {
            self.current += 1;
            self.skip_digits();
        }
        let value = self
            .lexeme()
            .parse::<f64>()
            .expect("digits with at most one inner '.' always parse as f64");
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.current += 1;
        }
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.current += 1;
        }
        let kind = match self.identifiers.get(self.lexeme()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };
        self.add_token(kind);
    }

    fn unexpected_character(&self) -> ScanError {
        let character = self.source[self.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        ScanError::UnexpectedCharacter {
            line: self.line,
            character,
        }
    }
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_alphanumeric(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte)
}
