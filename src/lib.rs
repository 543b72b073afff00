//! Lexical analysis for the Lox scripting language.
//!
//! [`scan_tokens`] turns a complete source text into the ordered list of [`Token`]s a parser
//! consumes, or the first [`ScanError`] found. No end-of-input token is appended.

pub mod common;
pub mod config;
pub mod error;
pub mod scanner;

pub use config::ScannerConfig;
pub use error::{ScanError, ScanResult};
pub use scanner::{Literal, Scanner, Token, TokenKind};

pub fn scan_tokens(source: &str) -> ScanResult<Vec<Token<'_>>> {
    Scanner::new(source).scan_tokens()
}

pub fn scan_tokens_with(source: &str, config: ScannerConfig) -> ScanResult<Vec<Token<'_>>> {
    Scanner::with_config(source, config).scan_tokens()
}
