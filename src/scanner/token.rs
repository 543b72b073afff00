use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

use crate::common::KEYWORDS_COUNT;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, ToPrimitive)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen = 0,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // Literals.
    Identifier,
    String,
    Number,
    // Keywords.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

/// Reserved words, in the same order as their [`TokenKind`] variants.
pub const KEYWORDS: [(&str, TokenKind); KEYWORDS_COUNT] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

impl TokenKind {
    /// Stable numeric code of this kind, for consumers that store kinds compactly.
    pub fn code(self) -> u8 {
        // every variant fits in a u8 because of `repr(u8)`
        self.to_u8().unwrap_or(u8::MAX)
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_u8(code)
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Fun => "FUN",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value carried by STRING and NUMBER tokens.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Literal<'source> {
    String(&'source str),
    Number(f64),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(text) => f.write_str(text),
            Literal::Number(number) => write!(f, "{number:?}"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Token<'source> {
    pub kind: TokenKind,
    pub lexeme: &'source str,
    pub literal: Option<Literal<'source>>,
    pub line: usize,
}

impl<'source> Token<'source> {
    pub fn new(kind: TokenKind, lexeme: &'source str, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal: None,
            line,
        }
    }

    pub fn with_literal(mut self, literal: Literal<'source>) -> Self {
        self.literal = Some(literal);
        self
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(TokenKind::LeftParen.code(), 0);
        assert_eq!(TokenKind::Star.code(), 10);
        assert_eq!(TokenKind::LessEqual.code(), 18);
        assert_eq!(TokenKind::Number.code(), 21);
        assert_eq!(TokenKind::While.code(), 37);
        assert_eq!(TokenKind::from_code(30), Some(TokenKind::Or));
        assert_eq!(TokenKind::from_code(38), None);
    }

    #[test]
    fn every_code_maps_back_to_its_kind() {
        for code in 0..=TokenKind::While.code() {
            let kind = TokenKind::from_code(code).expect("code in range");
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn keyword_table_follows_variant_order() {
        for (offset, (word, kind)) in KEYWORDS.into_iter().enumerate() {
            assert_eq!(kind.code(), TokenKind::And.code() + offset as u8);
            assert_eq!(kind.name().to_lowercase(), word);
        }
    }

    #[test]
    fn display_matches_dump_format() {
        let number = Token::new(TokenKind::Number, "12.5", 1).with_literal(Literal::Number(12.5));
        assert_eq!(number.to_string(), "NUMBER 12.5 12.5");
        let whole = Token::new(TokenKind::Number, "10", 1).with_literal(Literal::Number(10.0));
        assert_eq!(whole.to_string(), "NUMBER 10 10.0");
        let string = Token::new(TokenKind::String, "\"hi\"", 1).with_literal(Literal::String("hi"));
        assert_eq!(string.to_string(), "STRING \"hi\" hi");
        assert_eq!(
            Token::new(TokenKind::BangEqual, "!=", 1).to_string(),
            "BANG_EQUAL != null"
        );
    }
}
