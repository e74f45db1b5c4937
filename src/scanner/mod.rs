use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::sync::LazyLock;

use ahash::AHasher;

use crate::error::ErrorReporter;
use token::{Literal, Token, TokenKind};

pub mod token;

static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind, BuildHasherDefault<AHasher>>> =
    LazyLock::new(|| {
        HashMap::from_iter([
            ("and", TokenKind::And),
            ("class", TokenKind::Class),
            ("else", TokenKind::Else),
            ("false", TokenKind::False),
            ("for", TokenKind::For),
            ("func", TokenKind::Func),
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
        ])
    });

pub struct Scanner<'source> {
    source: &'source str,
    tokens: Vec<Token<'source>>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source, reporting lexical errors through `reporter`
    /// without aborting. The returned sequence always ends with a single
    /// EOF token carrying the final line number.
    pub fn scan_tokens(mut self, reporter: &mut ErrorReporter) -> Vec<Token<'source>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(reporter);
        }
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: "",
            literal: Literal::None,
            line: self.line,
        });
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut ErrorReporter) {
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
                // comment runs to the end of the line, the newline stays
                true => {
                    while self.peek().is_some_and(|byte| byte != b'\n') {
                        self.current += 1;
                    }
                }
                false => self.add_token(TokenKind::Slash),
            },
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.scan_string(reporter),
            byte if is_digit(byte) => self.scan_number(),
            byte if is_alpha(byte) => self.scan_identifier(),
            _ => reporter.process(self.line, "Unexpected character."),
        }
    }

    fn scan_string(&mut self, reporter: &mut ErrorReporter) {
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
            reporter.process(self.line, "Unterminated string.");
            return;
        }
        self.current += 1;
        let text = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::String(text));
    }

    fn scan_number(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.current += 1;
        }
        // consume the dot only when a fractional digit follows, so a
        // trailing `.` is left to become its own token
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(is_digit) {
            self.current += 1;
            while self.peek().is_some_and(is_digit) {
                self.current += 1;
            }
        }
        let value = self
            .lexeme()
            .parse()
            .expect("lexeme holds only digits and at most one interior dot");
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn scan_identifier(&mut self) {
        while self
            .peek()
            .is_some_and(|byte| is_digit(byte) || is_alpha(byte))
        {
            self.current += 1;
        }
        let kind = match KEYWORDS.get(self.lexeme()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };
        self.add_token(kind);
    }

    fn lexeme(&self) -> &'source str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, Literal::None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal<'source>) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal,
            line: self.line,
        });
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        byte
    }

    fn is_match(&mut self, byte: u8) -> bool {
        if self.peek() != Some(byte) {
            return false;
        }
        self.current += 1;
        true
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current + 1).copied()
    }
}

fn is_digit(byte: u8) -> bool {
    b'0' <= byte && byte <= b'9'
}

fn is_alpha(byte: u8) -> bool {
    (b'a' <= byte && byte <= b'z') || (b'A' <= byte && byte <= b'Z') || byte == b'_'
}
