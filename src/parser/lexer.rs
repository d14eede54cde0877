//! Lexer (tokenizer) for HOL source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Segmentation is driven by the [`Automaton`]; a finished lexeme is then
//! classified by [`classify`]. The lexer never fails: text that matches no
//! token shape comes out as [`TokenKind::Unknown`] and is left for the parser
//! to reject.

use std::collections::VecDeque;
use std::fmt;
use std::str::Chars;

use log::trace;

use super::ast::SourceLocation;
use super::config::LexerConfig;
use super::dfa::{Automaton, State};

/// Token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    Operator,
    Delimiter,
    Unknown,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// Tokens are produced once by the lexer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    /// True if this token has the given kind and literal text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Location of the character just past this token.
    pub fn end_location(&self) -> SourceLocation {
        SourceLocation::new(
            self.location.line,
            self.location.column + self.text.chars().count(),
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.text, self.kind)
    }
}

/// Classify a completed lexeme.
///
/// Priority: keyword, identifier, number, operator, otherwise unknown.
pub fn classify(lexeme: &str, config: &LexerConfig) -> TokenKind {
    if config.is_keyword(lexeme) {
        TokenKind::Keyword
    } else if is_identifier(lexeme, config) {
        TokenKind::Identifier
    } else if is_number(lexeme, config) {
        TokenKind::Number
    } else if config.is_operator(lexeme) {
        TokenKind::Operator
    } else {
        TokenKind::Unknown
    }
}

fn is_identifier(lexeme: &str, config: &LexerConfig) -> bool {
    if lexeme.is_empty() || !lexeme.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    match config.max_identifier_len() {
        Some(max) => lexeme.len() <= max,
        None => true,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_number(lexeme: &str, config: &LexerConfig) -> bool {
    if is_digits(lexeme) {
        return true;
    }
    if !config.decimal_numbers() {
        return false;
    }
    match lexeme.split_once('.') {
        Some((whole, frac)) => is_digits(whole) && is_digits(frac),
        None => false,
    }
}

/// Streaming lexer over a source string.
///
/// Implements [`Iterator`], so the parser side can pull tokens lazily;
/// [`Lexer::tokenize`] collects the whole stream.
pub struct Lexer<'a> {
    input: Chars<'a>,
    config: &'a LexerConfig,
    automaton: Automaton<'a>,
    pending: String,
    pending_start: SourceLocation,
    ready: VecDeque<Token>,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str, config: &'a LexerConfig) -> Self {
        Self::starting_at_line(input, config, 1)
    }

    /// Create a lexer whose first line is numbered `line`.
    ///
    /// Used to scan a file one line at a time while keeping positions
    /// relative to the whole file.
    pub fn starting_at_line(input: &'a str, config: &'a LexerConfig, line: usize) -> Self {
        Self {
            input: input.chars(),
            config,
            automaton: Automaton::new(config),
            pending: String::new(),
            pending_start: SourceLocation::new(line, 1),
            ready: VecDeque::new(),
            line,
            column: 0,
            finished: false,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(self) -> Vec<Token> {
        self.collect()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    fn scan_char(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.flush();
                self.line += 1;
                self.column = 0;
                return;
            }
            ' ' | '\t' | '\r' => {
                self.column += 1;
                self.flush();
                return;
            }
            _ => self.column += 1,
        }

        loop {
            match self.automaton.transition(ch, &self.pending) {
                State::Done => {
                    // Pending lexeme is complete; re-feed `ch` from Start.
                    self.flush();
                }
                State::InDelimiter => {
                    let location = self.current_location();
                    self.emit(Token::new(TokenKind::Delimiter, ch.to_string(), location));
                    self.automaton.reset();
                    return;
                }
                _ => {
                    if self.pending.is_empty() {
                        self.pending_start = self.current_location();
                    }
                    self.pending.push(ch);
                    return;
                }
            }
        }
    }

    /// Classify and emit the pending lexeme, if any, and reset the automaton.
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            let kind = classify(&text, self.config);
            self.emit(Token::new(kind, text, self.pending_start));
        }
        self.automaton.reset();
    }

    fn emit(&mut self, token: Token) {
        trace!("token {} at {}", token, token.location);
        self.ready.push_back(token);
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.ready.is_empty() && !self.finished {
            match self.input.next() {
                Some(ch) => self.scan_char(ch),
                None => {
                    self.flush();
                    self.finished = true;
                }
            }
        }
        self.ready.pop_front()
    }
}
