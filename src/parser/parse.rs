//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error types, the cursor helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a recursive descent recognizer with exactly one token of
//! lookahead and no backtracking:
//! - This module: Parser struct, error types, cursor and `expect_*` helpers
//! - `declarations`: `Program`, the `Var` section, and the `Start ... End` block
//! - `statements`: the statement list and the five statement forms
//! - `expressions`: left-associative `+`/`-` expressions and terms
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! Every production returns `Result`; the first violation is propagated with
//! `?` straight back to [`Parser::parse`]. There is no recovery.

use std::fmt;

use log::debug;

use crate::parser::ast::{SourceLocation, SyntaxTree};
use crate::parser::lexer::{Token, TokenKind};

/// What a production was looking for when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Any token of this kind.
    Kind(TokenKind),
    /// A token of this kind with this exact text, e.g. the keyword `End`.
    Literal(TokenKind, &'static str),
    /// A named grammar element, e.g. "statement".
    Element(&'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Literal(_, text) => write!(f, "'{}'", text),
            Expected::Element(name) => f.write_str(name),
        }
    }
}

/// What the parser actually saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token { kind: TokenKind, text: String },
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { kind, text } => write!(f, "'{}' ({})", text, kind),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The offending token matched no token shape at lex time.
    UnclassifiedLexeme,
    UnexpectedToken,
    UnexpectedEndOfInput,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Syntax error at {location}: expected {expected}, found {found}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub expected: Expected,
    pub found: Found,
    pub location: SourceLocation,
}

impl SyntaxError {
    pub(crate) fn at_token(expected: Expected, token: &Token) -> Self {
        let kind = if token.kind == TokenKind::Unknown {
            SyntaxErrorKind::UnclassifiedLexeme
        } else {
            SyntaxErrorKind::UnexpectedToken
        };
        Self {
            kind,
            expected,
            found: Found::Token {
                kind: token.kind,
                text: token.text.clone(),
            },
            location: token.location,
        }
    }

    pub(crate) fn at_end(expected: Expected, location: SourceLocation) -> Self {
        Self {
            kind: SyntaxErrorKind::UnexpectedEndOfInput,
            expected,
            found: Found::EndOfInput,
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == SyntaxErrorKind::UnexpectedEndOfInput
    }
}

/// Recursive descent parser for HOL
pub struct Parser<'t> {
    pub(crate) tokens: &'t [Token],
    pub(crate) position: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse a whole program.
    ///
    /// Consumes the parser; a fresh parser over the same tokens produces a
    /// structurally identical tree.
    pub fn parse(mut self) -> Result<SyntaxTree, SyntaxError> {
        debug!("parsing {} tokens", self.tokens.len());
        let tree = self.parse_program().inspect_err(|e| debug!("{}", e))?;
        if let Some(extra) = self.peek() {
            let err = SyntaxError::at_token(Expected::Element("end of input"), extra);
            debug!("{}", err);
            return Err(err);
        }
        debug!("parse finished");
        Ok(tree)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<&'t Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Location of the current token, or just past the last token at end of input.
    pub(crate) fn current_location(&self) -> SourceLocation {
        match self.peek() {
            Some(token) => token.location,
            None => self
                .tokens
                .last()
                .map(Token::end_location)
                .unwrap_or_else(|| SourceLocation::new(1, 1)),
        }
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn check_literal(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, text))
    }

    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        self.check_literal(TokenKind::Keyword, keyword)
    }

    /// Build the error for the current position.
    pub(crate) fn error(&self, expected: Expected) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError::at_token(expected, token),
            None => SyntaxError::at_end(expected, self.current_location()),
        }
    }

    /// Consume a token of `kind`, or fail.
    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> Result<&'t Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(self.error(Expected::Kind(kind)))
        }
    }

    /// Consume a token of `kind` whose text is exactly `text`, or fail.
    pub(crate) fn expect_literal(
        &mut self,
        kind: TokenKind,
        text: &'static str,
    ) -> Result<&'t Token, SyntaxError> {
        if self.check_literal(kind, text) {
            Ok(self.bump())
        } else {
            Err(self.error(Expected::Literal(kind, text)))
        }
    }

    pub(crate) fn expect_keyword(
        &mut self,
        keyword: &'static str,
    ) -> Result<&'t Token, SyntaxError> {
        self.expect_literal(TokenKind::Keyword, keyword)
    }

    pub(crate) fn expect_delimiter(
        &mut self,
        delimiter: &'static str,
    ) -> Result<&'t Token, SyntaxError> {
        self.expect_literal(TokenKind::Delimiter, delimiter)
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<&'t Token, SyntaxError> {
        self.expect_kind(TokenKind::Identifier)
    }

    /// Advance past a token the caller has already checked.
    fn bump(&mut self) -> &'t Token {
        let token = &self.tokens[self.position];
        self.position += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::config::LexerConfig;
    use crate::parser::lexer::Lexer;

    fn lex(source: &str) -> Vec<Token> {
        let config = LexerConfig::default();
        Lexer::new(source, &config).tokenize()
    }

    #[test]
    fn test_parse_minimal_program() {
        let tokens = lex("Program Var x ; Start Put x = 1 ; End end");
        let tree = Parser::new(&tokens).parse().unwrap();

        assert_eq!(tree.label, "Program");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].label, "Vars");
        assert_eq!(tree.children[1].label, "Block");
    }

    #[test]
    fn test_cursor_never_passes_end() {
        let tokens = lex("Program");
        let mut parser = Parser::new(&tokens);

        assert!(parser.advance().is_some());
        assert!(parser.advance().is_none());
        assert!(parser.peek().is_none());
        assert_eq!(parser.position, 1);
        assert_eq!(parser.current_location(), SourceLocation::new(1, 8));
    }

    #[test]
    fn test_empty_input_reports_end() {
        let err = Parser::new(&[]).parse().unwrap_err();

        assert!(err.is_end_of_input());
        assert_eq!(err.expected, Expected::Literal(TokenKind::Keyword, "Program"));
        assert_eq!(err.location, SourceLocation::new(1, 1));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let tokens = lex("Program Start Read(x); End end x");
        let err = Parser::new(&tokens).parse().unwrap_err();

        assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken);
        assert_eq!(err.expected, Expected::Element("end of input"));
        assert_eq!(err.column(), 32);
    }

    #[test]
    fn test_error_message() {
        let tokens = lex("Program Start Put x = 1 ; end");
        let err = Parser::new(&tokens).parse().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Syntax error at line 1, column 27: expected 'End', found 'end' (Keyword)"
        );
    }
}
