//! HOL source code front end
//!
//! This module transforms HOL source text into a parse tree:
//! - [`config`]: Dialect settings (keyword list, operator set, identifier bound)
//! - [`dfa`]: The automaton that decides where each lexeme ends
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`](mod@parse): Parsing (tokens → tree), with `declarations`, `statements`
//!   and `expressions` extending the [`Parser`]
//! - [`ast`]: Syntax tree definitions
//!
//! # Pipeline
//!
//! The lexer never fails; anything it cannot classify becomes an `Unknown`
//! token. The parser stops at the first grammar violation and returns a
//! [`SyntaxError`] carrying what it expected, what it found, and where.

pub mod ast;
pub mod config;
mod declarations;
pub mod dfa;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use ast::{SourceLocation, SyntaxNode, SyntaxTree};
pub use config::LexerConfig;
pub use lexer::{Lexer, Token, TokenKind};
pub use parse::{Expected, Found, Parser, SyntaxError, SyntaxErrorKind};

/// Tokenize `source` with the default configuration.
pub fn analyze(source: &str) -> Vec<Token> {
    analyze_with(source, &LexerConfig::default())
}

/// Tokenize `source` with a caller-supplied configuration.
pub fn analyze_with(source: &str, config: &LexerConfig) -> Vec<Token> {
    Lexer::new(source, config).tokenize()
}

/// Tokenize `source` one line at a time.
///
/// Produces the same tokens as [`analyze_with`]: a newline always ends the
/// pending lexeme, so no token spans two lines.
pub fn analyze_lines(source: &str, config: &LexerConfig) -> Vec<Token> {
    source
        .lines()
        .enumerate()
        .flat_map(|(index, line)| Lexer::starting_at_line(line, config, index + 1))
        .collect()
}

/// Parse a token sequence into a syntax tree.
pub fn parse(tokens: &[Token]) -> Result<SyntaxTree, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str, config: &LexerConfig) -> Result<SyntaxTree, SyntaxError> {
    let tokens = analyze_with(source, config);
    parse(&tokens)
}
