//! # Introduction
//!
//! holc is the front end for HOL, a small imperative teaching language.  It
//! turns source text into classified tokens and checks them against the HOL
//! grammar, producing either a parse tree or a positioned syntax error.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer (automaton) → Tokens → Parser (recursive descent) → Tree | SyntaxError
//! ```
//!
//! 1. [`parser::lexer`] — segments the text with a finite-state automaton
//!    ([`parser::dfa`]) and classifies each lexeme against an injected
//!    [`parser::config::LexerConfig`].  Never fails.
//! 2. [`parser::parse`] — one token of lookahead, no backtracking, stops at
//!    the first violation.
//! 3. [`parser::ast`] — the owned [`parser::ast::SyntaxNode`] tree.
//!
//! ## Example program
//!
//! ```text
//! Program
//!   Var n ;
//! Start
//!   Read(n);
//!   Iteration (n > 0) { Put n = n - 1 ; }
//!   Print(n);
//! End
//! end
//! ```
//!
//! ```
//! let tree = holc::parse_source(
//!     "Program Var n ; Start Read(n); Print(n + 1); End end",
//!     &holc::LexerConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(tree.label, "Program");
//! ```
//!
//! Logging goes through the [`log`](https://docs.rs/log) facade; install any
//! logger to see token (`trace`) and parser (`debug`) events.

pub mod parser;

pub use parser::{
    analyze, analyze_lines, analyze_with, parse, parse_source, Expected, Found, Lexer,
    LexerConfig, Parser, SourceLocation, SyntaxError, SyntaxErrorKind, SyntaxNode, SyntaxTree,
    Token, TokenKind,
};
