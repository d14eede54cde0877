//! Expression parsing implementation
//!
//! ```text
//! expr ::= term (("+" | "-") term)*
//! term ::= identifier | number
//! ```
//!
//! The loop form is the left-recursion-free rewrite of `expr ::= expr op term`.
//! Each operator node takes the tree built so far as its left child, so
//! `1 + 2 - 3` comes out as `(- (+ 1 2) 3)`.

use crate::parser::ast::SyntaxNode;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Expected, Parser, SyntaxError};

impl Parser<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut expr = self.parse_term()?;

        while let Some(op) = self.peek().filter(|t| {
            t.kind == TokenKind::Operator && (t.text == "+" || t.text == "-")
        }) {
            self.advance();
            let rhs = self.parse_term()?;
            expr = SyntaxNode::new(op.text.as_str(), op.location)
                .with_child(expr)
                .with_child(rhs);
        }

        Ok(expr)
    }

    /// Parse an identifier or number leaf
    pub(crate) fn parse_term(&mut self) -> Result<SyntaxNode, SyntaxError> {
        match self.peek() {
            Some(token) if matches!(token.kind, TokenKind::Identifier | TokenKind::Number) => {
                self.advance();
                Ok(SyntaxNode::leaf(token.text.as_str(), token.location))
            }
            _ => Err(self.error(Expected::Element("Identifier or Number"))),
        }
    }
}
