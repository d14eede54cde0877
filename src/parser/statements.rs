//! Statement parsing implementation
//!
//! This module handles parsing of all HOL statement types:
//!
//! - Conditionals: `If (a < b) { ... }` with an optional `Else { ... }`
//! - Loops: `Iteration (i < 10) { ... }`
//! - Assignment: `Put x = a + 1 ;`
//! - Input: `Read (x) ;`
//! - Output: `Print (x - 1) ;`
//!
//! # Grammar
//!
//! ```text
//! statements ::= statement statements?
//! statement  ::= if | loop | assign | read | print
//! if         ::= "If" "(" condition ")" "{" statement "}" else?
//! else       ::= "Else" "{" statement "}"
//! loop       ::= "Iteration" "(" condition ")" "{" statement "}"
//! assign     ::= "Put" identifier "=" expr ";"
//! read       ::= "Read" "(" identifier ")" ";"
//! print      ::= "Print" "(" expr ")" ";"
//! condition  ::= expr operator expr
//! ```
//!
//! The statement keyword alone selects the production; all five share the
//! `Keyword` kind and are told apart by their text.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{labels, SyntaxNode};
use crate::parser::config::keywords;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Expected, Parser, SyntaxError};

const STATEMENT_KEYWORDS: [&str; 5] = [
    keywords::IF,
    keywords::ITERATION,
    keywords::PUT,
    keywords::READ,
    keywords::PRINT,
];

impl Parser<'_> {
    /// True if the current token can begin a statement.
    pub(crate) fn at_statement_start(&self) -> bool {
        self.peek().is_some_and(|t| {
            t.kind == TokenKind::Keyword && STATEMENT_KEYWORDS.contains(&t.text.as_str())
        })
    }

    /// Parse `statement statements?` as a right-nested `Statements` chain.
    ///
    /// Statements are collected iteratively and the chain is folded from the
    /// back, so stack depth does not grow with the length of the list.
    pub(crate) fn parse_statements(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut parsed = Vec::new();
        loop {
            let location = self.current_location();
            parsed.push((location, self.parse_statement()?));
            if !self.at_statement_start() {
                break;
            }
        }

        let chain = parsed.into_iter().rev().fold(None, |rest, (location, statement)| {
            let mut node = SyntaxNode::new(labels::STATEMENTS, location).with_child(statement);
            if let Some(rest) = rest {
                node.push(rest);
            }
            Some(node)
        });

        chain.ok_or_else(|| self.error(Expected::Element("statement")))
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let keyword = match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword => token.text.as_str(),
            _ => return Err(self.error(Expected::Element("statement"))),
        };

        match keyword {
            keywords::IF => self.parse_if_statement(),
            keywords::ITERATION => self.parse_loop_statement(),
            keywords::PUT => self.parse_assign_statement(),
            keywords::READ => self.parse_read_statement(),
            keywords::PRINT => self.parse_print_statement(),
            _ => Err(self.error(Expected::Element("statement"))),
        }
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let start = self.expect_keyword(keywords::IF)?;
        let mut node = SyntaxNode::new(labels::IF, start.location);

        node.push(self.parse_parenthesized_condition()?);
        node.push(self.parse_braced_statement()?);

        if self.check_keyword(keywords::ELSE) {
            let location = self.current_location();
            self.advance();
            let body = self.parse_braced_statement()?;
            node.push(SyntaxNode::new(labels::ELSE, location).with_child(body));
        }

        Ok(node)
    }

    /// Parse `Iteration (condition) { statement }`
    fn parse_loop_statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let start = self.expect_keyword(keywords::ITERATION)?;
        let condition = self.parse_parenthesized_condition()?;
        let body = self.parse_braced_statement()?;

        Ok(SyntaxNode::new(labels::LOOP, start.location)
            .with_child(condition)
            .with_child(body))
    }

    fn parse_assign_statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let start = self.expect_keyword(keywords::PUT)?;
        let target = self.expect_identifier()?;
        self.expect_literal(TokenKind::Operator, "=")?;
        let value = self.parse_expression()?;
        self.expect_delimiter(";")?;

        Ok(SyntaxNode::new(labels::ASSIGN, start.location)
            .with_child(SyntaxNode::leaf(target.text.as_str(), target.location))
            .with_child(value))
    }

    fn parse_read_statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let start = self.expect_keyword(keywords::READ)?;
        self.expect_delimiter("(")?;
        let target = self.expect_identifier()?;
        self.expect_delimiter(")")?;
        self.expect_delimiter(";")?;

        Ok(SyntaxNode::new(labels::READ, start.location)
            .with_child(SyntaxNode::leaf(target.text.as_str(), target.location)))
    }

    fn parse_print_statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let start = self.expect_keyword(keywords::PRINT)?;
        self.expect_delimiter("(")?;
        let value = self.parse_expression()?;
        self.expect_delimiter(")")?;
        self.expect_delimiter(";")?;

        Ok(SyntaxNode::new(labels::PRINT, start.location).with_child(value))
    }

    /// Parse `( expr operator expr )`; the node is labelled with the operator.
    fn parse_parenthesized_condition(&mut self) -> Result<SyntaxNode, SyntaxError> {
        self.expect_delimiter("(")?;
        let lhs = self.parse_expression()?;
        let op = self.expect_kind(TokenKind::Operator)?;
        let rhs = self.parse_expression()?;
        self.expect_delimiter(")")?;

        Ok(SyntaxNode::new(op.text.as_str(), op.location)
            .with_child(lhs)
            .with_child(rhs))
    }

    /// Parse `{ statement }`
    fn parse_braced_statement(&mut self) -> Result<SyntaxNode, SyntaxError> {
        self.expect_delimiter("{")?;
        let body = self.parse_statement()?;
        self.expect_delimiter("}")?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::SyntaxNode;
    use crate::parser::config::LexerConfig;
    use crate::parser::lexer::{Lexer, Token, TokenKind};
    use crate::parser::parse::{Expected, Parser, SyntaxError};

    fn lex(source: &str) -> Vec<Token> {
        let config = LexerConfig::default();
        Lexer::new(source, &config).tokenize()
    }

    fn statements(source: &str) -> Result<SyntaxNode, SyntaxError> {
        let tokens = lex(source);
        let mut parser = Parser::new(&tokens);
        parser.parse_statements()
    }

    #[test]
    fn test_statement_chain_is_right_nested() {
        let node = statements("Read(a); Put a = a + 1; Print(a);").unwrap();

        assert_eq!(
            node.to_sexpr(),
            "(Statements (Read a) (Statements (Assign a (+ a 1)) (Statements (Print a))))"
        );
        assert_eq!(node.statement_list().len(), 3);
    }

    #[test]
    fn test_long_statement_list() {
        let source = "Print(1);\n".repeat(5000);
        let node = statements(&source).unwrap();

        let list = node.statement_list();
        assert_eq!(list.len(), 5000);
        assert_eq!(list[4999].location.line, 5000);
        assert!(list.iter().all(|n| n.label == "Print"));
    }

    #[test]
    fn test_if_with_else() {
        let node = statements("If (a < 10) { Print(a); } Else { Read(a); }").unwrap();

        assert_eq!(node.children[0].to_sexpr(), "(If (< a 10) (Print a) (Else (Read a)))");
    }

    #[test]
    fn test_loop() {
        let node = statements("Iteration (i == n - 1) { Put i = i + 1 ; }").unwrap();

        assert_eq!(
            node.children[0].to_sexpr(),
            "(Loop (== i (- n 1)) (Assign i (+ i 1)))"
        );
    }

    #[test]
    fn test_condition_requires_operator() {
        let err = statements("If (a) { Print(a); }").unwrap_err();

        assert_eq!(err.expected, Expected::Kind(TokenKind::Operator));
        assert_eq!(err.column(), 6);
    }

    #[test]
    fn test_body_holds_a_single_statement() {
        let err = statements("If (a < b) { Print(a); Print(b); }").unwrap_err();

        assert_eq!(err.expected, Expected::Literal(TokenKind::Delimiter, "}"));
        assert_eq!(err.column(), 24);
    }

    #[test]
    fn test_non_statement_keyword() {
        let err = statements("Var x ;").unwrap_err();

        assert_eq!(err.expected, Expected::Element("statement"));
        assert_eq!(
            err.to_string(),
            "Syntax error at line 1, column 1: expected statement, found 'Var' (Keyword)"
        );
    }

    #[test]
    fn test_assign_requires_equals() {
        let err = statements("Put x == 1 ;").unwrap_err();

        assert_eq!(err.expected, Expected::Literal(TokenKind::Operator, "="));
    }

    #[test]
    fn test_missing_semicolon_at_end_of_input() {
        let err = statements("Print(x)").unwrap_err();

        assert!(err.is_end_of_input());
        assert_eq!(err.column(), 9);
    }
}
