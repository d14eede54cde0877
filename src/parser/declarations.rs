//! Program-level parsing implementation
//!
//! This module handles the outer shape of a HOL program:
//!
//! - The `Program ... end` frame
//! - The optional variable section: `Var x ; Var y ;`
//! - The statement block: `Start ... End`
//!
//! # Grammar
//!
//! ```text
//! program  ::= "Program" var_decls block "end"
//! var_decls ::= ("Var" identifier ";")*
//! block    ::= "Start" statements "End"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{labels, SyntaxNode};
use crate::parser::config::keywords;
use crate::parser::parse::{Parser, SyntaxError};

impl Parser<'_> {
    /// Parse `Program VarDecls Block end`
    pub(crate) fn parse_program(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let start = self.expect_keyword(keywords::PROGRAM)?;
        let mut program = SyntaxNode::new(labels::PROGRAM, start.location);

        program.push(self.parse_var_decls()?);
        program.push(self.parse_block()?);

        self.expect_keyword(keywords::END_PROGRAM)?;
        Ok(program)
    }

    /// Parse zero or more `Var identifier ;` declarations.
    ///
    /// The section is absent when the current token is not `Var`.
    pub(crate) fn parse_var_decls(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let mut vars = SyntaxNode::new(labels::VARS, self.current_location());

        while self.check_keyword(keywords::VAR) {
            self.advance();
            let name = self.expect_identifier()?;
            self.expect_delimiter(";")?;
            vars.push(SyntaxNode::leaf(name.text.as_str(), name.location));
        }

        Ok(vars)
    }

    /// Parse `Start statements End`
    pub(crate) fn parse_block(&mut self) -> Result<SyntaxNode, SyntaxError> {
        let start = self.expect_keyword(keywords::START)?;
        let statements = self.parse_statements()?;
        self.expect_keyword(keywords::END_BLOCK)?;

        Ok(SyntaxNode::new(labels::BLOCK, start.location).with_child(statements))
    }
}
