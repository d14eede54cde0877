// Syntax tree definitions for the HOL front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Grammar category labels used for interior nodes.
///
/// Terminal leaves (identifiers, numbers) and operator nodes are labelled
/// with their literal source text instead.
pub mod labels {
    pub const PROGRAM: &str = "Program";
    pub const VARS: &str = "Vars";
    pub const BLOCK: &str = "Block";
    pub const STATEMENTS: &str = "Statements";
    pub const IF: &str = "If";
    pub const ELSE: &str = "Else";
    pub const LOOP: &str = "Loop";
    pub const ASSIGN: &str = "Assign";
    pub const READ: &str = "Read";
    pub const PRINT: &str = "Print";
}

/// A node of the parse tree.
///
/// Every node owns its children outright; the tree is built bottom-up by the
/// parser and handed to the caller as a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub label: String,
    pub children: Vec<SyntaxNode>,
    pub location: SourceLocation,
}

/// The parse result: the `Program` root node.
pub type SyntaxTree = SyntaxNode;

impl SyntaxNode {
    pub fn new(label: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            location,
        }
    }

    /// Leaf node for a terminal (identifier, number).
    pub fn leaf(text: impl Into<String>, location: SourceLocation) -> Self {
        Self::new(text, location)
    }

    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    /// Flatten a right-recursive `Statements` chain into its statements,
    /// in source order.
    pub fn statement_list(&self) -> Vec<&SyntaxNode> {
        let mut out = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            if node.label != labels::STATEMENTS {
                break;
            }
            if let Some(first) = node.children.first() {
                out.push(first);
            }
            current = node.children.get(1);
        }
        out
    }

    /// Render the subtree as a compact s-expression, e.g. `(- (+ 1 2) 3)`.
    pub fn to_sexpr(&self) -> String {
        if self.is_leaf() {
            return self.label.clone();
        }
        let inner: Vec<String> = self.children.iter().map(SyntaxNode::to_sexpr).collect();
        format!("({} {})", self.label, inner.join(" "))
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{}", "", self.label, indent = depth * 2)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl Drop for SyntaxNode {
    // Long statement lists nest deeply; unlink children onto a heap stack
    // instead of dropping them recursively.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 1)
    }

    #[test]
    fn test_sexpr_rendering() {
        let tree = SyntaxNode::new("-", loc())
            .with_child(
                SyntaxNode::new("+", loc())
                    .with_child(SyntaxNode::leaf("1", loc()))
                    .with_child(SyntaxNode::leaf("2", loc())),
            )
            .with_child(SyntaxNode::leaf("3", loc()));

        assert_eq!(tree.to_sexpr(), "(- (+ 1 2) 3)");
    }

    #[test]
    fn test_outline_display() {
        let tree = SyntaxNode::new(labels::READ, loc()).with_child(SyntaxNode::leaf("x", loc()));
        assert_eq!(tree.to_string(), "Read\n  x\n");
    }

    #[test]
    fn test_deep_chain_drops() {
        let mut chain = SyntaxNode::new(labels::STATEMENTS, loc());
        for _ in 0..200_000 {
            chain = SyntaxNode::new(labels::STATEMENTS, loc())
                .with_child(SyntaxNode::new(labels::PRINT, loc()))
                .with_child(chain);
        }

        assert_eq!(chain.statement_list().len(), 200_000);
        drop(chain);
    }

    #[test]
    fn test_statement_list_flattens_chain() {
        let inner = SyntaxNode::new(labels::STATEMENTS, loc())
            .with_child(SyntaxNode::new(labels::PRINT, loc()));
        let outer = SyntaxNode::new(labels::STATEMENTS, loc())
            .with_child(SyntaxNode::new(labels::READ, loc()))
            .with_child(inner);

        let labels: Vec<&str> = outer
            .statement_list()
            .iter()
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Read", "Print"]);
    }
}
