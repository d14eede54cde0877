//! Lexer configuration
//!
//! The keyword list and the other dialect knobs are an immutable value
//! handed to the [`Lexer`](super::lexer::Lexer) when it is constructed.
//! Nothing here is global: two lexers with different configurations can
//! run side by side.

use rustc_hash::FxHashSet;

/// Keywords of the HOL grammar. The parser matches on these literals.
pub mod keywords {
    pub const PROGRAM: &str = "Program";
    pub const END_PROGRAM: &str = "end";
    pub const VAR: &str = "Var";
    pub const START: &str = "Start";
    pub const END_BLOCK: &str = "End";
    pub const IF: &str = "If";
    pub const ELSE: &str = "Else";
    pub const ITERATION: &str = "Iteration";
    pub const PUT: &str = "Put";
    pub const READ: &str = "Read";
    pub const PRINT: &str = "Print";

    pub const ALL: [&str; 11] = [
        PROGRAM,
        END_PROGRAM,
        VAR,
        START,
        END_BLOCK,
        IF,
        ELSE,
        ITERATION,
        PUT,
        READ,
        PRINT,
    ];
}

/// Default operator set. `==`, `<=`, `>=` and `!=` are matched greedily.
pub const DEFAULT_OPERATORS: [&str; 9] = ["+", "-", "=", "<", ">", "==", "<=", ">=", "!="];

/// Characters that always form a single-character delimiter token.
pub const DELIMITERS: [char; 6] = ['(', ')', '{', '}', ';', ','];

/// Dialect settings for the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    keywords: FxHashSet<String>,
    operators: FxHashSet<String>,
    max_identifier_len: Option<usize>,
    decimal_numbers: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: keywords::ALL.iter().map(|k| k.to_string()).collect(),
            operators: DEFAULT_OPERATORS.iter().map(|o| o.to_string()).collect(),
            max_identifier_len: None,
            decimal_numbers: false,
        }
    }
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The coursework dialect: identifiers are one to `max` letters.
    pub fn bounded_identifiers(max: usize) -> Self {
        Self::default().with_max_identifier_len(max)
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    /// Add a symbolic operator. Its first character starts an operator
    /// lexeme and ends any word in progress, so operators containing letters,
    /// digits, whitespace or delimiters are rejected and leave the set unchanged.
    pub fn with_operator(mut self, op: impl Into<String>) -> Self {
        let op = op.into();
        let symbolic = op
            .chars()
            .all(|c| !c.is_alphanumeric() && !c.is_whitespace() && !is_delimiter(c));
        if !op.is_empty() && symbolic {
            self.operators.insert(op);
        }
        self
    }

    pub fn with_max_identifier_len(mut self, max: usize) -> Self {
        self.max_identifier_len = Some(max);
        self
    }

    pub fn with_decimal_numbers(mut self, enabled: bool) -> Self {
        self.decimal_numbers = enabled;
        self
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_operator(&self, text: &str) -> bool {
        self.operators.contains(text)
    }

    /// True if `text` is a proper or improper prefix of some operator.
    pub fn is_operator_prefix(&self, text: &str) -> bool {
        self.operators.iter().any(|op| op.starts_with(text))
    }

    /// True if `ch` can begin an operator lexeme.
    pub fn is_operator_start(&self, ch: char) -> bool {
        self.operators.iter().any(|op| op.starts_with(ch))
    }

    pub fn max_identifier_len(&self) -> Option<usize> {
        self.max_identifier_len
    }

    pub fn decimal_numbers(&self) -> bool {
        self.decimal_numbers
    }
}

pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        let config = LexerConfig::default();
        assert!(config.is_keyword("Program"));
        assert!(config.is_keyword("end"));
        assert!(config.is_keyword("End"));
        assert!(!config.is_keyword("program"));
    }

    #[test]
    fn test_operator_prefixes() {
        let config = LexerConfig::default();
        assert!(config.is_operator_prefix("="));
        assert!(config.is_operator_prefix("=="));
        assert!(config.is_operator_prefix("!"));
        assert!(!config.is_operator_prefix("==="));
        assert!(!config.is_operator("!"));
        assert!(config.is_operator_start('<'));
        assert!(!config.is_operator_start('x'));
    }

    #[test]
    fn test_operator_with_delimiter_is_rejected() {
        let config = LexerConfig::default().with_operator("(=");
        assert!(!config.is_operator("(="));
    }

    #[test]
    fn test_word_operator_is_rejected() {
        let config = LexerConfig::default().with_operator("and").with_operator("x1");
        assert!(!config.is_operator("and"));
        assert!(!config.is_operator("x1"));
        assert!(!config.is_operator_start('a'));
    }

    #[test]
    fn test_symbolic_operator_is_added() {
        let config = LexerConfig::default().with_operator("<>");
        assert!(config.is_operator("<>"));
        assert!(config.is_operator_prefix("<"));
    }

    #[test]
    fn test_builder_settings() {
        let config = LexerConfig::bounded_identifiers(5).with_decimal_numbers(true);
        assert_eq!(config.max_identifier_len(), Some(5));
        assert!(config.decimal_numbers());
    }
}
