//! Finite-state automaton driving lexeme segmentation
//!
//! The automaton only decides *where* a lexeme ends. What the finished
//! lexeme *is* gets decided afterwards by [`classify`](super::lexer::classify),
//! so unrecognised characters are simply absorbed into the current word and
//! rejected there.
//!
//! ```text
//!            letter/other          digit            op-start         delimiter
//! Start ──► InIdentifierOrKeyword  InNumber         InOperator       InDelimiter
//!
//! InIdentifierOrKeyword, InNumber ──(delimiter | op-start)──► Done
//! InOperator ──(pending + ch not an operator prefix)──► Done
//! InDelimiter ──(anything)──► Done
//! ```
//!
//! `Done` means "the pending lexeme is complete": the lexer flushes it,
//! resets to `Start`, and feeds the same character again.

use super::config::{is_delimiter, LexerConfig};

/// Classification-in-progress marker for the current lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    InIdentifierOrKeyword,
    InNumber,
    InOperator,
    InDelimiter,
    Done,
}

#[derive(Debug, Clone)]
pub struct Automaton<'c> {
    state: State,
    config: &'c LexerConfig,
}

impl<'c> Automaton<'c> {
    pub fn new(config: &'c LexerConfig) -> Self {
        Self {
            state: State::Start,
            config,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = State::Start;
    }

    /// Advance on `ch`, given the lexeme accumulated so far.
    ///
    /// Whitespace and newlines never reach the automaton; the lexer treats
    /// them as separators before calling this.
    pub fn transition(&mut self, ch: char, pending: &str) -> State {
        self.state = match self.state {
            State::Start | State::Done => self.from_start(ch),
            State::InIdentifierOrKeyword => {
                if self.ends_word(ch) {
                    State::Done
                } else {
                    State::InIdentifierOrKeyword
                }
            }
            State::InNumber => {
                if self.ends_word(ch) {
                    State::Done
                } else if ch.is_ascii_digit() || ch == '.' {
                    State::InNumber
                } else {
                    State::InIdentifierOrKeyword
                }
            }
            State::InOperator => {
                let mut candidate = String::with_capacity(pending.len() + ch.len_utf8());
                candidate.push_str(pending);
                candidate.push(ch);
                if self.config.is_operator_prefix(&candidate) {
                    State::InOperator
                } else {
                    State::Done
                }
            }
            State::InDelimiter => State::Done,
        };
        self.state
    }

    fn from_start(&self, ch: char) -> State {
        if is_delimiter(ch) {
            State::InDelimiter
        } else if self.config.is_operator_start(ch) {
            State::InOperator
        } else if ch.is_ascii_digit() {
            State::InNumber
        } else {
            State::InIdentifierOrKeyword
        }
    }

    fn ends_word(&self, ch: char) -> bool {
        is_delimiter(ch) || self.config.is_operator_start(ch)
    }
}
