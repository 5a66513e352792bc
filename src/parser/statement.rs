//! Statement Matching
//!
//! Turns the token sequence of one line into a closed set of statement
//! shapes. The shapes are mutually exclusive on their token-kind sequence,
//! so an exhaustive match over the sequence preserves the
//! first-structural-match semantics of the grammar table.

use std::fmt;

use super::lexer::{LexError, Token, TokenKind};
use crate::vocab::{ActionKind, Attribute, Vocabulary};

/// A validated statement, ready for execution
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `Robot b1`
    Declare { id: String },
    /// `b1.velocidad(50)` or `b1.velocidad = 50`
    SetAttribute {
        id: String,
        attribute: Attribute,
        value: u16,
    },
    /// `b1.iniciar()`
    Action { id: String, action: ActionKind },
    /// `b1.repetir(3)`
    BeginLoop { id: String, count: u16 },
    /// `b1.finRepetir()`
    EndLoop { id: String },
}

/// A line that could not be turned into a statement
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failed
    Lex(LexError),
    /// The token sequence matches no statement shape
    UnknownStatement {
        /// Space-joined token kind tags
        key: String,
        /// Token lexemes, in order
        lexemes: Vec<String>,
    },
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => err.fmt(f),
            ParseError::UnknownStatement { key, .. } => {
                write!(f, "La secuencia '{key}' no corresponde a ninguna regla")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Space-joined sequence of token kind tags identifying a statement's shape
pub fn grammar_key(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.kind.tag())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Match a token sequence against the statement shapes
pub fn match_statement(tokens: &[Token], vocab: &Vocabulary) -> Result<Statement, ParseError> {
    use TokenKind::*;

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    let text = |i: usize| tokens[i].text.clone();

    let statement = match kinds.as_slice() {
        [Keyword, Identifier] => Some(Statement::Declare { id: text(1) }),
        [Identifier, Dot, Method, OpenParen, Value, CloseParen] => {
            set_attribute(vocab, text(0), &tokens[2].text, &tokens[4].text)
        }
        [Identifier, Dot, Method, Operator, Value] => {
            set_attribute(vocab, text(0), &tokens[2].text, &tokens[4].text)
        }
        [Identifier, Dot, Action, OpenParen, CloseParen] => {
            vocab.action_kind(&tokens[2].text).map(|action| Statement::Action {
                id: text(0),
                action,
            })
        }
        [Identifier, Dot, LoopBegin, OpenParen, Value, CloseParen] => tokens[4]
            .text
            .parse()
            .ok()
            .map(|count| Statement::BeginLoop { id: text(0), count }),
        [Identifier, Dot, LoopEnd, OpenParen, CloseParen] => {
            Some(Statement::EndLoop { id: text(0) })
        }
        _ => None,
    };

    statement.ok_or_else(|| ParseError::UnknownStatement {
        key: grammar_key(tokens),
        lexemes: tokens.iter().map(|t| t.text.clone()).collect(),
    })
}

fn set_attribute(
    vocab: &Vocabulary,
    id: String,
    method: &str,
    value: &str,
) -> Option<Statement> {
    let attribute = vocab.attribute(method)?;
    let value = value.parse().ok()?;
    Some(Statement::SetAttribute {
        id,
        attribute,
        value,
    })
}
