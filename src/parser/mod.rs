//! Script Parser
//!
//! Tokenization and statement matching for one line at a time. Execution
//! semantics live in the interpreter; this module only decides what a line
//! says.

pub mod lexer;
pub mod statement;

pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use statement::{grammar_key, match_statement, ParseError, Statement};

use crate::vocab::Vocabulary;

/// Parse a single script line into a statement
pub fn parse_line(
    lexer: &Lexer,
    vocab: &Vocabulary,
    line: &str,
) -> Result<Statement, ParseError> {
    let tokens = lexer.tokenize(line)?;
    match_statement(&tokens, vocab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Attribute;

    #[test]
    fn test_parse_line() {
        let vocab = Vocabulary::embedded();
        let lexer = Lexer::for_vocabulary(&vocab).unwrap();

        let statement = parse_line(&lexer, &vocab, "b1.garra(90)").unwrap();
        assert_eq!(
            statement,
            Statement::SetAttribute {
                id: "b1".to_string(),
                attribute: Attribute::Gripper,
                value: 90,
            }
        );
    }

    #[test]
    fn test_parse_line_lex_failure() {
        let vocab = Vocabulary::embedded();
        let lexer = Lexer::for_vocabulary(&vocab).unwrap();

        let err = parse_line(&lexer, &vocab, "b1.velocidad(50)!").unwrap_err();
        assert!(matches!(err, ParseError::Lex(_)));
    }
}
