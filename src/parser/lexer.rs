//! Script Lexer
//!
//! Tokenization of script lines against an ordered rule list. Rules are
//! tried in declared order at the current scan position and the first one
//! that matches there wins, so the order is part of the grammar: fixed
//! vocabulary (keyword, methods, actions) is recognized before anything
//! that could shadow it.

use std::fmt;

use regex::Regex;

use crate::vocab::Vocabulary;

/// Token types in the scripting language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Line break, consumed but never emitted
    Newline,
    /// The `Robot` declaration keyword
    Keyword,
    /// Robot identifier like `b1` or `r7`
    Identifier,
    /// The `.` between identifier and member
    Dot,
    /// Attribute-setting method like `velocidad`
    Method,
    /// Parameterless action like `iniciar`
    Action,
    /// The `=` assignment operator
    Operator,
    /// Numeric value, lexically constrained to 0-360
    Value,
    /// Space, consumed but never emitted
    Whitespace,
    OpenParen,
    CloseParen,
    /// The `repetir` loop keyword
    LoopBegin,
    /// The `finRepetir` loop keyword
    LoopEnd,
}

impl TokenKind {
    /// Whether tokens of this kind consume input without being emitted
    pub fn is_ignored(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }

    /// Display tag, used in grammar keys and the token table
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Newline => "Salto de linea",
            TokenKind::Keyword => "Palabra_r",
            TokenKind::Identifier => "Identificador",
            TokenKind::Dot => "Punto",
            TokenKind::Method => "Metodo",
            TokenKind::Action => "Accion",
            TokenKind::Operator => "Operador",
            TokenKind::Value => "Valor",
            TokenKind::Whitespace => "Espacio",
            TokenKind::OpenParen => "IParentesis",
            TokenKind::CloseParen => "DParentesis",
            TokenKind::LoopBegin => "IBucle",
            TokenKind::LoopEnd => "FBucle",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A token with its text content
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// No rule matched at a scan position
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// The character at the failing position
    pub character: char,
    /// Byte offset within the line
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token inesperado en '{}', posicion {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

struct LexRule {
    pattern: Regex,
    kind: TokenKind,
}

/// Ordered-rule tokenizer for script lines
pub struct Lexer {
    rules: Vec<LexRule>,
}

impl Lexer {
    /// Build the rule list for a vocabulary. Method and action alternations
    /// come from the vocabulary in its declaration order; everything else is
    /// fixed grammar.
    pub fn for_vocabulary(vocab: &Vocabulary) -> Result<Self, regex::Error> {
        let specs: Vec<(String, TokenKind)> = vec![
            ("\n".to_string(), TokenKind::Newline),
            ("Robot".to_string(), TokenKind::Keyword),
            ("(b|r)[0-9]".to_string(), TokenKind::Identifier),
            (r"\.".to_string(), TokenKind::Dot),
            (vocab.method_pattern(), TokenKind::Method),
            (vocab.action_pattern(), TokenKind::Action),
            ("=".to_string(), TokenKind::Operator),
            (r"(360|3[0-5][0-9]|[12]\d\d|\d\d|\d)".to_string(), TokenKind::Value),
            (" ".to_string(), TokenKind::Whitespace),
            (r"\(".to_string(), TokenKind::OpenParen),
            (r"\)".to_string(), TokenKind::CloseParen),
            ("repetir".to_string(), TokenKind::LoopBegin),
            ("finRepetir".to_string(), TokenKind::LoopEnd),
        ];

        let rules = specs
            .into_iter()
            .map(|(pattern, kind)| {
                Ok(LexRule {
                    pattern: Regex::new(&pattern)?,
                    kind,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { rules })
    }

    /// Tokenize one line into its non-ignored tokens
    ///
    /// Matching is anchored: a rule must match starting exactly at the
    /// current position. When no rule matches there, the scan fails with
    /// the offending character rather than skipping it.
    pub fn tokenize(&self, line: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < line.len() {
            let matched = self.rules.iter().find_map(|rule| {
                rule.pattern
                    .find_at(line, pos)
                    .filter(|m| m.start() == pos)
                    .map(|m| (rule.kind, m.end()))
            });

            match matched {
                Some((kind, end)) => {
                    if !kind.is_ignored() {
                        tokens.push(Token {
                            kind,
                            text: line[pos..end].to_string(),
                        });
                    }
                    pos = end;
                }
                None => {
                    let Some(character) = line[pos..].chars().next() else {
                        break;
                    };
                    return Err(LexError {
                        character,
                        position: pos,
                    });
                }
            }
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexer() -> Lexer {
        Lexer::for_vocabulary(&Vocabulary::embedded()).unwrap()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_declaration() {
        let tokens = lexer().tokenize("Robot b1").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "Robot");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "b1");
    }

    #[test]
    fn test_whitespace_not_emitted() {
        let tokens = lexer().tokenize("  Robot    b1  ").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Keyword, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_tokenize_method_call() {
        let tokens = lexer().tokenize("b1.velocidad(50)").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Method,
                TokenKind::OpenParen,
                TokenKind::Value,
                TokenKind::CloseParen,
            ]
        );
        assert_eq!(tokens[4].text, "50");
    }

    #[test]
    fn test_tokenize_assignment_form() {
        let tokens = lexer().tokenize("r2.base = 180").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Method,
                TokenKind::Operator,
                TokenKind::Value,
            ]
        );
    }

    #[test]
    fn test_method_wins_over_identifier_prefix() {
        // "base" starts with 'b' but is not an identifier; rule order must
        // still classify it as a method.
        let tokens = lexer().tokenize("base").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Method);
    }

    #[test]
    fn test_loop_keywords() {
        let tokens = lexer().tokenize("b1.repetir(3)").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::LoopBegin);

        let tokens = lexer().tokenize("b1.finRepetir()").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::LoopEnd);
    }

    #[test]
    fn test_value_range_is_lexical() {
        let tokens = lexer().tokenize("360").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Value]);

        // 999 is outside the pattern: it lexes as two value tokens, which
        // no statement shape accepts.
        let tokens = lexer().tokenize("999").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Value, TokenKind::Value]);
    }

    #[test]
    fn test_lex_error_reports_character_and_position() {
        let err = lexer().tokenize("b1.velocidad(50);").unwrap_err();
        assert_eq!(err.character, ';');
        assert_eq!(err.position, 16);
    }

    #[test]
    fn test_empty_line() {
        let tokens = lexer().tokenize("").unwrap();
        assert!(tokens.is_empty());
    }
}
