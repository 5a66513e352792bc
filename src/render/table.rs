//! Token Table
//!
//! Tabular view of a script's tokens for diagnostics: lexeme, kind, the
//! numeric argument where one applies, and the vocabulary description.

use crate::parser::{Token, TokenKind};
use crate::render::ansi::{BLUE, CYAN, GREEN, MAGENTA, RED, RESET};
use crate::vocab::Vocabulary;

const HEADERS: [&str; 5] = ["Token", "Tipo", "Valor", "Parametro", "Descripcion"];
const COLUMN_COLORS: [&str; 5] = [BLUE, CYAN, MAGENTA, RED, GREEN];

/// Render an aligned table over the given tokens. With `colored`, each
/// column keeps one fixed color; padding is computed on the plain text so
/// escape codes never skew the alignment.
pub fn token_table(tokens: &[Token], vocab: &Vocabulary, colored: bool) -> String {
    let mut rows: Vec<[String; 5]> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        // A method's numeric argument sits two tokens ahead in both the
        // call form `( valor )` and the assignment form `= valor`.
        let (value, parameter) = if token.kind == TokenKind::Method {
            let value = tokens
                .get(i + 2)
                .filter(|t| t.kind == TokenKind::Value)
                .map(|t| t.text.clone())
                .unwrap_or_else(|| "-".to_string());
            (value, "Si".to_string())
        } else {
            ("-".to_string(), "-".to_string())
        };

        let description = vocab
            .describe(&token.text)
            .unwrap_or("-")
            .to_string();

        rows.push([
            token.text.clone(),
            token.kind.tag().to_string(),
            value,
            parameter,
            description,
        ]);
    }

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS.map(String::from), &widths, colored));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        lines.push(format_row(row, &widths, colored));
    }

    lines.join("\n")
}

fn format_row(cells: &[String; 5], widths: &[usize; 5], colored: bool) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .zip(COLUMN_COLORS.iter())
        .map(|((cell, width), color)| {
            let padded = format!("{cell:<w$}", w = *width);
            if colored {
                format!("{color}{padded}{RESET}")
            } else {
                padded
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Lexer;

    fn tokens(line: &str) -> Vec<Token> {
        let vocab = Vocabulary::embedded();
        Lexer::for_vocabulary(&vocab).unwrap().tokenize(line).unwrap()
    }

    #[test]
    fn test_method_row_shows_argument() {
        let vocab = Vocabulary::embedded();
        let table = token_table(&tokens("b1.velocidad(50)"), &vocab, false);

        let method_row = table
            .lines()
            .find(|l| l.starts_with("velocidad"))
            .expect("method row");
        assert!(method_row.contains("Metodo"));
        assert!(method_row.contains("50"));
        assert!(method_row.contains("Si"));
    }

    #[test]
    fn test_assignment_form_also_shows_argument() {
        let vocab = Vocabulary::embedded();
        let table = token_table(&tokens("b1.base = 180"), &vocab, false);

        let method_row = table
            .lines()
            .find(|l| l.starts_with("base"))
            .expect("method row");
        assert!(method_row.contains("180"));
    }

    #[test]
    fn test_non_method_rows_have_placeholders() {
        let vocab = Vocabulary::embedded();
        let table = token_table(&tokens("Robot b1"), &vocab, false);

        let id_row = table.lines().find(|l| l.starts_with("b1")).expect("id row");
        assert!(id_row.contains("Identificador"));
        assert!(id_row.contains('-'));
    }

    #[test]
    fn test_plain_table_has_no_escape_codes() {
        let vocab = Vocabulary::embedded();
        let table = token_table(&tokens("b1.iniciar()"), &vocab, false);
        assert!(!table.contains('\x1b'));
    }

    #[test]
    fn test_colored_table_resets_every_cell() {
        let vocab = Vocabulary::embedded();
        let table = token_table(&tokens("Robot b1"), &vocab, true);
        assert!(table.contains(RESET));
        assert!(table.contains(BLUE));
    }
}
