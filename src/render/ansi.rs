//! ANSI Terminal Rendering
//!
//! Colors each diagnostic by its kind using a fixed escape-code mapping.

use crate::interpreter::{DiagnosticKind, ExecutionLog};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const BLUE: &str = "\x1b[94m";
pub const MAGENTA: &str = "\x1b[95m";
pub const CYAN: &str = "\x1b[96m";

/// Escape code for a diagnostic kind
pub fn color_for(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::AttributeSet => MAGENTA,
        DiagnosticKind::Action => BLUE,
        DiagnosticKind::StateDump => YELLOW,
        DiagnosticKind::Error => RED,
    }
}

/// Render the log with one colored line per diagnostic
pub fn render(log: &ExecutionLog) -> String {
    log.diagnostics
        .iter()
        .map(|d| format!("{}{}{}", color_for(d.kind), d.message, RESET))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::ExecutionLog;

    #[test]
    fn test_color_mapping() {
        assert_eq!(color_for(DiagnosticKind::AttributeSet), MAGENTA);
        assert_eq!(color_for(DiagnosticKind::Action), BLUE);
        assert_eq!(color_for(DiagnosticKind::StateDump), YELLOW);
        assert_eq!(color_for(DiagnosticKind::Error), RED);
    }

    #[test]
    fn test_render_wraps_each_line() {
        let mut log = ExecutionLog::new();
        log.push(1, DiagnosticKind::Action, "Iniciar robot".to_string());
        log.push(2, DiagnosticKind::AttributeSet, "velocidad = 50".to_string());

        let rendered = render(&log);
        assert_eq!(
            rendered,
            "\x1b[94mIniciar robot\x1b[0m\n\x1b[95mvelocidad = 50\x1b[0m"
        );
    }
}
