//! HTML Rendering
//!
//! Wraps each diagnostic in a colored span. The color names mirror the
//! ANSI mapping as an explicit table rather than being derived at runtime.

use crate::interpreter::{DiagnosticKind, ExecutionLog};

/// CSS color name for a diagnostic kind
pub fn color_name(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::AttributeSet => "magenta",
        DiagnosticKind::Action => "blue",
        DiagnosticKind::StateDump => "yellow",
        DiagnosticKind::Error => "red",
    }
}

/// Render the log with one `<br>`-wrapped colored span per diagnostic
pub fn render(log: &ExecutionLog) -> String {
    log.diagnostics
        .iter()
        .map(|d| {
            format!(
                "<br><span style=\"color: {};\">{}</span></br>",
                color_name(d.kind),
                d.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
