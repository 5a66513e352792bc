//! Execution Diagnostics
//!
//! Plain-text diagnostic records collected during a run. Styling and markup
//! belong to the render layer; the log itself never contains escape codes.

/// What a diagnostic reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An attribute was overwritten
    AttributeSet,
    /// An action was performed
    Action,
    /// A full state snapshot
    StateDump,
    /// Anything that went wrong: syntax, undeclared or uninitialized robot,
    /// loop misuse
    Error,
}

/// One diagnostic line, attributable to the script line that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Ordered diagnostic log for one execution call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionLog {
    pub diagnostics: Vec<Diagnostic>,
}

impl ExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: usize, kind: DiagnosticKind, message: String) {
        self.diagnostics.push(Diagnostic {
            line,
            kind,
            message,
        });
    }

    pub fn push_error(&mut self, line: usize, message: String) {
        self.push(line, DiagnosticKind::Error, message);
    }

    /// True when no diagnostic is an error
    pub fn is_clean(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Error)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(|d| d.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
