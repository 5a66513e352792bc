//! Output Rendering
//!
//! The interpreter produces plain diagnostic text; everything about
//! presentation (terminal colors, HTML markup, the token table) lives here.

pub mod ansi;
pub mod html;
pub mod table;

pub use table::token_table;

use crate::interpreter::ExecutionLog;

/// How to present the diagnostic log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Ansi,
    Html,
}

impl OutputFormat {
    /// Parse a format name as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(OutputFormat::Plain),
            "ansi" => Some(OutputFormat::Ansi),
            "html" => Some(OutputFormat::Html),
            _ => None,
        }
    }
}

/// Render the log in the requested format, one line per diagnostic
pub fn render_log(log: &ExecutionLog, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => log.messages().collect::<Vec<_>>().join("\n"),
        OutputFormat::Ansi => ansi::render(log),
        OutputFormat::Html => html::render(log),
    }
}
