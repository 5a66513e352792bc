//! Execution Engine
//!
//! Drives a script through the parser line by line and applies the resulting
//! statements to a session. Every execution call gets a fresh session: an
//! empty robot table, an inactive loop recorder, and an empty log. No error
//! on any line stops the lines after it.

pub mod log;
pub mod recorder;
pub mod robot;

pub use log::{Diagnostic, DiagnosticKind, ExecutionLog};
pub use robot::Robot;

use std::collections::HashMap;

use anyhow::Result;

use crate::parser::{self, LexError, Lexer, ParseError, Statement, Token};
use crate::vocab::{ActionKind, Attribute, Vocabulary};
use recorder::{Instruction, LoopRecorder};

/// Reusable script interpreter: the vocabulary and the lexer built from it.
/// Holds no execution state; each `run` call is independent.
pub struct Interpreter {
    lexer: Lexer,
    vocab: Vocabulary,
}

impl Interpreter {
    /// Interpreter over the embedded vocabulary
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(Vocabulary::embedded())
    }

    pub fn with_vocabulary(vocab: Vocabulary) -> Result<Self> {
        let lexer = Lexer::for_vocabulary(&vocab)?;
        Ok(Self { lexer, vocab })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Tokenize one line without executing it (token table rendering)
    pub fn tokenize(&self, line: &str) -> Result<Vec<Token>, LexError> {
        self.lexer.tokenize(line)
    }

    /// Execute a full script and return its ordered diagnostic log
    pub fn run(&self, source: &str) -> ExecutionLog {
        let mut session = Session::new();

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            match parser::parse_line(&self.lexer, &self.vocab, raw) {
                Ok(statement) => session.apply(line, statement),
                Err(ParseError::Lex(err)) => {
                    ::log::debug!("line {line}: {err}");
                    session.log.push_error(line, syntax_error(line, raw));
                }
                Err(ParseError::UnknownStatement { key, lexemes }) => {
                    ::log::debug!("line {line}: no statement shape for '{key}'");
                    session
                        .log
                        .push_error(line, syntax_error(line, &lexemes.join("")));
                }
            }
        }

        session.into_log()
    }
}

fn syntax_error(line: usize, text: &str) -> String {
    format!("Error sintáctico en la línea {line} [{text}]")
}

/// The complete mutable state of one execution call
struct Session {
    robots: HashMap<String, Robot>,
    recorder: LoopRecorder,
    log: ExecutionLog,
}

impl Session {
    fn new() -> Self {
        Self {
            robots: HashMap::new(),
            recorder: LoopRecorder::new(),
            log: ExecutionLog::new(),
        }
    }

    fn into_log(self) -> ExecutionLog {
        self.log
    }

    fn apply(&mut self, line: usize, statement: Statement) {
        match statement {
            Statement::Declare { id } => {
                ::log::debug!("declaring robot '{id}'");
                self.robots.insert(id, Robot::new());
            }
            Statement::SetAttribute {
                id,
                attribute,
                value,
            } => {
                if self.set_attribute(line, &id, attribute, value) && self.recorder.is_active() {
                    self.recorder.record(Instruction::Set {
                        id,
                        attribute,
                        value,
                    });
                }
            }
            Statement::Action { id, action } => {
                if self.perform(line, &id, action) && self.recorder.is_active() {
                    self.recorder.record(Instruction::Act { id, action });
                }
            }
            Statement::BeginLoop { id: _, count } => {
                if !self.recorder.begin(count) {
                    self.log
                        .push_error(line, "Bucle ya abierto, repetir ignorado".to_string());
                }
            }
            Statement::EndLoop { id: _ } => match self.recorder.end() {
                Some((count, instructions)) => self.replay(line, count, &instructions),
                None => {
                    self.log
                        .push_error(line, "No hay bucle abierto".to_string());
                }
            },
        }
    }

    /// Replay a closed block's instructions. The live pass already ran while
    /// recording, so a block with count N gets N - 1 additional passes.
    fn replay(&mut self, line: usize, count: u16, instructions: &[Instruction]) {
        for _ in 1..count {
            for instruction in instructions {
                match instruction {
                    Instruction::Set {
                        id,
                        attribute,
                        value,
                    } => {
                        self.set_attribute(line, id, *attribute, *value);
                    }
                    Instruction::Act { id, action } => {
                        self.perform(line, id, *action);
                    }
                }
            }
        }
    }

    /// Returns whether the robot was declared; only declared-robot
    /// statements are eligible for loop recording.
    fn set_attribute(&mut self, line: usize, id: &str, attribute: Attribute, value: u16) -> bool {
        match self.robots.get_mut(id) {
            Some(robot) => {
                let effect = robot.set_attribute(attribute, value);
                self.log.push(line, effect.kind, effect.message);
                true
            }
            None => {
                self.log
                    .push_error(line, format!("Robot '{id}' no declarado"));
                false
            }
        }
    }

    fn perform(&mut self, line: usize, id: &str, action: ActionKind) -> bool {
        match self.robots.get_mut(id) {
            Some(robot) => {
                let effect = robot.perform(action);
                self.log.push(line, effect.kind, effect.message);
                true
            }
            None => {
                self.log
                    .push_error(line, format!("Robot '{id}' no declarado"));
                false
            }
        }
    }
}
