//! Loop Recording
//!
//! Buffers the instructions executed inside an open `repetir` block so the
//! session can replay them when the block closes. At most one block is open
//! at a time; opening clears whatever the previous block left behind.

use crate::vocab::{ActionKind, Attribute};

/// One buffered instruction: enough to re-run the effect without going back
/// through tokenization or statement matching.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Set {
        id: String,
        attribute: Attribute,
        value: u16,
    },
    Act {
        id: String,
        action: ActionKind,
    },
}

/// Recorder for the currently open loop block, if any
#[derive(Debug, Default)]
pub struct LoopRecorder {
    active: bool,
    count: u16,
    buffer: Vec<Instruction>,
}

impl LoopRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Open a block with the given repeat count. Returns false when a block
    /// is already open; the open block is left untouched.
    pub fn begin(&mut self, count: u16) -> bool {
        if self.active {
            return false;
        }
        self.buffer.clear();
        self.count = count;
        self.active = true;
        true
    }

    /// Append an instruction to the open block's buffer
    pub fn record(&mut self, instruction: Instruction) {
        if self.active {
            self.buffer.push(instruction);
        }
    }

    /// Close the open block, yielding its repeat count and buffered
    /// instructions in encounter order. Returns None when no block is open.
    pub fn end(&mut self) -> Option<(u16, Vec<Instruction>)> {
        if !self.active {
            return None;
        }
        self.active = false;
        let count = self.count;
        self.count = 0;
        Some((count, std::mem::take(&mut self.buffer)))
    }
}
