//! Turning source text into the list of commands the engine replays.
//!
//! Inert characters are dropped here, once, so the engine's cursor only ever
//! lands on recognized commands. Each instruction keeps the character offset
//! it came from for diagnostics.

use crate::command::Command;

/// A recognized command and where it sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub command: Command,
    /// Character (not byte) offset in the source text.
    pub offset: usize,
}

/// Result of a static bracket scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balance {
    /// `)` with no `(` before it to close.
    pub unmatched_close: usize,
    /// `(` still open when the source ends.
    pub unmatched_open: usize,
}

impl Balance {
    pub fn is_balanced(&self) -> bool {
        self.unmatched_close == 0 && self.unmatched_open == 0
    }
}

/// An immutable, pre-scanned BLOOP program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Scan `source`. Never fails: characters that are not commands are skipped.
    pub fn parse(source: &str) -> Self {
        let instructions = source
            .chars()
            .enumerate()
            .filter_map(|(offset, ch)| {
                Command::from_char(ch).map(|command| Instruction { command, offset })
            })
            .collect();
        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, cursor: usize) -> Option<Instruction> {
        self.instructions.get(cursor).copied()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True when the source held no command characters at all.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Count brackets that can never pair up.
    ///
    /// The engine tolerates both kinds; this is only used for warnings.
    pub fn balance(&self) -> Balance {
        let mut depth = 0usize;
        let mut balance = Balance::default();
        for ins in &self.instructions {
            match ins.command {
                Command::Open => depth += 1,
                Command::Close if depth == 0 => balance.unmatched_close += 1,
                Command::Close => depth -= 1,
                _ => {}
            }
        }
        balance.unmatched_open = depth;
        balance
    }
}
