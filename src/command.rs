//! The six BLOOP commands and their effect on the accumulator.

use crate::ring::{Accumulator, Parity};
use std::fmt;

/// A recognized command character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `B`: step up by one face when odd, two when even.
    Bump,
    /// `L`: step down by one face when odd, two when even.
    Lower,
    /// `O`: print the current face.
    Output,
    /// `P`: cross to the other parity (odd goes up, even goes down).
    Pivot,
    /// `(`: open a loop, remembering the parity it was entered with.
    Open,
    /// `)`: close the innermost loop or jump back to its start.
    Close,
}

impl Command {
    /// Recognize a command character. Anything else is inert.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'B' => Some(Command::Bump),
            'L' => Some(Command::Lower),
            'O' => Some(Command::Output),
            'P' => Some(Command::Pivot),
            '(' => Some(Command::Open),
            ')' => Some(Command::Close),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Command::Bump => 'B',
            Command::Lower => 'L',
            Command::Output => 'O',
            Command::Pivot => 'P',
            Command::Open => '(',
            Command::Close => ')',
        }
    }

    /// Signed distance this command moves an accumulator of the given parity.
    ///
    /// Returns `None` for the commands that never mutate the accumulator.
    pub fn delta(self, parity: Parity) -> Option<i64> {
        match (self, parity) {
            (Command::Bump, Parity::Odd) => Some(1),
            (Command::Bump, Parity::Even) => Some(2),
            (Command::Lower, Parity::Odd) => Some(-1),
            (Command::Lower, Parity::Even) => Some(-2),
            (Command::Pivot, Parity::Odd) => Some(1),
            (Command::Pivot, Parity::Even) => Some(-1),
            (Command::Output | Command::Open | Command::Close, _) => None,
        }
    }

    /// Accumulator after this command, with parity taken before the move.
    pub fn apply(self, acc: Accumulator) -> Accumulator {
        match self.delta(acc.parity()) {
            Some(delta) => acc.shift(delta),
            None => acc,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
