//! An interpreter for BLOOP, a language whose whole state is one six-sided die.
//!
//! The accumulator starts on face 1 and is moved around by six commands:
//! `B`, `L` and `P` step it up or down depending on its parity, `O` prints it,
//! and `(` / `)` form a loop whose exit face is fixed by the parity the loop
//! was entered with. Every other character is ignored.
//!
//! The main entry point is [`Interpreter`], which runs a [`Program`] under a
//! [`Config`] and returns either an [`Execution`] or a [`StepLimitExceeded`]
//! carrying the output produced before the ceiling was hit. The [`flavor`]
//! module holds the command line's cosmetic commentary and is never consulted
//! by the interpreter.

pub mod command;
pub mod config;
pub mod error;
pub mod flavor;
mod interpreter;
pub mod program;
mod repl;
pub mod ring;

pub use config::{Config, DEFAULT_MAX_STEPS};
pub use error::StepLimitExceeded;
pub use interpreter::{Execution, Interpreter, interpret};
pub use program::Program;
pub use ring::{Accumulator, Parity, wrap};
