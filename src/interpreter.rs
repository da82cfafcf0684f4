use crate::command::Command;
use crate::config::Config;
use crate::error::{RunResult, StepLimitExceeded};
use crate::program::{Instruction, Program};
use crate::ring::{Accumulator, Parity};
use tracing::{debug, trace};

/// Everything a finished run leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Characters printed by `O`, in order.
    pub output: String,
    /// Recognized commands executed, loop repeats included.
    pub steps: u64,
    /// Final accumulator value.
    pub accumulator: Accumulator,
    /// Loops still open when the program ran off its end.
    pub open_loops: usize,
}

/// A loop that has been entered and not yet exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LoopFrame {
    /// Cursor of the first instruction after the `(`.
    body: usize,
    /// Parity of the accumulator when the `(` ran.
    entry: Parity,
}

impl LoopFrame {
    fn is_done(&self, acc: Accumulator) -> bool {
        acc.get() == self.entry.exit_face()
    }
}

/// State of one run. Owned exclusively by that run.
struct Machine<'p> {
    program: &'p Program,
    acc: Accumulator,
    cursor: usize,
    loops: Vec<LoopFrame>,
    output: String,
    steps: u64,
}

impl<'p> Machine<'p> {
    fn new(program: &'p Program) -> Self {
        Self {
            program,
            acc: Accumulator::INITIAL,
            cursor: 0,
            loops: Vec::new(),
            output: String::new(),
            steps: 0,
        }
    }

    fn current(&self) -> Option<Instruction> {
        self.program.get(self.cursor)
    }

    /// Execute one instruction and return where the cursor goes next.
    fn execute(&mut self, ins: Instruction) -> usize {
        let next = self.cursor + 1;
        match ins.command {
            Command::Bump | Command::Lower | Command::Pivot => {
                self.acc = ins.command.apply(self.acc);
                next
            }
            Command::Output => {
                self.output.push(self.acc.glyph());
                next
            }
            Command::Open => {
                self.loops.push(LoopFrame {
                    body: next,
                    entry: self.acc.parity(),
                });
                next
            }
            Command::Close => match self.loops.last().copied() {
                // Stray `)`: nothing to close.
                None => next,
                Some(frame) if frame.is_done(self.acc) => {
                    debug!(
                        offset = ins.offset,
                        entry = %frame.entry,
                        depth = self.loops.len(),
                        "loop exited"
                    );
                    self.loops.pop();
                    next
                }
                Some(frame) => frame.body,
            },
        }
    }

    fn finish(self) -> Execution {
        Execution {
            output: self.output,
            steps: self.steps,
            accumulator: self.acc,
            open_loops: self.loops.len(),
        }
    }

    fn exhausted(self, limit: u64) -> StepLimitExceeded {
        StepLimitExceeded {
            limit,
            steps: self.steps,
            output: self.output,
            accumulator: self.acc,
        }
    }
}

/// Runs BLOOP programs under a fixed [`Config`].
///
/// Each call to [`Interpreter::run`] starts from a fresh accumulator of 1, an
/// empty loop stack and an empty output buffer, so one interpreter can be
/// reused for any number of programs.
///
/// Example
/// ```
/// use bloop::{Config, Interpreter, Program};
/// let interp = Interpreter::new(Config::default());
/// let run = interp.run(&Program::parse("OBOBO")).unwrap();
/// assert_eq!(run.output, "1BD");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: Config,
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run `program` until it ends or the step ceiling is reached.
    ///
    /// The ceiling is checked after every executed command, so a program of
    /// exactly `max_steps` commands is still cut off on its last one.
    pub fn run(&self, program: &Program) -> RunResult<Execution> {
        let limit = self.config.max_steps();
        debug!(commands = program.len(), limit, "starting run");

        let mut machine = Machine::new(program);
        while let Some(ins) = machine.current() {
            let before = machine.acc;
            machine.cursor = machine.execute(ins);
            machine.steps += 1;
            trace!(
                step = machine.steps,
                offset = ins.offset,
                command = %ins.command,
                before = %before,
                after = %machine.acc,
                "step"
            );

            if machine.steps >= limit {
                debug!(limit, output_len = machine.output.len(), "step limit reached");
                return Err(machine.exhausted(limit));
            }
        }

        let execution = machine.finish();
        debug!(
            steps = execution.steps,
            accumulator = %execution.accumulator,
            open_loops = execution.open_loops,
            "run finished"
        );
        Ok(execution)
    }

    /// Parse and run `source` in one go.
    pub fn run_source(&self, source: &str) -> RunResult<Execution> {
        self.run(&Program::parse(source))
    }
}

/// Run `source` with the given configuration.
pub fn interpret(source: &str, config: Config) -> RunResult<Execution> {
    Interpreter::new(config).run_source(source)
}
