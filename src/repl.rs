use crate::interpreter::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use tracing::{debug, warn};

const PROMPT: &str = "🎲> ";

impl Interpreter {
    /// Read-Eval-Print Loop: every line is run as its own program.
    pub fn repl(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.as_str())?;
                    println!("{}", self.eval_line(&line));
                }
                Err(err) => return end_of_session(err),
            }
        }
    }

    /// Run one line and render what the REPL should print for it.
    pub(crate) fn eval_line(&self, line: &str) -> String {
        match self.run_source(line) {
            Ok(run) => run.output,
            Err(err) => format!("{}\n{}", err.output, err),
        }
    }
}

/// Ctrl-C and Ctrl-D end the session cleanly; anything else is a failure.
fn end_of_session(err: ReadlineError) -> Result<()> {
    match err {
        ReadlineError::Interrupted | ReadlineError::Eof => {
            debug!("leaving repl");
            Ok(())
        }
        err => {
            warn!(error = %err, "readline failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::end_of_session;
    use crate::config::Config;
    use crate::interpreter::Interpreter;
    use rustyline::error::ReadlineError;
    use std::io;

    #[test]
    fn test_interrupt_and_eof_end_the_session() {
        assert!(end_of_session(ReadlineError::Interrupted).is_ok());
        assert!(end_of_session(ReadlineError::Eof).is_ok());
    }

    #[test]
    fn test_readline_failures_are_propagated() {
        let err = end_of_session(ReadlineError::Io(io::Error::other("terminal went away")));
        assert!(matches!(err, Err(ReadlineError::Io(_))));
    }

    #[test]
    fn test_eval_line_prints_output() {
        let interp = Interpreter::default();
        assert_eq!(interp.eval_line("OBOBO"), "1BD");
    }

    #[test]
    fn test_lines_do_not_share_state() {
        let interp = Interpreter::default();
        assert_eq!(interp.eval_line("BBO"), "D");
        assert_eq!(interp.eval_line("O"), "1");
    }

    #[test]
    fn test_eval_line_reports_step_limit() {
        let interp = Interpreter::new(Config::with_max_steps(10));
        assert_eq!(interp.eval_line("O(B)"), "1\nstep limit reached (10 steps)");
    }
}
