//! Run configuration.

/// Ceiling used when the caller does not pick one.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Knobs for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_steps: u64,
}

impl Config {
    /// A configuration with the given ceiling. Zero means "use the default".
    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: if max_steps == 0 {
                DEFAULT_MAX_STEPS
            } else {
                max_steps
            },
        }
    }

    /// Maximum number of recognized commands to execute, loop repeats included.
    /// Always positive.
    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Double the ceiling, saturating at `u64::MAX`.
    pub fn doubled(self) -> Self {
        Self {
            max_steps: self.max_steps.saturating_mul(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
