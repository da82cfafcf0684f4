//! Cosmetic commentary printed around a run.
//!
//! Nothing in here is visible to the interpreter. Randomness comes from a
//! caller-supplied [`Rng`] so tests can pin it with a seed.

use rand::Rng;
use std::time::Duration;

/// Source that earns the player a doubled step ceiling.
pub const KONAMI_CODE: &str = "BBLLBBLL";

pub const BLAME: &str = "It's not a bug, it's a BLOOP.";

pub const RICK_ROLL: &str = "\
Never gonna give you up
Never gonna let you down
Never gonna run around and desert you
Never gonna make you cry
Never gonna say goodbye
Never gonna tell a lie and hurt you";

const STEP_LIMIT_QUIPS: &[&str] = &[
    "I gave you a million steps and THIS is what you do?",
    "Congratulations, you've created nothing.",
    "Even the die is tired of rolling.",
    "Infinity called. It wants its loop back.",
    "Your program ran longer than your attention span.",
    "The accumulator begs for mercy.",
    "Did you really think this would terminate?",
    "Step limit reached. Hope was lost long ago.",
];

const ZEN_KOANS: &[&str] = &[
    "The unrolled die contains all faces.",
    "In emptiness, the accumulator finds peace.",
    "To BLOOP nothing is to BLOOP everything.",
    "The blank program has already finished. Have you?",
    "No commands, no bugs. Perfection.",
    "The wisest BLOOP program is the one never written.",
];

const EXISTENTIAL_SUFFIXES: &[&str] = &[
    " (but does it matter?)",
    " (in the grand scheme of things)",
    " (or so the die claims)",
    " (if you even believe in numbers)",
    " (the void stares back)",
    " (temporarily)",
];

/// Picks random lines from the flavor tables.
pub struct Flavor<R> {
    rng: R,
}

impl<R: Rng> Flavor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, table: &'static [&'static str]) -> &'static str {
        table[self.rng.gen_range(0..table.len())]
    }

    /// Served when the source has text but no commands.
    pub fn koan(&mut self) -> &'static str {
        self.pick(ZEN_KOANS)
    }

    /// Printed above the step limit error.
    pub fn step_limit_quip(&mut self) -> &'static str {
        self.pick(STEP_LIMIT_QUIPS)
    }

    /// Follow every printed character with a remark about its significance.
    pub fn existential(&mut self, output: &str) -> String {
        let mut decorated = String::with_capacity(output.len() * 24);
        for ch in output.chars() {
            decorated.push(ch);
            decorated.push_str(self.pick(EXISTENTIAL_SUFFIXES));
        }
        decorated
    }
}

/// Verdict printed after a `--speedrun`.
pub fn speedrun_verdict(elapsed: Duration) -> &'static str {
    let us = elapsed.as_micros();
    let ms = elapsed.as_millis();
    if us < 100 {
        "ohh your girl would be disappointed with how fast you finished"
    } else if us < 1_000 {
        "blink and you missed it"
    } else if ms < 10 {
        "faster than your wifi"
    } else if ms < 100 {
        "not bad, not bad"
    } else if ms == 420 {
        "nice."
    } else if ms < 1_000 {
        "the die took a scenic route"
    } else {
        "are you running this on a potato?"
    }
}

/// Checked against the text actually printed, commentary included.
///
/// `O` only ever prints `1B3D5F`, so plain program output never qualifies.
pub fn is_nice(output: &str) -> bool {
    matches!(output, "69" | "420")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded() -> Flavor<StdRng> {
        Flavor::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_picks_come_from_their_tables() {
        let mut flavor = seeded();
        for _ in 0..32 {
            assert!(ZEN_KOANS.contains(&flavor.koan()));
            assert!(STEP_LIMIT_QUIPS.contains(&flavor.step_limit_quip()));
        }
    }

    #[test]
    fn test_same_seed_same_commentary() {
        let a = seeded().existential("1BD");
        let b = seeded().existential("1BD");
        assert_eq!(a, b);
    }

    #[test]
    fn test_existential_keeps_every_character_in_order() {
        let decorated = seeded().existential("1BD");
        let mut rest = decorated.as_str();
        for ch in ['1', 'B', 'D'] {
            assert!(rest.starts_with(ch), "{decorated:?}");
            rest = &rest[1..];
            let suffix = EXISTENTIAL_SUFFIXES
                .iter()
                .find(|s| rest.starts_with(**s))
                .expect("suffix follows each character");
            rest = &rest[suffix.len()..];
        }
        assert!(rest.is_empty());
        assert_eq!(seeded().existential(""), "");
    }

    #[test]
    fn test_speedrun_verdicts() {
        assert_eq!(
            speedrun_verdict(Duration::from_micros(5)),
            "ohh your girl would be disappointed with how fast you finished"
        );
        assert_eq!(speedrun_verdict(Duration::from_micros(500)), "blink and you missed it");
        assert_eq!(speedrun_verdict(Duration::from_millis(5)), "faster than your wifi");
        assert_eq!(speedrun_verdict(Duration::from_millis(50)), "not bad, not bad");
        assert_eq!(speedrun_verdict(Duration::from_millis(420)), "nice.");
        assert_eq!(speedrun_verdict(Duration::from_millis(421)), "the die took a scenic route");
        assert_eq!(speedrun_verdict(Duration::from_secs(3)), "are you running this on a potato?");
    }

    #[test]
    fn test_nice() {
        assert!(is_nice("69"));
        assert!(is_nice("420"));
        assert!(!is_nice("1BD"));
        assert!(!is_nice("1B3D5F"));
    }
}
