//! Arithmetic on the six faces of the die.
//!
//! The accumulator lives on the ring of integers modulo 6, but it is
//! represented by the values `1..=6` instead of `0..=5`. Every mutation goes
//! through [`wrap`], so an [`Accumulator`] can never leave that range.

use std::fmt;

/// Number of faces on the die.
pub const FACES: i64 = 6;

/// Parity of an accumulator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// 1, 3 or 5.
    Odd,
    /// 2, 4 or 6.
    Even,
}

impl Parity {
    /// Classify a face value.
    pub fn of(value: u8) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The face a loop entered with this parity waits for before exiting.
    pub fn exit_face(self) -> u8 {
        match self {
            Parity::Odd => 1,
            Parity::Even => 6,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Odd => f.write_str("odd"),
            Parity::Even => f.write_str("even"),
        }
    }
}

/// Apply `delta` to `value` and fold the result back into `1..=6`.
///
/// `%` keeps the sign of its left operand, so the remainder is shifted by
/// another `FACES` before the final reduction. `delta` is reduced first so
/// that no intermediate value can overflow.
pub fn wrap(value: u8, delta: i64) -> u8 {
    let zero_based = i64::from(value) - 1 + delta % FACES;
    ((zero_based % FACES + FACES) % FACES + 1) as u8
}

/// The single cell of BLOOP state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accumulator(u8);

impl Accumulator {
    /// Value every run starts with.
    pub const INITIAL: Accumulator = Accumulator(1);

    /// Returns `None` unless `value` is a face of the die.
    pub fn new(value: u8) -> Option<Self> {
        (1..=6).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn parity(self) -> Parity {
        Parity::of(self.0)
    }

    /// Move around the ring by `delta` faces.
    pub fn shift(self, delta: i64) -> Self {
        Self(wrap(self.0, delta))
    }

    /// The character `O` prints for this value.
    ///
    /// Odd faces print as their decimal digit, even faces as the letter at
    /// that position in the alphabet (2 is `B`, 4 is `D`, 6 is `F`).
    pub fn glyph(self) -> char {
        match self.parity() {
            Parity::Odd => char::from(b'0' + self.0),
            Parity::Even => char::from(b'A' - 1 + self.0),
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_forward() {
        assert_eq!(wrap(1, 1), 2);
        assert_eq!(wrap(3, 2), 5);
        assert_eq!(wrap(5, 1), 6);
        assert_eq!(wrap(6, 1), 1);
        assert_eq!(wrap(5, 2), 1);
        assert_eq!(wrap(4, 3), 1);
        assert_eq!(wrap(6, 3), 3);
    }

    #[test]
    fn test_wrap_backward() {
        assert_eq!(wrap(3, -1), 2);
        assert_eq!(wrap(6, -2), 4);
        assert_eq!(wrap(1, -1), 6);
        assert_eq!(wrap(1, -2), 5);
        assert_eq!(wrap(2, -3), 5);
    }

    #[test]
    fn test_wrap_zero_delta_is_identity() {
        for v in 1..=6 {
            assert_eq!(wrap(v, 0), v);
        }
    }

    #[test]
    fn test_wrap_full_revolutions() {
        assert_eq!(wrap(1, 6), 1);
        assert_eq!(wrap(1, 12), 1);
        assert_eq!(wrap(1, 7), 2);
        assert_eq!(wrap(1, -13), 6);
        assert_eq!(wrap(4, i64::MAX), wrap(4, i64::MAX % 6));
        assert_eq!(wrap(4, i64::MIN), wrap(4, i64::MIN % 6));
    }

    #[test]
    fn test_parity_of_every_face() {
        for v in [1, 3, 5] {
            assert_eq!(Parity::of(v), Parity::Odd);
        }
        for v in [2, 4, 6] {
            assert_eq!(Parity::of(v), Parity::Even);
        }
    }

    #[test]
    fn test_glyphs() {
        let glyphs: String = (1..=6)
            .map(|v| Accumulator::new(v).unwrap().glyph())
            .collect();
        assert_eq!(glyphs, "1B3D5F");
    }

    #[test]
    fn test_accumulator_rejects_values_off_the_die() {
        assert!(Accumulator::new(0).is_none());
        assert!(Accumulator::new(7).is_none());
        assert_eq!(Accumulator::default().get(), 1);
    }

    proptest! {
        #[test]
        fn wrap_stays_on_the_die(value in 1u8..=6, delta in any::<i64>()) {
            let result = wrap(value, delta);
            prop_assert!((1..=6).contains(&result));
        }

        #[test]
        fn wrap_matches_single_step_of_reduced_delta(value in 1u8..=6, delta in -1_000_000i64..1_000_000) {
            prop_assert_eq!(wrap(value, delta), wrap(value, delta.rem_euclid(FACES)));
        }

        #[test]
        fn wrap_is_congruent_to_plain_addition(value in 1u8..=6, delta in -1_000i64..1_000) {
            let result = i64::from(wrap(value, delta));
            prop_assert_eq!((result - i64::from(value) - delta).rem_euclid(FACES), 0);
        }

        #[test]
        fn parity_agrees_with_numeric_parity(value in 1u8..=6) {
            let odd = value % 2 == 1;
            prop_assert_eq!(Parity::of(value) == Parity::Odd, odd);
        }
    }
}
