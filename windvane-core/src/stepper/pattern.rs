//! Phase output patterns
//!
//! ```text
//!  phase   CCW    CW
//!    0    0001   1000
//!    1    0010   0100
//!    2    0100   0010
//!    3    1000   0001
//! ```
//!
//! The phase index always advances upward; the direction decides whether
//! the energized coil walks left (CCW) or right (CW).

#[cfg(feature = "defmt")]
use defmt::Format;

/// Number of phases in one electrical cycle
pub const PHASE_COUNT: u8 = 4;

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Direction {
    /// Clockwise rotation
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Coil output pattern for `phase` in `direction`
///
/// Bit `n` drives phase output `n`. Exactly one bit is set.
pub fn phase_pattern(phase: u8, direction: Direction) -> u8 {
    1 << active_coil(phase, direction)
}

/// Index of the coil energized at `phase` in `direction`
pub fn active_coil(phase: u8, direction: Direction) -> u8 {
    let phase = phase % PHASE_COUNT;
    match direction {
        Direction::CounterClockwise => phase,
        Direction::Clockwise => PHASE_COUNT - 1 - phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ccw_walks_left_from_bit_zero() {
        let seq: [u8; 4] =
            core::array::from_fn(|p| phase_pattern(p as u8, Direction::CounterClockwise));
        assert_eq!(seq, [0b0001, 0b0010, 0b0100, 0b1000]);
    }

    #[test]
    fn test_cw_walks_right_from_bit_three() {
        let seq: [u8; 4] = core::array::from_fn(|p| phase_pattern(p as u8, Direction::Clockwise));
        assert_eq!(seq, [0b1000, 0b0100, 0b0010, 0b0001]);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Clockwise.opposite(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.opposite(), Direction::Clockwise);
    }

    fn reverse_nibble(bits: u8) -> u8 {
        (0..4).fold(0, |acc, n| acc | (((bits >> n) & 1) << (3 - n)))
    }

    proptest! {
        #[test]
        fn prop_cw_is_bit_reverse_of_ccw(phase in any::<u8>()) {
            let ccw = phase_pattern(phase, Direction::CounterClockwise);
            let cw = phase_pattern(phase, Direction::Clockwise);
            prop_assert_eq!(cw, reverse_nibble(ccw));
        }

        #[test]
        fn prop_single_coil_energized(phase in any::<u8>(), cw in any::<bool>()) {
            let dir = if cw { Direction::Clockwise } else { Direction::CounterClockwise };
            let pattern = phase_pattern(phase, dir);
            prop_assert_eq!(pattern.count_ones(), 1);
            prop_assert!(pattern <= 0b1000);
        }

        #[test]
        fn prop_coils_walk_in_opposite_directions(phase in 0u8..4) {
            let next = (phase + 1) % PHASE_COUNT;
            let ccw_step = (active_coil(next, Direction::CounterClockwise) + 4
                - active_coil(phase, Direction::CounterClockwise)) % 4;
            let cw_step = (active_coil(next, Direction::Clockwise) + 4
                - active_coil(phase, Direction::Clockwise)) % 4;
            prop_assert_eq!(ccw_step, 1);
            prop_assert_eq!(cw_step, 3);
        }
    }
}
