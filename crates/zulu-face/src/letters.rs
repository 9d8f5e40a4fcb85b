//! The world-time alphabet.
//!
//! Each hour of the UTC day has a letter; the letters skip `I` and `O`, and
//! midnight is `A` at both ends of the day.

/// Letter for hour-of-day `0..=24`; index 0 and 24 are both `A`.
pub const LETTERS: [char; 25] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', //  0..=12
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'A', // 13..=24
];

/// Letter for any hour value, wrapping into `0..24`.
#[inline]
pub fn letter_for_hour(hour: i64) -> char {
    LETTERS[hour.rem_euclid(24) as usize]
}
