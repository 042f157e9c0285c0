//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one generation run.
///
/// The seed is rendered and parsed as 64 lowercase hex digits. The search RNG
/// is keyed by the SHA-256 digest of the seed bytes, so any seed value
/// stretches to a full, uniformly mixed RNG state, and the same seed always
/// reproduces the same puzzle.
///
/// # Examples
///
/// ```
/// use gridforge_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1"
///     .parse()?;
/// assert_eq!(seed.to_string().len(), 64);
/// # Ok::<(), gridforge_generator::SeedParseError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; Self::LEN]);

impl PuzzleSeed {
    /// The seed length in bytes.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from operating-system entropy.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; Self::LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Builds the deterministic RNG for this seed.
    pub(crate) fn rng(&self) -> Pcg64 {
        let digest: [u8; 32] = Sha256::digest(self.0).into();
        Pcg64::from_seed(digest)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, SeedParseError> {
        let digits: Vec<char> = s.chars().collect();
        if digits.len() != 2 * Self::LEN {
            return Err(SeedParseError::InvalidLength {
                length: digits.len(),
            });
        }
        let mut bytes = [0; Self::LEN];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks(2)) {
            let mut value = 0u8;
            for &c in pair {
                let digit =
                    c.to_digit(16)
                        .ok_or(SeedParseError::InvalidDigit { character: c })?;
                #[expect(clippy::cast_possible_truncation)]
                {
                    value = value << 4 | digit as u8;
                }
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

/// Errors from parsing a [`PuzzleSeed`] out of a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string did not contain exactly 64 hex digits.
    #[display("seed must be 64 hex digits, got {length}")]
    InvalidLength {
        /// The number of characters found.
        length: usize,
    },
    /// A character was not a hex digit.
    #[display("invalid hex digit {character:?} in seed")]
    InvalidDigit {
        /// The offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        assert_eq!(seed.to_string(), "ab".repeat(32));
        assert_eq!(seed.to_string().parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { length: 4 })
        );
        assert_eq!(
            format!("{HEX}0").parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidLength { length: 65 })
        );
    }

    #[test]
    fn test_rejects_non_hex_digits() {
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(SeedParseError::InvalidDigit { character: 'g' })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        // Collisions are possible in principle, vanishingly unlikely in a
        // 256-bit space.
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    #[test]
    fn test_rng_is_deterministic() {
        use rand::Rng as _;

        let seed: PuzzleSeed = HEX.parse().unwrap();
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
