//! Seeded dice-roll generation.
//!
//! Produces the sample data the statistics are demonstrated on: totals of
//! rolling a handful of fair dice, such as the sum of two six-sided dice.

use std::{fmt, num::ParseIntError, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of dice and sides per die, written `NdM` (e.g. `2d6`).
///
/// # Examples
///
/// ```
/// use dicestat_dice::DiceSpec;
///
/// let spec: DiceSpec = "3d4".parse().unwrap();
/// assert_eq!(spec.count(), 3);
/// assert_eq!(spec.sides(), 4);
/// assert_eq!(spec.min_total(), 3);
/// assert_eq!(spec.max_total(), 12);
/// assert_eq!(spec.to_string(), "3d4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiceSpec {
    count: u32,
    sides: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DiceSpecError {
    #[display("invalid dice notation '{notation}', expected NdM (e.g. 2d6)")]
    Malformed { notation: String },
    #[display("at least one die is required")]
    NoDice,
    #[display("dice need at least 2 sides, got {sides}")]
    TooFewSides { sides: u32 },
}

impl DiceSpec {
    /// The two six-sided dice rolled by default.
    pub const TWO_D6: Self = Self { count: 2, sides: 6 };

    pub fn new(count: u32, sides: u32) -> Result<Self, DiceSpecError> {
        if count == 0 {
            return Err(DiceSpecError::NoDice);
        }
        if sides < 2 {
            return Err(DiceSpecError::TooFewSides { sides });
        }
        Ok(Self { count, sides })
    }

    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// The smallest possible total (every die shows 1).
    #[must_use]
    pub fn min_total(&self) -> u64 {
        u64::from(self.count)
    }

    /// The largest possible total (every die shows its highest face).
    #[must_use]
    pub fn max_total(&self) -> u64 {
        u64::from(self.count) * u64::from(self.sides)
    }
}

impl Default for DiceSpec {
    fn default() -> Self {
        Self::TWO_D6
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl FromStr for DiceSpec {
    type Err = DiceSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DiceSpecError::Malformed {
            notation: s.to_owned(),
        };
        let (count, sides) = s
            .trim()
            .split_once(['d', 'D'])
            .ok_or_else(malformed)?;
        // "d6" is a single die
        let count = if count.is_empty() {
            1
        } else {
            count.parse().map_err(|_| malformed())?
        };
        let sides = sides.parse().map_err(|_| malformed())?;
        Self::new(count, sides)
    }
}

/// A 128-bit seed for deterministic dice rolls.
///
/// Rolling with the same seed and [`DiceSpec`] always yields the same
/// totals, so a run can be reproduced by passing its seed back in.
/// Seeds are written as up to 32 hexadecimal digits.
///
/// # Examples
///
/// ```
/// use dicestat_dice::{DiceRoller, DiceSeed, DiceSpec};
/// use rand::Rng as _;
///
/// let seed: DiceSeed = rand::rng().random();
/// let first = DiceRoller::with_seed(seed, DiceSpec::TWO_D6).roll_many(20);
/// let second = DiceRoller::with_seed(seed, DiceSpec::TWO_D6).roll_many(20);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DiceSeedError {
    #[display("invalid seed: expected 1 to 32 hex digits, got {len} characters")]
    Length { len: usize },
    #[display("invalid seed '{seed}': {source}")]
    Hex { seed: String, source: ParseIntError },
}

impl From<u128> for DiceSeed {
    fn from(num: u128) -> Self {
        Self(num.to_be_bytes())
    }
}

impl fmt::Display for DiceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for DiceSeed {
    type Err = DiceSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.len() > 32 {
            return Err(DiceSeedError::Length { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|source| DiceSeedError::Hex {
            seed: s.to_owned(),
            source,
        })?;
        Ok(Self::from(num))
    }
}

impl Serialize for DiceSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DiceSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `DiceSeed` values with `rng.random()`.
impl Distribution<DiceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DiceSeed(seed)
    }
}

/// Rolls dice and reports their totals.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: Pcg32,
    spec: DiceSpec,
}

impl DiceRoller {
    /// Creates a roller with a random seed.
    ///
    /// For reproducible rolls, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new(spec: DiceSpec) -> Self {
        Self::with_seed(rand::rng().random(), spec)
    }

    /// Like [`Self::new`], but with a specific seed for deterministic rolls.
    #[must_use]
    pub fn with_seed(seed: DiceSeed, spec: DiceSpec) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            spec,
        }
    }

    #[must_use]
    pub fn spec(&self) -> DiceSpec {
        self.spec
    }

    /// Rolls every die once and returns the sum of their faces.
    pub fn roll(&mut self) -> u64 {
        let DiceSpec { count, sides } = self.spec;
        (0..count)
            .map(|_| u64::from(self.rng.random_range(1..=sides)))
            .sum()
    }

    /// Returns the totals of `n` successive rolls.
    pub fn roll_many(&mut self, n: usize) -> Vec<u64> {
        (0..n).map(|_| self.roll()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dice_spec() {
        assert_eq!("2d6".parse(), Ok(DiceSpec::TWO_D6));
        assert_eq!("2D6".parse(), Ok(DiceSpec::TWO_D6));
        assert_eq!(" d20 ".parse(), DiceSpec::new(1, 20));
    }

    #[test]
    fn test_parse_dice_spec_errors() {
        for notation in ["", "6", "2x6", "2d", "-1d6", "2d6.5"] {
            assert_eq!(
                notation.parse::<DiceSpec>(),
                Err(DiceSpecError::Malformed {
                    notation: notation.to_owned()
                }),
                "notation: {notation:?}"
            );
        }
        assert_eq!("0d6".parse::<DiceSpec>(), Err(DiceSpecError::NoDice));
        assert_eq!(
            "2d1".parse::<DiceSpec>(),
            Err(DiceSpecError::TooFewSides { sides: 1 })
        );
    }

    #[test]
    fn test_dice_spec_round_trip_display() {
        let spec = DiceSpec::new(4, 10).unwrap();
        assert_eq!(spec.to_string().parse(), Ok(spec));
    }

    #[test]
    fn test_rolls_within_range() {
        let spec = DiceSpec::TWO_D6;
        let mut roller = DiceRoller::with_seed(DiceSeed::from(42), spec);
        let totals = roller.roll_many(1000);
        assert_eq!(totals.len(), 1000);
        assert!(
            totals
                .iter()
                .all(|t| (spec.min_total()..=spec.max_total()).contains(t))
        );
        // 1000 rolls of 2d6 hit both 7 and something other than 7
        assert!(totals.contains(&7));
        assert!(totals.iter().any(|&t| t != 7));
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let seed = DiceSeed::from(0x0123_4567_89ab_cdef);
        let spec = DiceSpec::new(3, 8).unwrap();
        let a = DiceRoller::with_seed(seed, spec).roll_many(50);
        let b = DiceRoller::with_seed(seed, spec).roll_many(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = DiceRoller::with_seed(DiceSeed::from(1), DiceSpec::TWO_D6).roll_many(50);
        let b = DiceRoller::with_seed(DiceSeed::from(2), DiceSpec::TWO_D6).roll_many(50);
        assert_ne!(a, b);
    }

    #[test]
    fn test_seed_display_and_parse() {
        let seed = DiceSeed::from(0xabc);
        assert_eq!(seed.to_string(), format!("{:032x}", 0xabc));
        assert_eq!("abc".parse(), Ok(seed));
        assert_eq!(seed.to_string().parse(), Ok(seed));
    }

    #[test]
    fn test_seed_parse_errors() {
        assert_eq!(
            "".parse::<DiceSeed>(),
            Err(DiceSeedError::Length { len: 0 })
        );
        assert_eq!(
            "0".repeat(33).parse::<DiceSeed>(),
            Err(DiceSeedError::Length { len: 33 })
        );
        assert!(matches!(
            "xyz".parse::<DiceSeed>(),
            Err(DiceSeedError::Hex { .. })
        ));
    }

    #[test]
    fn test_seed_serde() {
        let seed = DiceSeed::from(255);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, format!("\"{:032x}\"", 255));
        let back: DiceSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }
}
