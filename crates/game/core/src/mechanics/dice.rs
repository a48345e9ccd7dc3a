use std::fmt;
use std::str::FromStr;

use crate::env::RngOracle;
use crate::mechanics::{MechanicError, SeedSequence};

/// `<count>d<sides>` dice specification, e.g. `2d6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
}

impl DiceSpec {
    /// Most dice a single spec may roll.
    pub const MAX_COUNT: u32 = 100;
    /// Most faces a single die may have.
    pub const MAX_SIDES: u32 = 1000;

    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    fn is_within_limits(&self) -> bool {
        (1..=Self::MAX_COUNT).contains(&self.count) && (1..=Self::MAX_SIDES).contains(&self.sides)
    }

    /// Rolls every die with faces in `[lowest, sides]` and sums them.
    ///
    /// Each die consumes one seed from `seeds`. A `lowest` of 0 counts as 1.
    ///
    /// # Errors
    ///
    /// - `InvalidDiceSpec` if count or sides are zero or above the limits
    /// - `FloorAboveSides` if `lowest` is greater than `sides`
    pub fn roll<R>(
        &self,
        rng: &R,
        seeds: &mut SeedSequence,
        lowest: u32,
    ) -> Result<DiceRoll, MechanicError>
    where
        R: RngOracle + ?Sized,
    {
        if !self.is_within_limits() {
            return Err(MechanicError::InvalidDiceSpec(self.to_string()));
        }
        let lowest = lowest.max(1);
        if lowest > self.sides {
            return Err(MechanicError::FloorAboveSides {
                lowest,
                sides: self.sides,
            });
        }

        let faces: Vec<u32> = (0..self.count)
            .map(|_| rng.range(seeds.next_seed(), lowest, self.sides))
            .collect();
        let total = faces.iter().map(|&face| u64::from(face)).sum();

        Ok(DiceRoll {
            spec: *self,
            faces,
            total,
        })
    }
}

impl FromStr for DiceSpec {
    type Err = MechanicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MechanicError::InvalidDiceSpec(s.to_string());

        let (count, sides) = s
            .trim()
            .split_once(['d', 'D'])
            .ok_or_else(invalid)?;
        let count: u32 = count.trim().parse().map_err(|_| invalid())?;
        let sides: u32 = sides.trim().parse().map_err(|_| invalid())?;

        let spec = Self { count, sides };
        if !spec.is_within_limits() {
            return Err(invalid());
        }
        Ok(spec)
    }
}

impl fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Outcome of a dice roll: the individual faces and their sum.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiceRoll {
    pub spec: DiceSpec,
    pub faces: Vec<u32>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn parses_count_and_sides() {
        assert_eq!("2d6".parse::<DiceSpec>(), Ok(DiceSpec::new(2, 6)));
        assert_eq!(" 3D4 ".parse::<DiceSpec>(), Ok(DiceSpec::new(3, 4)));
        assert_eq!(DiceSpec::new(1, 20).to_string(), "1d20");
    }

    #[test]
    fn rejects_malformed_specs() {
        for raw in [
            "d6",
            "2d",
            "0d6",
            "2d0",
            "two d six",
            "26",
            "",
            "4000000000d6",
            "101d6",
            "1d1001",
        ] {
            assert!(raw.parse::<DiceSpec>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn two_d_six_stays_within_bounds() {
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(42);
        let spec = DiceSpec::new(2, 6);

        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..10_000 {
            let roll = spec.roll(&rng, &mut seeds, 1).unwrap();
            assert_eq!(roll.faces.len(), 2);
            assert!((2..=12).contains(&roll.total), "rolled {}", roll.total);
            seen_low |= roll.total == 2;
            seen_high |= roll.total == 12;
        }
        assert!(seen_low && seen_high, "extremes should appear over 10k rolls");
    }

    #[test]
    fn lowest_face_raises_the_floor() {
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(7);
        let roll = DiceSpec::new(4, 6).roll(&rng, &mut seeds, 3).unwrap();
        assert!(roll.faces.iter().all(|face| (3..=6).contains(face)));
        assert!((12..=24).contains(&roll.total));
    }

    #[test]
    fn same_seed_same_roll() {
        let rng = PcgRng;
        let spec = DiceSpec::new(3, 8);
        let a = spec.roll(&rng, &mut SeedSequence::new(99), 1);
        let b = spec.roll(&rng, &mut SeedSequence::new(99), 1);
        assert_eq!(a, b);
    }

    #[test]
    fn accepts_specs_at_the_limits() {
        assert_eq!(
            "100d1000".parse::<DiceSpec>(),
            Ok(DiceSpec::new(DiceSpec::MAX_COUNT, DiceSpec::MAX_SIDES))
        );
    }

    #[test]
    fn floor_above_sides_is_rejected() {
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(1);
        assert_eq!(
            DiceSpec::new(2, 6).roll(&rng, &mut seeds, 10),
            Err(MechanicError::FloorAboveSides {
                lowest: 10,
                sides: 6
            })
        );
        assert_eq!(seeds, SeedSequence::new(1), "no seed consumed on error");

        let roll = DiceSpec::new(3, 6).roll(&rng, &mut seeds, 6).unwrap();
        assert_eq!(roll.total, 18);
    }

    #[test]
    fn zero_floor_never_shows_zero() {
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(3);
        for _ in 0..1_000 {
            let roll = DiceSpec::new(1, 2).roll(&rng, &mut seeds, 0).unwrap();
            assert!((1..=2).contains(&roll.faces[0]));
        }
    }

    #[test]
    fn oversized_constructed_spec_is_not_rolled() {
        let rng = PcgRng;
        let mut seeds = SeedSequence::new(1);
        assert!(matches!(
            DiceSpec::new(4_000_000_000, 6).roll(&rng, &mut seeds, 1),
            Err(MechanicError::InvalidDiceSpec(_))
        ));
    }
}
