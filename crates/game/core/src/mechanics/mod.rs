//! Randomized sub-mechanics the umpire may invoke while ruling on a turn.
//!
//! - [`DiceSpec`] / [`DiceRoll`]: `<count>d<sides>` rolls
//! - [`SeedSequence`]: per-draw seed derivation so every die and card pulls
//!   from an independent, reproducible stream
//!
//! Card draws live on [`crate::state::Deck`] because the deck is game state.

mod dice;
mod seed;

pub use dice::{DiceRoll, DiceSpec};
pub use seed::SeedSequence;

use crate::error::{ErrorSeverity, GameError};

/// Sub-mechanic tags understood by the necessity oracle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MechanicKind {
    #[strum(serialize = "DICE")]
    #[cfg_attr(feature = "serde", serde(rename = "DICE"))]
    Dice,
    #[strum(serialize = "CARD")]
    #[cfg_attr(feature = "serde", serde(rename = "CARD"))]
    Card,
}

/// Errors raised while interpreting sub-mechanic parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MechanicError {
    /// Dice spec was not `<count>d<sides>` with both parts positive and
    /// within [`DiceSpec::MAX_COUNT`] / [`DiceSpec::MAX_SIDES`].
    #[error("invalid dice spec '{0}', expected <count>d<sides>")]
    InvalidDiceSpec(String),

    /// The configured lowest face is above the die's highest face.
    #[error("lowest face {lowest} exceeds the {sides} sides of a d{sides}")]
    FloorAboveSides { lowest: u32, sides: u32 },

    /// Card count was not a non-negative integer.
    #[error("invalid card count '{0}'")]
    InvalidCardCount(String),

    /// Resource modifier was not `+N` or `-N`.
    #[error("invalid resource modifier '{0}', expected +N or -N")]
    InvalidModifier(String),
}

impl GameError for MechanicError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Content
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDiceSpec(_) => "MECHANIC_INVALID_DICE_SPEC",
            Self::FloorAboveSides { .. } => "MECHANIC_FLOOR_ABOVE_SIDES",
            Self::InvalidCardCount(_) => "MECHANIC_INVALID_CARD_COUNT",
            Self::InvalidModifier(_) => "MECHANIC_INVALID_MODIFIER",
        }
    }
}

/// Parses the card count carried in a necessity verdict.
pub fn parse_card_count(spec: &str) -> Result<usize, MechanicError> {
    spec.trim()
        .parse()
        .map_err(|_| MechanicError::InvalidCardCount(spec.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mechanic_kind_round_trips_its_tag() {
        assert_eq!("DICE".parse::<MechanicKind>(), Ok(MechanicKind::Dice));
        assert_eq!("card".parse::<MechanicKind>(), Ok(MechanicKind::Card));
        assert_eq!(MechanicKind::Card.to_string(), "CARD");
        assert!("COIN".parse::<MechanicKind>().is_err());
    }

    #[test]
    fn card_count_must_be_numeric() {
        assert_eq!(parse_card_count(" 3 "), Ok(3));
        assert_eq!(
            parse_card_count("three"),
            Err(MechanicError::InvalidCardCount("three".into()))
        );
    }
}
