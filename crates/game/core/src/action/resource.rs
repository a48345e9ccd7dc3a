//! Resource adjustments declared by an action.
//!
//! Modifiers are written `+N` or `-N`. They are parsed into [`Modifier`] when
//! an action is constructed so malformed content is rejected up front.

use std::fmt;
use std::str::FromStr;

use crate::mechanics::MechanicError;

/// Signed change to a named resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Modifier {
    Add(i64),
    Subtract(i64),
}

impl Modifier {
    /// Net signed delta this modifier applies.
    pub const fn delta(&self) -> i64 {
        match *self {
            Self::Add(amount) => amount,
            Self::Subtract(amount) => -amount,
        }
    }
}

impl FromStr for Modifier {
    type Err = MechanicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || MechanicError::InvalidModifier(s.to_string());

        let (sign, digits) = s.split_at_checked(1).ok_or_else(invalid)?;
        let amount: i64 = digits.trim().parse().map_err(|_| invalid())?;
        if amount < 0 {
            return Err(invalid());
        }

        match sign {
            "+" => Ok(Self::Add(amount)),
            "-" => Ok(Self::Subtract(amount)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Modifier {
    type Error = MechanicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Modifier> for String {
    fn from(value: Modifier) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(amount) => write!(f, "+{amount}"),
            Self::Subtract(amount) => write!(f, "-{amount}"),
        }
    }
}

/// A named resource and how an action changes it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceChange {
    pub name: String,
    pub modifier: Modifier,
}

impl ResourceChange {
    pub fn new(name: impl Into<String>, modifier: Modifier) -> Self {
        Self {
            name: name.into(),
            modifier,
        }
    }
}
