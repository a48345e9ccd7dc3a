//! Card deck drawn from without replacement.
//!
//! Cards are plain tokens and may repeat. A draw picks a position uniformly
//! among the remaining cards and removes exactly that position, so duplicate
//! tokens are handled correctly and the deck shrinks by one per card drawn.

use crate::env::RngOracle;
use crate::mechanics::SeedSequence;

/// A mutable multiset of card tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Deck {
    cards: Vec<String>,
}

impl Deck {
    pub fn new<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Draws up to `count` cards without replacement.
    ///
    /// Asking for more cards than remain draws the whole deck; the returned
    /// vector is never longer than the deck was.
    pub fn draw<R>(&mut self, count: usize, rng: &R, seeds: &mut SeedSequence) -> Vec<String>
    where
        R: RngOracle + ?Sized,
    {
        let count = count.min(self.cards.len());
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let index = rng.pick_index(seeds.next_seed(), self.cards.len());
            drawn.push(self.cards.swap_remove(index));
        }
        drawn
    }
}
