use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The 52-card deck a hand is dealt from. Cards are dealt positionally, so
/// a card that has left the deck cannot reappear within the same hand.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Deck with an OS-entropy RNG. ChaCha20 carries 256 bits of seed
    /// state, enough to reach any of the 52! orderings.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::from_os_rng(),
        }
    }

    /// Deterministic deck for tests and replay: the same seed yields the
    /// same sequence of shuffles.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Rebuild the full 52 cards and shuffle them (Fisher-Yates via
    /// `SliceRandom`). Called once per hand before any dealing.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Install a fixed card order for one hand. Leaves the RNG alone so
    /// later shuffled hands are unaffected. The caller validates the
    /// cards; the deck just deals what it is given.
    pub(crate) fn set_order(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.position = 0;
    }

    /// Remove and return the top card, or `None` when the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
