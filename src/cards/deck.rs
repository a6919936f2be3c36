use super::card::{all_cards, Card};
use base64ct::{Base64, Encoding};
use rand::prelude::*;
use rand_chacha::ChaChaRng;
use std::fmt;
use std::str::FromStr;

const DECK_LEN: usize = 52;
const SEED_LEN: usize = 32;
const ENCODED_SEED_LEN: usize = 4 * ((SEED_LEN + 3 - 1) / 3); // 4 * ceil(SEED_LEN / 3)

#[derive(Debug, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    #[display(fmt = "no more cards in deck")]
    OutOfCards,
    #[display(fmt = "{}", _0)]
    SeedDecode(base64ct::Error),
}

impl std::error::Error for DeckError {}

impl From<base64ct::Error> for DeckError {
    fn from(e: base64ct::Error) -> Self {
        Self::SeedDecode(e)
    }
}

/// A shuffled single deck. Cards are only ever removed, never reinserted, so
/// a card dealt once can never reappear within the same hand.
#[derive(Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(&DeckSeed::default())
    }
}

impl Deck {
    /// A full deck shuffled deterministically from the given seed.
    pub fn new(seed: &DeckSeed) -> Self {
        let mut cards = all_cards();
        debug_assert_eq!(cards.len(), DECK_LEN);
        let mut rng = ChaChaRng::from_seed(seed.0);
        // all_cards() is already in a known order, which keeps the shuffle
        // reproducible for a given seed.
        cards.shuffle(&mut rng);
        Deck { cards }
    }

    /// Draw the topmost card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::OutOfCards)
    }

    /// Draw a two-card pocket for a single player.
    pub fn draw_pocket(&mut self) -> Result<[Card; 2], DeckError> {
        Ok([self.draw()?, self.draw()?])
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Seed for a deterministic shuffle. Round-trips through base64 so a hand can
/// be replayed from a logged seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSeed([u8; SEED_LEN]);

impl DeckSeed {
    pub fn new(b: [u8; SEED_LEN]) -> Self {
        Self(b)
    }
}

impl Default for DeckSeed {
    fn default() -> Self {
        let mut b = [0u8; SEED_LEN];
        thread_rng().fill_bytes(&mut b);
        Self(b)
    }
}

impl fmt::Display for DeckSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b = [0u8; ENCODED_SEED_LEN];
        let s = Base64::encode(&self.0, &mut b).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

impl FromStr for DeckSeed {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut b = [0u8; SEED_LEN];
        Base64::decode(s, &mut b)?;
        Ok(DeckSeed(b))
    }
}
