pub mod card;
pub mod deck;
pub mod eval;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckSeed};
pub use eval::{best_of_seven, HandClass, HandValue};
