pub mod bet;
pub mod blind;
pub mod cards;
pub mod hand;
pub mod log;
pub mod player;
pub mod pot;
pub mod stage;
mod util;

pub use cards::{card, deck, eval};
pub use hand::{FinishReceiver, FinishedHand, Hand};

use cards::deck::DeckError;

/// Opaque player identifier. Randomly generated at player creation.
pub type PlayerId = String;
pub type Currency = i32;
pub type SeqNum = usize;

#[derive(Debug, derive_more::Display, PartialEq, Eq)]
pub enum HandError {
    #[display(fmt = "hand requires at least 2 players")]
    NotEnoughPlayers,
    #[display(fmt = "player not found in hand")]
    UnknownPlayer,
    #[display(fmt = "played out of turn")]
    OutOfTurn,
    #[display(fmt = "hand has already begun")]
    AlreadyBegun,
    #[display(fmt = "action is not supported in the current stage")]
    UnsupportedAction,
    #[display(fmt = "bet of {} is too low; {} required", _0, _1)]
    BetTooLow(Currency, Currency),
    #[display(fmt = "bet of {} is unexpected", _0)]
    UnexpectedBetAmount(Currency),
    #[display(fmt = "blind of {} does not match required {}", _0, _1)]
    BlindMismatch(Currency, Currency),
    #[display(fmt = "cannot check while a stake is outstanding")]
    CheckWithStake,
    #[display(fmt = "final player cannot fold")]
    IllegalFold,
    #[display(fmt = "stack of {} cannot cover bet of {}", _0, _1)]
    InsufficientChips(Currency, Currency),
    #[display(fmt = "no action can be taken after the hand is won")]
    HandOver,
    #[display(fmt = "{}", _0)]
    Deck(DeckError),
}

impl std::error::Error for HandError {}

impl From<DeckError> for HandError {
    fn from(e: DeckError) -> Self {
        Self::Deck(e)
    }
}
