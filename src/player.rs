use crate::cards::Card;
use crate::util;
use crate::{Currency, PlayerId};
use serde::{Deserialize, Serialize};

const ID_LEN: usize = 20;

/// A participant in a hand: identity, stack, hole cards, and whether they
/// have folded. The stack is only ever debited through the pot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub chips: Currency,
    pub cards: Vec<Card>,
    pub folded: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: Currency) -> Self {
        Player {
            id: util::random_id(ID_LEN),
            name: name.into(),
            chips,
            cards: Vec::new(),
            folded: false,
        }
    }

    pub(crate) fn bet(&mut self, amount: Currency) {
        self.chips -= amount;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
