use crate::bet::Input;
use crate::cards::Card;
use crate::{Currency, PlayerId, SeqNum};
use serde::{Deserialize, Serialize};

/// One entry in the hand history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogItem {
    PocketDealt(PlayerId),
    Played(PlayerId, Input),
    Flop(Card, Card, Card),
    Turn(Card),
    River(Card),
    NextToAct(PlayerId),
    Finished(PlayerId, Currency),
}

impl std::fmt::Display for LogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogItem::PocketDealt(pid) => write!(f, "{pid} dealt a pocket"),
            LogItem::Played(pid, inp) => write!(f, "{pid} played {inp}"),
            LogItem::Flop(c1, c2, c3) => write!(f, "Flop: {c1} {c2} {c3}"),
            LogItem::Turn(c) => write!(f, "Turn: {c}"),
            LogItem::River(c) => write!(f, "River: {c}"),
            LogItem::NextToAct(pid) => write!(f, "Next to act is {pid}"),
            LogItem::Finished(pid, chips) => write!(f, "{pid} wins {chips}"),
        }
    }
}

/// Sequence-numbered history of everything that happened this hand, so a
/// caller can resume rendering from the last entry it saw.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandLog {
    items: Vec<(SeqNum, LogItem)>,
    last_seq_num: SeqNum,
}

impl HandLog {
    pub(crate) fn push(&mut self, item: LogItem) {
        let seq = self.last_seq_num + 1;
        self.items.push((seq, item));
        self.last_seq_num = seq;
    }

    pub fn items_since(&self, oldest_seq: SeqNum) -> impl Iterator<Item = (SeqNum, LogItem)> + '_ {
        self.items
            .iter()
            .skip_while(move |(seq, _item)| *seq <= oldest_seq)
            .cloned()
    }
}
