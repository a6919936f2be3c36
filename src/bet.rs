use crate::Currency;
use serde::{Deserialize, Serialize};

/// The vocabulary of actions a player can submit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Blind,
    Check,
    Fold,
    Call,
    Raise,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Blind => write!(f, "Blind"),
            Action::Check => write!(f, "Check"),
            Action::Fold => write!(f, "Fold"),
            Action::Call => write!(f, "Call"),
            Action::Raise => write!(f, "Raise"),
        }
    }
}

/// An action as submitted by a caller. `chips` is ignored for Check and Fold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub action: Action,
    pub chips: Currency,
}

impl Input {
    pub const fn new(action: Action, chips: Currency) -> Self {
        Input { action, chips }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.action {
            Action::Check | Action::Fold => write!(f, "{}", self.action),
            _ => write!(f, "{}({})", self.action, self.chips),
        }
    }
}

/// The chips a move must put in: an exact amount when `minimum == maximum`,
/// or open-ended up to the `Currency::MAX` sentinel for a raise.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredBet {
    pub minimum: Currency,
    pub maximum: Currency,
}

impl RequiredBet {
    pub const fn exact(amount: Currency) -> Self {
        RequiredBet {
            minimum: amount,
            maximum: amount,
        }
    }

    pub const fn at_least(minimum: Currency) -> Self {
        RequiredBet {
            minimum,
            maximum: Currency::MAX,
        }
    }

    pub const fn none() -> Self {
        Self::exact(0)
    }
}

/// A move advertised to a player as legal before they act.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub bet: RequiredBet,
}

impl Move {
    pub const fn new(action: Action, bet: RequiredBet) -> Self {
        Move { action, bet }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_bet_bounds_agree() {
        let b = RequiredBet::exact(5);
        assert_eq!(b.minimum, b.maximum);
    }

    #[test]
    fn open_raise_is_unbounded() {
        let b = RequiredBet::at_least(2);
        assert_eq!(b.minimum, 2);
        assert_eq!(b.maximum, Currency::MAX);
    }

    #[test]
    fn input_display() {
        assert_eq!(Input::new(Action::Fold, 0).to_string(), "Fold");
        assert_eq!(Input::new(Action::Raise, 7).to_string(), "Raise(7)");
    }

    #[test]
    fn move_serializes_for_the_wire() {
        let m = Move::new(Action::Call, RequiredBet::exact(3));
        let s = serde_json::to_string(&m).unwrap();
        assert!(s.contains("\"Call\""));
        let back: Move = serde_json::from_str(&s).unwrap();
        assert_eq!(back, m);
    }
}
