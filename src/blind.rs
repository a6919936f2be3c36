use crate::{Currency, HandError};

/// A single player's forced bet during the opening round: how much they owe
/// and how much they have put in so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blind {
    required: Currency,
    contributed: Currency,
}

impl Blind {
    pub fn new(required: Currency) -> Self {
        Blind {
            required,
            contributed: 0,
        }
    }

    pub const fn required(&self) -> Currency {
        self.required
    }

    /// What is still owed. Zero once posted.
    pub fn outstanding(&self) -> Currency {
        (self.required - self.contributed).max(0)
    }

    pub fn played(&self) -> bool {
        self.contributed >= self.required
    }

    /// Post the blind. Unlike an ordinary bet, the amount must match the
    /// required value exactly. Returns the posted blind; `self` is unchanged.
    pub fn play(&self, value: Currency) -> Result<Blind, HandError> {
        if value != self.required {
            return Err(HandError::BlindMismatch(value, self.required));
        }
        Ok(Blind {
            required: self.required,
            contributed: value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_post_only() {
        let b = Blind::new(2);
        assert_eq!(b.play(1), Err(HandError::BlindMismatch(1, 2)));
        assert_eq!(b.play(3), Err(HandError::BlindMismatch(3, 2)));
        let posted = b.play(2).unwrap();
        assert!(posted.played());
        assert_eq!(posted.outstanding(), 0);
        // the original is untouched
        assert!(!b.played());
        assert_eq!(b.outstanding(), 2);
    }

    #[test]
    fn zero_blind_is_already_played() {
        assert!(Blind::new(0).played());
    }
}
