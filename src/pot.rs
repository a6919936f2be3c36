use crate::player::Player;
use crate::{Currency, PlayerId};
use std::collections::HashMap;

/// The ledger of chips wagered this hand, keyed by player. Contributions only
/// ever grow, and nothing is reset between betting rounds, so `required` is
/// always relative to the hand-lifetime maximum stake.
///
/// The pot does no affordability checks; callers validate a player can cover
/// an amount before adding it.
#[derive(Debug, Default)]
pub struct Pot {
    contribs: HashMap<PlayerId, Currency>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Debit the player's stack and credit their ledger entry.
    pub fn add(&mut self, player: &mut Player, amount: Currency) {
        player.bet(amount);
        *self.contribs.entry(player.id.clone()).or_default() += amount;
    }

    pub fn contribution(&self, player: &Player) -> Currency {
        self.contribs.get(&player.id).copied().unwrap_or_default()
    }

    fn max_stake(&self) -> Currency {
        self.contribs.values().copied().max().unwrap_or_default()
    }

    /// The minimum additional contribution needed to match the table's
    /// current maximum stake. Never negative: raises are capped at the point
    /// they are applied, so no contribution exceeds the maximum.
    pub fn required(&self, player: &Player) -> Currency {
        self.max_stake() - self.contribution(player)
    }

    /// True while some player in `active` still owes a call. Folded players'
    /// contributions stay in the ledger but no longer hold the round open.
    pub fn outstanding_stake<'a>(&self, active: impl IntoIterator<Item = &'a Player>) -> bool {
        active.into_iter().any(|p| self.required(p) != 0)
    }

    /// Everything wagered this hand; paid to the winner.
    pub fn total(&self) -> Currency {
        self.contribs.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(format!("p{}", i + 1), 10)).collect()
    }

    #[test]
    fn required_tracks_max_stake() {
        let mut ps = players(3);
        let mut pot = Pot::new();
        pot.add(&mut ps[0], 5);
        assert_eq!(pot.required(&ps[0]), 0);
        assert_eq!(pot.required(&ps[1]), 5);
        pot.add(&mut ps[1], 5);
        pot.add(&mut ps[2], 8);
        assert_eq!(pot.required(&ps[0]), 3);
        assert_eq!(pot.required(&ps[1]), 3);
        assert_eq!(pot.required(&ps[2]), 0);
        assert_eq!(pot.total(), 18);
    }

    #[test]
    fn add_debits_the_player() {
        let mut ps = players(1);
        let mut pot = Pot::new();
        pot.add(&mut ps[0], 4);
        assert_eq!(ps[0].chips, 6);
        assert_eq!(pot.contribution(&ps[0]), 4);
    }

    #[test]
    fn outstanding_stake_ignores_folded() {
        let mut ps = players(3);
        let mut pot = Pot::new();
        pot.add(&mut ps[0], 1);
        pot.add(&mut ps[1], 2);
        pot.add(&mut ps[2], 2);
        assert!(pot.outstanding_stake(ps.iter()));
        // the short contributor folds and drops out of the active set
        assert!(!pot.outstanding_stake(ps.iter().skip(1)));
    }

    #[test]
    fn empty_pot_requires_nothing() {
        let ps = players(1);
        let pot = Pot::new();
        assert_eq!(pot.required(&ps[0]), 0);
        assert_eq!(pot.total(), 0);
        assert!(!pot.outstanding_stake(ps.iter()));
    }
}
