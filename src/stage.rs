//! The betting-round state machine: Preflop collects forced bets, one shared
//! betting engine plays Flop/Turn/River, and Won settles the hand.

use crate::bet::{Action, Input, Move, RequiredBet};
use crate::blind::Blind;
use crate::cards::eval::best_of_seven;
use crate::hand::{Core, FinishedHand};
use crate::log::LogItem;
use crate::{Currency, HandError, PlayerId};
use std::collections::HashMap;

/// The three community-card betting rounds. Each knows how many cards must be
/// on the board when it starts and which round follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    Flop,
    Turn,
    River,
}

impl Round {
    pub fn board_size(self) -> usize {
        match self {
            Round::Flop => 3,
            Round::Turn => 4,
            Round::River => 5,
        }
    }

    /// The round after this one; None means showdown.
    fn next(self) -> Option<Round> {
        match self {
            Round::Flop => Some(Round::Turn),
            Round::Turn => Some(Round::River),
            Round::River => None,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Stage {
    Preflop(PreflopStage),
    Betting(BettingStage),
    Won(WonStage),
}

#[derive(Debug)]
pub(crate) struct PreflopStage {
    blinds: HashMap<PlayerId, Blind>,
    /// How many seats from the dealer owe a blind; first to act post-blinds
    /// is the seat after them.
    schedule_len: usize,
}

#[derive(Debug)]
pub(crate) struct BettingStage {
    round: Round,
    /// Players active when the round opened. The round cannot close until at
    /// least this many plays have been made.
    initial: Vec<PlayerId>,
    plays: Vec<Input>,
}

#[derive(Debug)]
pub(crate) struct WonStage {
    /// Players present at showdown, in rotation order from the dealer.
    players: Vec<PlayerId>,
}

impl Stage {
    /// The stage a new hand starts in: Preflop when a blind schedule is
    /// given, otherwise straight to the flop.
    pub(crate) fn initial(players: &[crate::player::Player], blinds: &[Currency]) -> Stage {
        if blinds.is_empty() {
            return Stage::betting(Round::Flop, players.iter().map(|p| p.id.clone()).collect());
        }
        let map = players
            .iter()
            .zip(blinds.iter())
            .map(|(p, b)| (p.id.clone(), Blind::new(*b)))
            .collect();
        Stage::Preflop(PreflopStage {
            blinds: map,
            schedule_len: blinds.len().min(players.len()),
        })
    }

    fn betting(round: Round, initial: Vec<PlayerId>) -> Stage {
        Stage::Betting(BettingStage {
            round,
            initial,
            plays: Vec::new(),
        })
    }

    pub(crate) fn is_won(&self) -> bool {
        matches!(self, Stage::Won(_))
    }

    /// Called when the hand moves into this stage. Betting rounds reveal
    /// community cards; Won runs the showdown and delivers the result.
    pub(crate) fn enter(&self, core: &mut Core) -> Result<(), HandError> {
        match self {
            Stage::Preflop(_) => Ok(()),
            Stage::Betting(bs) => core.deal_community(bs.round),
            Stage::Won(ws) => ws.enter(core),
        }
    }

    /// Called when the hand leaves this stage; positions the turn pointer for
    /// whatever comes next.
    pub(crate) fn exit(&self, core: &mut Core) {
        match self {
            Stage::Preflop(pf) => core.play_from_seat(pf.schedule_len),
            Stage::Betting(_) => core.play_from_seat(0),
            Stage::Won(_) => {}
        }
    }

    /// Apply one validated-turn input from the player at `seat`. `Some(next)`
    /// means the round closed and the hand should transition; `None` means
    /// the round continues and the turn passes on.
    pub(crate) fn handle_input(
        &mut self,
        core: &mut Core,
        seat: usize,
        input: Input,
    ) -> Result<Option<Stage>, HandError> {
        match self {
            Stage::Preflop(pf) => pf.handle_input(core, seat, input),
            Stage::Betting(bs) => bs.handle_input(core, seat, input),
            Stage::Won(_) => Err(HandError::HandOver),
        }
    }

    /// Moves legal for the player currently due to act.
    pub(crate) fn valid_moves(&self, core: &Core) -> HashMap<PlayerId, Vec<Move>> {
        let mut moves = HashMap::new();
        let player = match (self, core.next_player()) {
            (Stage::Won(_), _) | (_, None) => return moves,
            (_, Some(p)) => p,
        };
        match self {
            Stage::Preflop(pf) => {
                let owed = pf.outstanding(&player.id);
                moves.insert(
                    player.id.clone(),
                    vec![Move::new(Action::Blind, RequiredBet::exact(owed))],
                );
            }
            Stage::Betting(_) => {
                let required = core.pot.required(player);
                let mut mvs = vec![Move::new(Action::Fold, RequiredBet::none())];
                if required == 0 {
                    mvs.push(Move::new(Action::Check, RequiredBet::none()));
                } else {
                    mvs.push(Move::new(Action::Call, RequiredBet::exact(required)));
                }
                mvs.push(Move::new(Action::Raise, RequiredBet::at_least(required)));
                moves.insert(player.id.clone(), mvs);
            }
            Stage::Won(_) => {}
        }
        moves
    }
}

impl PreflopStage {
    fn outstanding(&self, id: &PlayerId) -> Currency {
        self.blinds.get(id).map(Blind::outstanding).unwrap_or(0)
    }

    fn handle_input(
        &mut self,
        core: &mut Core,
        seat: usize,
        input: Input,
    ) -> Result<Option<Stage>, HandError> {
        if input.action != Action::Blind {
            return Err(HandError::UnsupportedAction);
        }
        let id = core.players[seat].id.clone();
        let blind = self.blinds.get(&id).copied().unwrap_or_default();
        let posted = blind.play(input.chips)?;
        core.contribute(seat, posted.required())?;
        self.blinds.insert(id.clone(), posted);
        core.log.push(LogItem::Played(id, input));

        let all_posted = self
            .blinds
            .values()
            .all(|b| b.required() == 0 || b.played());
        if !all_posted {
            return Ok(None);
        }
        Ok(Some(Stage::betting(Round::Flop, core.active_ids())))
    }
}

impl BettingStage {
    fn handle_input(
        &mut self,
        core: &mut Core,
        seat: usize,
        input: Input,
    ) -> Result<Option<Stage>, HandError> {
        let id = core.players[seat].id.clone();
        match input.action {
            Action::Fold => {
                core.fold(seat)?;
                core.log.push(LogItem::Played(id, input));
                if core.players.len() == 1 {
                    return Ok(Some(Stage::Won(WonStage {
                        players: core.active_ids(),
                    })));
                }
            }
            Action::Call => {
                let required = core.pot.required(&core.players[seat]);
                core.contribute(seat, required)?;
                core.log.push(LogItem::Played(id, input));
            }
            Action::Check => {
                if core.pot.required(&core.players[seat]) != 0 {
                    return Err(HandError::CheckWithStake);
                }
                core.log.push(LogItem::Played(id, input));
            }
            Action::Raise => {
                let required = core.pot.required(&core.players[seat]);
                if input.chips < required {
                    return Err(HandError::BetTooLow(input.chips, required));
                }
                if input.chips == required {
                    return Err(HandError::UnexpectedBetAmount(input.chips));
                }
                core.contribute(seat, input.chips)?;
                core.log.push(LogItem::Played(id, input));
            }
            Action::Blind => return Err(HandError::UnsupportedAction),
        }

        self.plays.push(input);
        if !self.all_played(core) {
            return Ok(None);
        }
        let next = match self.round.next() {
            Some(round) => Stage::betting(round, core.active_ids()),
            None => Stage::Won(WonStage {
                players: core.active_ids(),
            }),
        };
        Ok(Some(next))
    }

    /// The round is over once everyone who started it has acted at least
    /// once and no active player owes a call.
    fn all_played(&self, core: &Core) -> bool {
        self.plays.len() >= self.initial.len() && !core.pot.outstanding_stake(core.players.iter())
    }
}

impl WonStage {
    /// Showdown. A sole remaining player wins outright; otherwise remaining
    /// hands are ranked with the evaluator. Ties resolve to the earliest seat
    /// from the dealer.
    fn enter(&self, core: &mut Core) -> Result<(), HandError> {
        let winner_seat = match self.players.len() {
            0 => return Err(HandError::NotEnoughPlayers),
            1 => 0,
            _ => self.showdown(core),
        };
        let chips = core.pot.total();
        let winner = core.players[winner_seat].id.clone();
        core.players[winner_seat].chips += chips;
        core.log.push(LogItem::Finished(winner.clone(), chips));
        core.finish(FinishedHand { winner, chips });
        Ok(())
    }

    fn showdown(&self, core: &Core) -> usize {
        let mut best_seat = 0;
        let mut best_value = None;
        for (seat, player) in core.players.iter().enumerate() {
            let mut cards = core.community.clone();
            cards.extend(player.cards.iter().copied());
            let value = best_of_seven(&cards);
            if best_value.map_or(true, |bv| value > bv) {
                best_seat = seat;
                best_value = Some(value);
            }
        }
        best_seat
    }
}
