//! A single hand of play from the first forced bet through to the payout.
//!
//! [`Hand`] owns all mutable state and is driven entirely by its caller: no
//! background thread, no timers. The caller receives a [`FinishReceiver`]
//! from [`Hand::begin`] and may hand it to another thread; exactly one
//! [`FinishedHand`] is ever delivered on it.

use crate::bet::{Action, Input, Move};
use crate::cards::deck::{Deck, DeckSeed};
use crate::cards::Card;
use crate::log::{HandLog, LogItem};
use crate::player::Player;
use crate::pot::Pot;
use crate::stage::{Round, Stage};
use crate::{Currency, HandError, PlayerId};
use std::collections::HashMap;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

/// The terminal result of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedHand {
    pub winner: PlayerId,
    pub chips: Currency,
}

/// Receiving side of a hand's result. Yields the single [`FinishedHand`] and
/// then nothing ever again, so a consumer loop terminates naturally.
#[derive(Debug)]
pub struct FinishReceiver {
    rx: Receiver<FinishedHand>,
}

impl FinishReceiver {
    /// Block until the hand finishes. `None` once the result has been taken
    /// or the hand was dropped unfinished.
    pub fn recv(&self) -> Option<FinishedHand> {
        self.rx.recv().ok()
    }

    /// Non-blocking variant of [`recv`](Self::recv).
    pub fn try_recv(&self) -> Option<FinishedHand> {
        self.rx.try_recv().ok()
    }
}

/// State shared between the hand and its stages: seats, board, pot, deck,
/// and the turn pointer. Stages mutate this; [`Hand`] owns it.
#[derive(Debug)]
pub(crate) struct Core {
    /// Active players in rotation order, dealer first. Folding removes a
    /// player from this list for the rest of the hand.
    pub(crate) players: Vec<Player>,
    pub(crate) dealer: PlayerId,
    pub(crate) next_to_play: Option<PlayerId>,
    pub(crate) community: Vec<Card>,
    pub(crate) pot: Pot,
    pub(crate) deck: Deck,
    pub(crate) log: HandLog,
    finish: Option<SyncSender<FinishedHand>>,
}

impl Core {
    pub(crate) fn new(
        players: Vec<Player>,
        dealer: PlayerId,
        deck: Deck,
        finish: SyncSender<FinishedHand>,
    ) -> Self {
        Core {
            players,
            dealer,
            next_to_play: None,
            community: Vec::new(),
            pot: Pot::new(),
            deck,
            log: HandLog::default(),
            finish: Some(finish),
        }
    }

    pub(crate) fn next_player(&self) -> Option<&Player> {
        let next = self.next_to_play.as_ref()?;
        self.players.iter().find(|p| &p.id == next)
    }

    pub(crate) fn seat_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub(crate) fn active_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    pub(crate) fn set_next(&mut self, id: PlayerId) {
        self.log.push(LogItem::NextToAct(id.clone()));
        self.next_to_play = Some(id);
    }

    /// Point the turn at the given rotation seat, wrapping past the end.
    pub(crate) fn play_from_seat(&mut self, seat: usize) {
        if self.players.is_empty() {
            return;
        }
        let id = self.players[seat % self.players.len()].id.clone();
        self.set_next(id);
    }

    /// Pass the turn after the player at `prev_seat` acted. If they folded
    /// the seat indices above them shifted down by one, so the same index
    /// now names the following player.
    pub(crate) fn advance_turn(&mut self, prev_seat: usize, removed: bool) {
        let len = self.players.len();
        let seat = if removed {
            prev_seat % len
        } else {
            (prev_seat + 1) % len
        };
        let id = self.players[seat].id.clone();
        self.set_next(id);
    }

    /// Move `amount` from the player's stack into the pot, refusing a bet
    /// the stack cannot cover.
    pub(crate) fn contribute(&mut self, seat: usize, amount: Currency) -> Result<(), HandError> {
        let chips = self.players[seat].chips;
        if amount > chips {
            return Err(HandError::InsufficientChips(chips, amount));
        }
        self.pot.add(&mut self.players[seat], amount);
        Ok(())
    }

    /// Remove the player at `seat` from the hand. The last player standing
    /// cannot fold.
    pub(crate) fn fold(&mut self, seat: usize) -> Result<(), HandError> {
        if self.players.len() <= 1 {
            return Err(HandError::IllegalFold);
        }
        self.players[seat].folded = true;
        self.players.remove(seat);
        Ok(())
    }

    /// Deal community cards up to the round's board size and log the street.
    pub(crate) fn deal_community(&mut self, round: Round) -> Result<(), HandError> {
        while self.community.len() < round.board_size() {
            let card = self.deck.draw()?;
            self.community.push(card);
        }
        let item = match round {
            Round::Flop => LogItem::Flop(self.community[0], self.community[1], self.community[2]),
            Round::Turn => LogItem::Turn(self.community[3]),
            Round::River => LogItem::River(self.community[4]),
        };
        self.log.push(item);
        Ok(())
    }

    /// Deliver the result and retire the turn pointer. The sender is taken
    /// on first use, so a second call can never deliver again and the
    /// receiver sees the channel close after the single result.
    pub(crate) fn finish(&mut self, result: FinishedHand) {
        self.next_to_play = None;
        if let Some(tx) = self.finish.take() {
            // buffered one deep; never blocks even if nobody is listening
            let _ = tx.send(result);
        }
    }
}

/// A hand of play. Construct with [`Hand::new`], deal with [`Hand::begin`],
/// then feed player actions through [`Hand::handle_input`] or the `play_*`
/// helpers until the result arrives on the [`FinishReceiver`].
#[derive(Debug)]
pub struct Hand {
    core: Core,
    stage: Stage,
    begun: bool,
    finish_rx: Option<Receiver<FinishedHand>>,
}

impl Hand {
    /// A new hand with a randomly shuffled deck. `blinds` lists the forced
    /// bets owed by successive seats starting at the dealer; empty means
    /// play opens directly on the flop.
    pub fn new(
        players: Vec<Player>,
        dealer_id: &str,
        blinds: &[Currency],
    ) -> Result<Hand, HandError> {
        Self::new_with_seed(players, dealer_id, blinds, DeckSeed::default())
    }

    /// Like [`new`](Self::new) but with a caller-supplied seed so the deal
    /// can be replayed.
    pub fn new_with_seed(
        mut players: Vec<Player>,
        dealer_id: &str,
        blinds: &[Currency],
        seed: DeckSeed,
    ) -> Result<Hand, HandError> {
        if players.len() < 2 {
            return Err(HandError::NotEnoughPlayers);
        }
        let dealer_seat = players
            .iter()
            .position(|p| p.id == dealer_id)
            .ok_or(HandError::UnknownPlayer)?;
        players.rotate_left(dealer_seat);
        let stage = Stage::initial(&players, blinds);
        let dealer = players[0].id.clone();
        let (tx, rx) = sync_channel(1);
        Ok(Hand {
            core: Core::new(players, dealer, Deck::new(&seed), tx),
            stage,
            begun: false,
            finish_rx: Some(rx),
        })
    }

    /// Deal pockets, hand the turn to the dealer, and open the first stage.
    /// Returns the one channel the hand's result will arrive on; calling a
    /// second time fails.
    pub fn begin(&mut self) -> Result<FinishReceiver, HandError> {
        let rx = self.finish_rx.take().ok_or(HandError::AlreadyBegun)?;
        self.begun = true;
        for seat in 0..self.core.players.len() {
            let pocket = self.core.deck.draw_pocket()?;
            self.core.players[seat].cards = pocket.to_vec();
            let id = self.core.players[seat].id.clone();
            self.core.log.push(LogItem::PocketDealt(id));
        }
        let dealer = self.core.dealer.clone();
        self.core.set_next(dealer);
        self.stage.enter(&mut self.core)?;
        Ok(FinishReceiver { rx })
    }

    /// Apply one player action. Rejected inputs leave the hand untouched;
    /// accepted ones advance the turn and, when a round closes, move the
    /// hand to its next stage.
    pub fn handle_input(&mut self, player_id: &str, input: Input) -> Result<(), HandError> {
        if self.stage.is_won() {
            return Err(HandError::HandOver);
        }
        let seat = self
            .core
            .seat_of(player_id)
            .ok_or(HandError::UnknownPlayer)?;
        match &self.core.next_to_play {
            Some(next) if next == player_id => {}
            _ => return Err(HandError::OutOfTurn),
        }
        let before = self.core.players.len();
        match self.stage.handle_input(&mut self.core, seat, input)? {
            Some(next_stage) => {
                self.stage.exit(&mut self.core);
                next_stage.enter(&mut self.core)?;
                self.stage = next_stage;
            }
            None => {
                let removed = self.core.players.len() < before;
                self.core.advance_turn(seat, removed);
            }
        }
        Ok(())
    }

    /// The moves currently legal, keyed by player. Only the player due to
    /// act has entries; empty before [`begin`](Self::begin) and after the
    /// hand is won.
    pub fn valid_moves(&self) -> HashMap<PlayerId, Vec<Move>> {
        self.stage.valid_moves(&self.core)
    }

    /// Post the player's forced bet. `chips` must equal the owed amount.
    pub fn play_blind(&mut self, player_id: &str, chips: Currency) -> Result<(), HandError> {
        self.handle_input(player_id, Input::new(Action::Blind, chips))
    }

    pub fn play_check(&mut self, player_id: &str) -> Result<(), HandError> {
        self.handle_input(player_id, Input::new(Action::Check, 0))
    }

    pub fn play_fold(&mut self, player_id: &str) -> Result<(), HandError> {
        self.handle_input(player_id, Input::new(Action::Fold, 0))
    }

    /// Match the outstanding stake. The amount is computed by the hand.
    pub fn play_call(&mut self, player_id: &str) -> Result<(), HandError> {
        self.handle_input(player_id, Input::new(Action::Call, 0))
    }

    /// Put in `chips` on top of the player's current contribution. Must
    /// exceed the amount a call would cost.
    pub fn play_raise(&mut self, player_id: &str, chips: Currency) -> Result<(), HandError> {
        self.handle_input(player_id, Input::new(Action::Raise, chips))
    }

    /// The named player and their remaining opponents, as copies. Fails for
    /// ids that never were in the hand and for players who have folded out
    /// of it.
    pub fn players(&self, player_id: &str) -> Result<(Player, Vec<Player>), HandError> {
        let me = self
            .core
            .players
            .iter()
            .find(|p| p.id == player_id)
            .cloned()
            .ok_or(HandError::UnknownPlayer)?;
        let others = self
            .core
            .players
            .iter()
            .filter(|p| p.id != player_id)
            .cloned()
            .collect();
        Ok((me, others))
    }

    pub fn is_next_to_play(&self, player_id: &str) -> bool {
        self.core
            .next_to_play
            .as_ref()
            .map_or(false, |next| next == player_id)
    }

    /// True from [`begin`](Self::begin) until the hand is won.
    pub fn is_active(&self) -> bool {
        self.begun && !self.stage.is_won()
    }

    pub fn dealer(&self) -> &PlayerId {
        &self.core.dealer
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.core.community
    }

    pub fn pot_total(&self) -> Currency {
        self.core.pot.total()
    }

    /// The hand history so far. See [`HandLog::items_since`].
    pub fn history(&self) -> &HandLog {
        &self.core.log
    }
}
