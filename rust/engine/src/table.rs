//! The table: deals hands, drives streets, settles pots.
//!
//! One [`Table`] owns the seats, the deck and the current hand's state.
//! Hands are played without blinds or antes: every street opens at a
//! highest bet of zero and the first seat after the button acts first.
//! All mutation goes through [`Table::start_hand`] and
//! [`Table::apply_action`]; everything else is read-only snapshots.

use std::collections::HashSet;

use crate::betting::{BettingRound, RoundStatus};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_best, HandRank};
use crate::logger::{ActionRecord, HandRecord};
use crate::seat::{Action, Seat, SeatConfig, SeatId};
use crate::state::{
    HandResult, Payout, PublicState, RevealedHand, RoundState, SeatPublic, Stage,
};

/// A fixed-seat table playing one hand at a time.
#[derive(Debug)]
pub struct Table {
    seats: Vec<Seat>,
    button: SeatId,
    hand_no: u64,
    stage: Stage,
    deck: Deck,
    seed: Option<u64>,
    community: Vec<Card>,
    pot: u32,
    round: Option<BettingRound>,
    result: Option<HandResult>,
    actions: Vec<ActionRecord>,
    /// Chips on the table at creation. Stacks plus pot must always sum
    /// to this; settlement asserts it.
    chips_total: u32,
}

impl Table {
    /// Seat between 2 and 9 players. A fresh table sits between hands:
    /// nothing is dealt until [`Table::start_hand`].
    ///
    /// With `seed` the deck's shuffle sequence is reproducible across
    /// the whole session; without it the deck seeds itself from the OS.
    pub fn new(configs: Vec<SeatConfig>, seed: Option<u64>) -> Result<Self, GameError> {
        let count = configs.len();
        if !(2..=9).contains(&count) {
            return Err(GameError::InvalidSeatCount { count });
        }
        let seats: Vec<Seat> = configs
            .into_iter()
            .enumerate()
            .map(|(i, c)| Seat::new(SeatId(i), c.name, c.stack))
            .collect();
        let chips_total = seats.iter().map(Seat::stack).sum();
        let deck = match seed {
            Some(s) => Deck::new_with_seed(s),
            None => Deck::new(),
        };
        Ok(Self {
            // Button starts on the last seat so seat 0 opens the first hand.
            button: SeatId(count - 1),
            hand_no: 0,
            stage: Stage::Settled,
            deck,
            seed,
            community: Vec::new(),
            pot: 0,
            round: None,
            result: None,
            actions: Vec::new(),
            chips_total,
            seats,
        })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn button(&self) -> SeatId {
        self.button
    }

    pub fn hand_no(&self) -> u64 {
        self.hand_no
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    /// Shuffle and deal the next hand. Fails while a hand is still being
    /// played, or when fewer than two seats have chips left.
    pub fn start_hand(&mut self) -> Result<RoundState, GameError> {
        self.start_hand_internal(None)
    }

    /// Deal the next hand from a fixed card order instead of shuffling.
    /// The order must be a full 52-card deck with no duplicates. The
    /// session RNG is left untouched.
    pub fn start_hand_with_deck(&mut self, cards: Vec<Card>) -> Result<RoundState, GameError> {
        if cards.len() != 52 {
            return Err(GameError::BadDeck {
                reason: "deck must hold exactly 52 cards",
            });
        }
        let unique: HashSet<Card> = cards.iter().copied().collect();
        if unique.len() != cards.len() {
            return Err(GameError::BadDeck {
                reason: "deck contains duplicate cards",
            });
        }
        self.start_hand_internal(Some(cards))
    }

    fn start_hand_internal(&mut self, order: Option<Vec<Card>>) -> Result<RoundState, GameError> {
        if !self.stage.is_terminal() {
            return Err(GameError::HandInProgress);
        }
        let live = self.seats.iter().filter(|s| s.stack() > 0).count();
        if live < 2 {
            return Err(GameError::NotEnoughSeats { available: live });
        }
        if self.hand_no > 0 {
            self.rotate_button();
        }
        self.hand_no += 1;
        self.result = None;
        self.actions.clear();
        self.community.clear();
        self.pot = 0;
        for seat in &mut self.seats {
            seat.reset_for_hand();
        }
        match order {
            Some(cards) => self.deck.set_order(cards),
            None => self.deck.shuffle(),
        }

        // Two passes around the table, first card to the button's left.
        let n = self.seats.len();
        for _ in 0..2 {
            for i in 1..=n {
                let idx = (self.button.0 + i) % n;
                if self.seats[idx].can_act() {
                    let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
                    self.seats[idx].give_card(card);
                }
            }
        }

        self.stage = Stage::PreFlop;
        self.round = Some(BettingRound::open(&self.seats, self.button));
        Ok(self.round_state())
    }

    /// Apply `action` for `seat`. A rejected action returns the error and
    /// leaves the table exactly as it was, so callers may retry.
    ///
    /// On success the table advances as far as the action allows: closing
    /// a street deals the next one, and when every remaining seat is
    /// all-in the board runs out to showdown in the same call.
    pub fn apply_action(&mut self, seat: SeatId, action: Action) -> Result<RoundState, GameError> {
        if self.stage.is_terminal() {
            return Err(GameError::HandAlreadySettled);
        }
        let round = self.round.as_mut().ok_or(GameError::HandAlreadySettled)?;
        let status = round.apply(&mut self.seats, seat, action)?;
        self.actions.push(ActionRecord {
            seat,
            stage: self.stage,
            action,
        });
        self.pot = self.seats.iter().map(Seat::bet_this_hand).sum();

        let contenders = self.seats.iter().filter(|s| s.in_hand()).count();
        if contenders == 1 {
            self.settle_uncontested();
        } else if status == RoundStatus::Closed {
            self.advance_streets()?;
        }
        Ok(self.round_state())
    }

    /// Public snapshot: board, pot, whose turn, per-seat chips and
    /// status. Never includes hole cards.
    pub fn public_state(&self) -> PublicState {
        PublicState {
            hand_no: self.hand_no,
            stage: self.stage,
            button: self.button,
            community: self.community.clone(),
            pot: self.pot,
            highest_bet: self.round.as_ref().map_or(0, BettingRound::highest_bet),
            seat_to_act: self.round.as_ref().and_then(BettingRound::current_actor),
            seats: self
                .seats
                .iter()
                .map(|s| SeatPublic {
                    id: s.id(),
                    name: s.name().to_string(),
                    stack: s.stack(),
                    bet_this_round: s.bet_this_round(),
                    status: s.status(),
                })
                .collect(),
        }
    }

    /// Outcome of the last finished hand. `None` while a hand is being
    /// played and before the first deal.
    pub fn showdown_result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    /// Loggable record of the last finished hand under the given id.
    pub fn hand_record(&self, hand_id: &str) -> Option<HandRecord> {
        if !self.stage.is_terminal() {
            return None;
        }
        let result = self.result.as_ref()?;
        Some(HandRecord {
            hand_id: hand_id.to_string(),
            hand_no: self.hand_no,
            seed: self.seed,
            board: self.community.clone(),
            actions: self.actions.clone(),
            payouts: result.payouts.clone(),
            showdown: result.showdown.clone(),
            ts: None,
        })
    }

    fn round_state(&self) -> RoundState {
        RoundState {
            stage: self.stage,
            seat_to_act: self.round.as_ref().and_then(BettingRound::current_actor),
        }
    }

    /// Move the button to the next seat that still has chips.
    fn rotate_button(&mut self) {
        let n = self.seats.len();
        for i in 1..=n {
            let idx = (self.button.0 + i) % n;
            if self.seats[idx].stack() > 0 {
                self.button = SeatId(idx);
                return;
            }
        }
    }

    /// Deal streets until someone can act again or the river completes.
    /// Runs the whole board out when every contender is already all-in.
    fn advance_streets(&mut self) -> Result<(), GameError> {
        loop {
            let next = match self.stage {
                Stage::PreFlop => Stage::Flop,
                Stage::Flop => Stage::Turn,
                Stage::Turn => Stage::River,
                Stage::River => {
                    self.stage = Stage::Showdown;
                    self.settle_showdown();
                    return Ok(());
                }
                _ => return Ok(()),
            };
            while self.community.len() < next.board_size() {
                let card = self.deck.deal().ok_or(GameError::DeckExhausted)?;
                self.community.push(card);
            }
            for seat in &mut self.seats {
                seat.reset_round_bet();
            }
            self.stage = next;
            let round = BettingRound::open(&self.seats, self.button);
            let closed = round.status() == RoundStatus::Closed;
            self.round = Some(round);
            if !closed {
                return Ok(());
            }
        }
    }

    /// Everyone else folded: the pot goes to the last seat standing and
    /// no cards are revealed.
    fn settle_uncontested(&mut self) {
        if let Some(winner) = self.seats.iter().find(|s| s.in_hand()).map(Seat::id) {
            let amount = self.pot;
            self.seats[winner.0].add_chips(amount);
            self.result = Some(HandResult {
                payouts: vec![Payout {
                    seat: winner,
                    amount,
                }],
                showdown: None,
            });
        }
        self.finish_hand(Stage::UncontestedEnd);
    }

    /// Compare every remaining hand against the full board and pay the
    /// pot out. Ties split evenly; leftover chips go one apiece to the
    /// tied seats closest after the button.
    fn settle_showdown(&mut self) {
        let board = self.community.clone();
        debug_assert_eq!(board.len(), 5, "showdown requires a complete board");

        let mut revealed: Vec<RevealedHand> = Vec::new();
        for seat in self.seats.iter().filter(|s| s.in_hand()) {
            let hole = match seat.hole_cards() {
                [Some(a), Some(b)] => [a, b],
                _ => {
                    debug_assert!(false, "contender without hole cards");
                    continue;
                }
            };
            let mut cards: Vec<Card> = Vec::with_capacity(7);
            cards.extend_from_slice(&hole);
            cards.extend_from_slice(&board);
            revealed.push(RevealedHand {
                seat: seat.id(),
                hole,
                rank: evaluate_best(&cards),
            });
        }

        let best: Option<HandRank> = revealed.iter().map(|r| r.rank).max();
        let mut payouts: Vec<Payout> = Vec::new();
        if let Some(best) = best {
            let winners: HashSet<SeatId> = revealed
                .iter()
                .filter(|r| r.rank == best)
                .map(|r| r.seat)
                .collect();
            let share = self.pot / winners.len() as u32;
            let mut remainder = self.pot % winners.len() as u32;

            // Award in rotation order after the button so the odd chips
            // land deterministically.
            let n = self.seats.len();
            for i in 1..=n {
                let id = SeatId((self.button.0 + i) % n);
                if !winners.contains(&id) {
                    continue;
                }
                let extra = u32::from(remainder > 0);
                remainder -= extra;
                let amount = share + extra;
                self.seats[id.0].add_chips(amount);
                payouts.push(Payout { seat: id, amount });
            }
            payouts.sort_by_key(|p| p.seat);
        }

        self.result = Some(HandResult {
            payouts,
            showdown: Some(revealed),
        });
        self.finish_hand(Stage::Settled);
    }

    /// Settlement bookkeeping: wagers zero out and every seat returns
    /// to `Active`, except busted seats, which go `Eliminated`.
    fn finish_hand(&mut self, stage: Stage) {
        self.stage = stage;
        self.round = None;
        self.pot = 0;
        for seat in &mut self.seats {
            seat.reset_wagers();
        }
        debug_assert_eq!(
            self.seats.iter().map(Seat::stack).sum::<u32>(),
            self.chips_total,
            "chips must be conserved across a hand"
        );
    }
}
