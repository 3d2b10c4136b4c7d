//! One betting round: turn order, action application, closure.
//!
//! Every street opens with no outstanding bet and the first eligible seat
//! after the button to act. The round tracks which seats have acted since
//! the last raise; it closes once every seat still able to act has acted
//! and matched the highest bet, or when fewer than two seats can act at
//! all.

use std::collections::HashSet;

use crate::errors::GameError;
use crate::rules::{validate_action, ValidatedAction};
use crate::seat::{Action, Seat, SeatId, SeatStatus};

/// What the table should do after an action lands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundStatus {
    /// The round continues; it is `seat_to_act`'s turn.
    AwaitingAction { seat_to_act: SeatId },
    /// All bets are level; the table can deal the next street.
    Closed,
}

/// State machine for a single street of betting.
#[derive(Debug)]
pub struct BettingRound {
    highest_bet: u32,
    /// Seats still able to act, in turn order starting after the button.
    order: Vec<SeatId>,
    to_act: usize,
    /// Seats that have acted since the last raise. A raise clears this,
    /// which is what forces everyone else to respond again.
    acted: HashSet<SeatId>,
    closed: bool,
}

impl BettingRound {
    /// Open a street. Turn order starts at the first seat after the
    /// button that can still act and proceeds clockwise. With fewer than
    /// two such seats there is nobody to bet against and the round is
    /// born closed.
    pub fn open(seats: &[Seat], button: SeatId) -> Self {
        let n = seats.len();
        let mut order = Vec::with_capacity(n);
        for i in 1..=n {
            let idx = (button.0 + i) % n;
            if seats[idx].can_act() {
                order.push(seats[idx].id());
            }
        }
        let closed = order.len() < 2;
        Self {
            highest_bet: 0,
            order,
            to_act: 0,
            acted: HashSet::new(),
            closed,
        }
    }

    pub fn highest_bet(&self) -> u32 {
        self.highest_bet
    }

    /// The seat whose turn it is, or `None` once the round has closed.
    pub fn current_actor(&self) -> Option<SeatId> {
        if self.closed {
            None
        } else {
            self.order.get(self.to_act).copied()
        }
    }

    pub fn status(&self) -> RoundStatus {
        match self.current_actor() {
            Some(seat_to_act) => RoundStatus::AwaitingAction { seat_to_act },
            None => RoundStatus::Closed,
        }
    }

    /// Apply one action for `seat`. Rejects out-of-turn submissions
    /// without touching any state, so a caller can simply retry with the
    /// right seat.
    pub fn apply(
        &mut self,
        seats: &mut [Seat],
        seat: SeatId,
        action: Action,
    ) -> Result<RoundStatus, GameError> {
        let expected = match self.current_actor() {
            Some(s) => s,
            None => {
                return Err(GameError::InvalidAction {
                    reason: "betting round is closed",
                });
            }
        };
        if seat != expected {
            return Err(GameError::NotYourTurn {
                expected,
                actual: seat,
            });
        }
        debug_assert_eq!(seats[seat.0].id(), seat, "seat ids must match indices");

        let validated = validate_action(
            seats[seat.0].stack(),
            seats[seat.0].bet_this_round(),
            self.highest_bet,
            action,
        )?;

        match validated {
            ValidatedAction::Fold => {
                seats[seat.0].set_status(SeatStatus::Folded);
                self.remove_from_order(seat);
            }
            ValidatedAction::Check => {
                self.acted.insert(seat);
                self.advance();
            }
            ValidatedAction::Call { amount, .. } => {
                seats[seat.0].commit(amount);
                self.acted.insert(seat);
                if seats[seat.0].status() == SeatStatus::AllIn {
                    self.remove_from_order(seat);
                } else {
                    self.advance();
                }
            }
            ValidatedAction::RaiseTo { total, .. } => {
                let add = total - seats[seat.0].bet_this_round();
                seats[seat.0].commit(add);
                // A short all-in that fails to top the highest bet is a
                // call for less and must not reopen the betting.
                let new_total = seats[seat.0].bet_this_round();
                if new_total > self.highest_bet {
                    self.highest_bet = new_total;
                    self.acted.clear();
                }
                self.acted.insert(seat);
                if seats[seat.0].status() == SeatStatus::AllIn {
                    self.remove_from_order(seat);
                } else {
                    self.advance();
                }
            }
        }

        self.update_closed(seats);
        Ok(self.status())
    }

    /// Drop a folded or all-in seat from the rotation. When the current
    /// actor removes itself the index already points at its successor.
    fn remove_from_order(&mut self, seat: SeatId) {
        if let Some(pos) = self.order.iter().position(|&s| s == seat) {
            self.order.remove(pos);
            if pos < self.to_act {
                self.to_act -= 1;
            }
            if self.order.is_empty() {
                self.to_act = 0;
            } else {
                self.to_act %= self.order.len();
            }
        }
        self.acted.remove(&seat);
    }

    fn advance(&mut self) {
        if !self.order.is_empty() {
            self.to_act = (self.to_act + 1) % self.order.len();
        }
    }

    /// Closure rule: every seat still in the rotation has acted since the
    /// last raise and sits level with the highest bet. Vacuously true
    /// once the rotation empties out.
    fn update_closed(&mut self, seats: &[Seat]) {
        let done = self.order.iter().all(|id| {
            self.acted.contains(id) && seats[id.0].bet_this_round() == self.highest_bet
        });
        if done {
            self.closed = true;
        }
    }
}
