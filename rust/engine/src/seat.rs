use core::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Stable identity of a seat: its index in the table's seating order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub usize);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a seat stands in the current hand. `Eliminated` is the
/// between-hands marker for seats that busted; during a hand a seat is
/// one of the first three.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatStatus {
    /// Holds cards and still owes decisions this hand.
    Active,
    /// Out of the hand, cards never revealed.
    Folded,
    /// Whole stack committed; contends for the pot but acts no further.
    AllIn,
    /// Stack hit zero at settlement; takes no further hole cards.
    Eliminated,
}

/// An action submitted for the seat whose turn it is. `Bet` and `Raise`
/// carry the seat's intended committed-this-round total ("raise to").
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Forfeit the hand.
    Fold,
    /// Pass without chips; only legal while level with the highest bet.
    Check,
    /// Match the highest bet (all-in for less when the stack is short).
    Call,
    /// Open the betting to the given total.
    Bet(u32),
    /// Push the betting to the given total.
    Raise(u32),
}

impl Default for Action {
    /// The action a caller injects on behalf of a seat whose turn timed
    /// out. The engine runs no timers of its own.
    fn default() -> Self {
        Action::Fold
    }
}

/// Starting stack handed to every seat the original game was played with.
pub const DEFAULT_STARTING_STACK: u32 = 1_000;

/// Name and buy-in for one seat, as passed to `Table::new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub stack: u32,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
        }
    }
}

/// A seat at the table. Created once per table session; the stack carries
/// over between hands while cards, wagers and status reset per hand.
#[derive(Debug, Clone)]
pub struct Seat {
    id: SeatId,
    name: String,
    stack: u32,
    hole: [Option<Card>; 2],
    status: SeatStatus,
    bet_this_round: u32,
    bet_this_hand: u32,
}

impl Seat {
    pub fn new(id: SeatId, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            hole: [None, None],
            status: SeatStatus::Active,
            bet_this_round: 0,
            bet_this_hand: 0,
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> SeatStatus {
        self.status
    }
    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }
    /// Chips committed in the betting round currently open.
    pub fn bet_this_round(&self) -> u32 {
        self.bet_this_round
    }
    /// Chips committed across the whole hand (payout bookkeeping).
    pub fn bet_this_hand(&self) -> u32 {
        self.bet_this_hand
    }

    /// Still contending for the pot (active or all-in).
    pub fn in_hand(&self) -> bool {
        matches!(self.status, SeatStatus::Active | SeatStatus::AllIn)
    }

    /// Still owes betting decisions.
    pub fn can_act(&self) -> bool {
        self.status == SeatStatus::Active
    }

    pub(crate) fn give_card(&mut self, c: Card) {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
        } else {
            debug_assert!(self.hole[1].is_none(), "seat dealt a third hole card");
            self.hole[1] = Some(c);
        }
    }

    pub(crate) fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub(crate) fn set_status(&mut self, status: SeatStatus) {
        self.status = status;
    }

    /// Move up to `amount` chips from the stack into the wagers and
    /// return what actually moved. The stack floors at zero and the seat
    /// goes all-in when it empties.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.stack);
        self.stack -= moved;
        self.bet_this_round += moved;
        self.bet_this_hand += moved;
        if self.stack == 0 {
            self.status = SeatStatus::AllIn;
        }
        moved
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    pub(crate) fn reset_round_bet(&mut self) {
        self.bet_this_round = 0;
    }

    /// Settlement reset: wagers zero out and the seat returns to
    /// `Active` unless its stack is gone. Hole cards stay until the
    /// next deal wipes them.
    pub(crate) fn reset_wagers(&mut self) {
        self.bet_this_round = 0;
        self.bet_this_hand = 0;
        self.status = if self.stack == 0 {
            SeatStatus::Eliminated
        } else {
            SeatStatus::Active
        };
    }

    /// Per-hand reset at deal time: wagers and cards are wiped and the
    /// seat re-enters play unless it has no chips left.
    pub(crate) fn reset_for_hand(&mut self) {
        self.clear_cards();
        self.reset_wagers();
    }
}
