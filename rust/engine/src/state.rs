//! Hand lifecycle stages and the snapshots the table hands out.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;
use crate::seat::{SeatId, SeatStatus};

/// Where the current hand stands. The four betting streets run in order;
/// `Showdown` is a transient stop while hands are compared, so callers
/// observe one of the two terminal stages instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    /// Hand went to showdown and the pot has been paid out.
    Settled,
    /// Everyone but one seat folded; pot paid without revealing cards.
    UncontestedEnd,
}

impl Stage {
    /// Terminal stages accept no further actions and permit a new deal.
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Settled | Stage::UncontestedEnd)
    }

    /// Community cards on the board during this betting street.
    pub(crate) fn board_size(self) -> usize {
        match self {
            Stage::PreFlop => 0,
            Stage::Flop => 3,
            Stage::Turn => 4,
            _ => 5,
        }
    }
}

/// Minimal answer to "what just happened": the stage we are now in and
/// whose turn it is, if anyone's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub stage: Stage,
    pub seat_to_act: Option<SeatId>,
}

/// Per-seat information safe to show every player: no hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub id: SeatId,
    pub name: String,
    pub stack: u32,
    pub bet_this_round: u32,
    pub status: SeatStatus,
}

/// Everything visible from the rail. Serializing this is always safe;
/// hole cards only ever leave the table through a showdown result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub hand_no: u64,
    pub stage: Stage,
    pub button: SeatId,
    pub community: Vec<Card>,
    pub pot: u32,
    pub highest_bet: u32,
    pub seat_to_act: Option<SeatId>,
    pub seats: Vec<SeatPublic>,
}

/// Chips moved to one seat at settlement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub seat: SeatId,
    pub amount: u32,
}

/// A hand revealed at showdown, with its evaluated strength.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedHand {
    pub seat: SeatId,
    pub hole: [Card; 2],
    pub rank: HandRank,
}

/// Outcome of a finished hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub payouts: Vec<Payout>,
    /// Revealed hands of everyone still in at showdown, in seat order.
    /// `None` when the hand ended uncontested: folded players never show
    /// and neither does the winner.
    pub showdown: Option<Vec<RevealedHand>>,
}
