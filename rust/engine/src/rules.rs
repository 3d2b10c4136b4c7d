//! Action legality rules for no-blind betting rounds.
//!
//! Validation is pure: callers pass the acting seat's stack, the chips it
//! has already committed this round, and the table's highest bet. The
//! outcome is a [`ValidatedAction`] describing the exact chip movement,
//! so the betting state machine never re-derives amounts.

use crate::errors::GameError;
use crate::seat::Action;

/// A player action after legality checks, with amounts resolved.
///
/// `Bet` and `Raise` both normalize to [`ValidatedAction::RaiseTo`]: the
/// wire-level distinction is only about whether a bet already exists.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call { amount: u32, all_in: bool },
    RaiseTo { total: u32, all_in: bool },
}

/// Validate `action` for a seat holding `stack` chips that has already
/// committed `committed` chips this round, against the round's
/// `highest_bet`.
///
/// Rules follow table conventions without blinds:
/// - `Check` is legal only when the seat owes nothing.
/// - `Call` is legal only when the seat owes something; a short stack
///   calls for less and goes all-in.
/// - `Bet` opens the betting and must be covered by the stack in full.
/// - `Raise` must name a total above the highest bet; a short stack is
///   capped at all-in, which may leave it below the highest bet.
pub fn validate_action(
    stack: u32,
    committed: u32,
    highest_bet: u32,
    action: Action,
) -> Result<ValidatedAction, GameError> {
    let to_call = highest_bet.saturating_sub(committed);
    match action {
        Action::Fold => Ok(ValidatedAction::Fold),
        Action::Check => {
            if to_call > 0 {
                Err(GameError::InvalidAction {
                    reason: "cannot check facing a bet",
                })
            } else {
                Ok(ValidatedAction::Check)
            }
        }
        Action::Call => {
            if to_call == 0 {
                return Err(GameError::InvalidAction {
                    reason: "nothing to call",
                });
            }
            let amount = to_call.min(stack);
            Ok(ValidatedAction::Call {
                amount,
                all_in: stack <= to_call,
            })
        }
        Action::Bet(total) => {
            if highest_bet > 0 {
                return Err(GameError::InvalidAction {
                    reason: "a bet is already open, raise instead",
                });
            }
            if total == 0 {
                return Err(GameError::InvalidAction {
                    reason: "bet must be at least one chip",
                });
            }
            if total > stack {
                return Err(GameError::InsufficientFunds {
                    required: total,
                    stack,
                });
            }
            Ok(ValidatedAction::RaiseTo {
                total,
                all_in: total == stack,
            })
        }
        Action::Raise(total) => {
            if highest_bet == 0 {
                return Err(GameError::InvalidAction {
                    reason: "nothing to raise, bet instead",
                });
            }
            if total <= highest_bet {
                return Err(GameError::InvalidAction {
                    reason: "raise total must exceed the highest bet",
                });
            }
            let required = total - committed;
            if required >= stack {
                // Short stacks raise all-in for whatever they have left.
                Ok(ValidatedAction::RaiseTo {
                    total: committed + stack,
                    all_in: true,
                })
            } else {
                Ok(ValidatedAction::RaiseTo {
                    total,
                    all_in: false,
                })
            }
        }
    }
}
