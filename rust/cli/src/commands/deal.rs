//! Deal command handler: one shuffled hand, printed and discarded.
//!
//! Deals two hole cards to each seat and runs the full five-card board
//! straight off the deck, with no betting. Supports optional seeding for
//! reproducible deals.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_card};
use showdown_engine::deck::Deck;
use std::io::Write;

/// Handle the deal command.
///
/// `seats` falls back to the configured table size. The deal follows
/// table order: two passes of hole cards, then the five board cards.
pub fn handle_deal_command(
    seed: Option<u64>,
    seats: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seats = seats.unwrap_or(cfg.seats);
    if !(2..=9).contains(&seats) {
        return Err(CliError::InvalidInput(
            "seats must be between 2 and 9".to_string(),
        ));
    }

    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();

    let mut holes: Vec<Vec<showdown_engine::cards::Card>> = vec![Vec::new(); seats];
    for _ in 0..2 {
        for hole in holes.iter_mut() {
            let card = deck
                .deal()
                .ok_or(showdown_engine::errors::GameError::DeckExhausted)?;
            hole.push(card);
        }
    }
    for (i, hole) in holes.iter().enumerate() {
        writeln!(
            out,
            "Seat {}: {} {}",
            i,
            format_card(&hole[0]),
            format_card(&hole[1])
        )?;
    }

    let mut board = Vec::with_capacity(5);
    for _ in 0..5 {
        let card = deck
            .deal()
            .ok_or(showdown_engine::errors::GameError::DeckExhausted)?;
        board.push(card);
    }
    writeln!(out, "Board: {}", format_board(&board))?;
    Ok(())
}
