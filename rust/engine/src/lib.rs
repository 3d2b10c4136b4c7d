//! # showdown-engine: Texas Hold'em Table Engine
//!
//! A deterministic no-blind Texas Hold'em engine for a single table of
//! two to nine fixed seats. Provides dealing, betting state management,
//! hand evaluation and JSONL hand history with reproducible RNG for
//! replay and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`table`] - Table orchestration: dealing, streets, settlement
//! - [`betting`] - Single-street betting round state machine
//! - [`hand`] - Poker hand evaluation over 5 to 7 cards
//! - [`rules`] - Action legality and amount resolution
//! - [`seat`] - Seat state, actions, and stack management
//! - [`state`] - Stages, public snapshots, and hand results
//! - [`logger`] - HandRecord serialization and JSONL logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::seat::{Action, SeatConfig, SeatId};
//! use showdown_engine::table::Table;
//!
//! let seats = vec![
//!     SeatConfig::new("You", 1_000),
//!     SeatConfig::new("Bot 1", 1_000),
//!     SeatConfig::new("Bot 2", 1_000),
//! ];
//! let mut table = Table::new(seats, Some(42)).unwrap();
//! let state = table.start_hand().unwrap();
//! assert_eq!(state.seat_to_act, Some(SeatId(0)));
//!
//! // Seat 0 opens for 50, the bots respond in turn.
//! table.apply_action(SeatId(0), Action::Bet(50)).unwrap();
//! table.apply_action(SeatId(1), Action::Call).unwrap();
//! table.apply_action(SeatId(2), Action::Fold).unwrap();
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Seeded tables replay identically:
//!
//! ```rust
//! use showdown_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.deal(), deck2.deal());
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::hand::{evaluate_best, Category};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Three, Suit::Diamonds),
//! ];
//! assert_eq!(evaluate_best(&cards).category, Category::StraightFlush);
//! ```

pub mod betting;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod rules;
pub mod seat;
pub mod state;
pub mod table;
