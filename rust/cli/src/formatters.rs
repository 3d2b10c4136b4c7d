//! Card, board, and action formatters for terminal display.
//!
//! Pure functions formatting game elements for terminal output. Unicode
//! suit symbols are used where the terminal supports them, with an ASCII
//! fallback (h/d/c/s) elsewhere.

use showdown_engine::cards::{Card, Rank, Suit};
use showdown_engine::seat::Action;

/// Check whether the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a suit as ♥ ♦ ♣ ♠, or h/d/c/s in ASCII mode.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a card as rank plus suit, e.g. "A♠" or "As".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a board in bracket notation, e.g. "[A♠ K♥ Q♦]"; "[]" if empty.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

/// Format an action as a human-readable string: "fold", "check", "call",
/// "bet 100", "raise to 250".
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Fold => "fold".to_string(),
        Action::Check => "check".to_string(),
        Action::Call => "call".to_string(),
        Action::Bet(n) => format!("bet {}", n),
        Action::Raise(n) => format!("raise to {}", n),
    }
}
