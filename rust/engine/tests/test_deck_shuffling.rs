use std::collections::HashSet;

use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;

#[test]
fn shuffled_deck_deals_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.shuffle();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    // Compare first 10 cards
    let a: Vec<Card> = (0..10).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn reshuffling_restores_the_full_deck() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    for _ in 0..20 {
        deck.deal().unwrap();
    }
    assert_eq!(deck.remaining(), 32);
    deck.shuffle();
    assert_eq!(deck.remaining(), 52, "shuffle must rebuild all 52 cards");
}

#[test]
fn later_shuffles_continue_the_seeded_sequence() {
    // Two decks on the same seed stay in lockstep across hands.
    let mut d1 = Deck::new_with_seed(9);
    let mut d2 = Deck::new_with_seed(9);
    for _ in 0..3 {
        d1.shuffle();
        d2.shuffle();
        assert_eq!(d1.deal(), d2.deal());
    }
}
