use showdown_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use showdown_engine::errors::GameError;
use showdown_engine::seat::{Action as A, SeatConfig, SeatId, SeatStatus};
use showdown_engine::state::{Payout, Stage};
use showdown_engine::table::Table;

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn three_seats() -> Vec<SeatConfig> {
    vec![
        SeatConfig::new("You", 1_000),
        SeatConfig::new("Bot 1", 1_000),
        SeatConfig::new("Bot 2", 1_000),
    ]
}

/// A full 52-card deck that deals `prefix` first.
fn stacked(prefix: &[Card]) -> Vec<Card> {
    let mut deck = prefix.to_vec();
    for card in full_deck() {
        if !prefix.contains(&card) {
            deck.push(card);
        }
    }
    assert_eq!(deck.len(), 52, "prefix must not contain duplicates");
    deck
}

#[test]
fn checked_down_hand_visits_every_street() {
    let mut table = Table::new(three_seats(), Some(7)).unwrap();
    let state = table.start_hand().unwrap();
    assert_eq!(state.stage, Stage::PreFlop);
    assert_eq!(state.seat_to_act, Some(SeatId(0)));
    assert_eq!(table.community().len(), 0);

    let mut last = state;
    for expected_after in [Stage::Flop, Stage::Turn, Stage::River, Stage::Settled] {
        for seat in [0, 1, 2] {
            last = table.apply_action(SeatId(seat), A::Check).unwrap();
        }
        assert_eq!(last.stage, expected_after);
    }
    assert_eq!(table.community().len(), 5);
    assert_eq!(last.seat_to_act, None);

    // Nobody put a chip in, so the split pays everyone nothing.
    let result = table.showdown_result().expect("settled hand has a result");
    assert_eq!(result.showdown.as_ref().map(Vec::len), Some(3));
    assert!(table.seats().iter().all(|s| s.stack() == 1_000));
}

#[test]
fn uncontested_hand_pays_without_revealing_cards() {
    let mut table = Table::new(three_seats(), Some(11)).unwrap();
    table.start_hand().unwrap();

    table.apply_action(SeatId(0), A::Bet(40)).unwrap();
    table.apply_action(SeatId(1), A::Call).unwrap();
    table.apply_action(SeatId(2), A::Fold).unwrap();
    table.apply_action(SeatId(0), A::Bet(60)).unwrap();
    let state = table.apply_action(SeatId(1), A::Fold).unwrap();

    assert_eq!(state.stage, Stage::UncontestedEnd);
    let result = table.showdown_result().unwrap();
    assert!(result.showdown.is_none(), "nobody shows an uncontested win");
    assert_eq!(
        result.payouts,
        vec![Payout {
            seat: SeatId(0),
            amount: 140,
        }]
    );
    assert_eq!(table.seats()[0].stack(), 1_040);
    assert_eq!(table.seats()[1].stack(), 960);
    assert_eq!(table.seats()[2].stack(), 1_000);
    assert_eq!(table.pot(), 0);
}

#[test]
fn stacked_deck_decides_the_showdown() {
    // Seat 0 gets aces, seat 1 kings, seat 2 junk. Deals go around the
    // table one card at a time and the board comes straight off the top.
    let deck = stacked(&[
        c(S::Clubs, R::Ace),    // seat 0
        c(S::Clubs, R::King),   // seat 1
        c(S::Clubs, R::Two),    // seat 2
        c(S::Diamonds, R::Ace), // seat 0
        c(S::Diamonds, R::King), // seat 1
        c(S::Diamonds, R::Seven), // seat 2
        c(S::Hearts, R::Three), // flop
        c(S::Spades, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Jack), // turn
        c(S::Clubs, R::Four),  // river
    ]);
    let mut table = Table::new(three_seats(), None).unwrap();
    table.start_hand_with_deck(deck).unwrap();

    table.apply_action(SeatId(0), A::Bet(50)).unwrap();
    table.apply_action(SeatId(1), A::Call).unwrap();
    table.apply_action(SeatId(2), A::Fold).unwrap();
    for _ in 0..3 {
        table.apply_action(SeatId(0), A::Check).unwrap();
        let state = table.apply_action(SeatId(1), A::Check).unwrap();
        assert!(state.stage != Stage::PreFlop);
    }

    assert_eq!(table.stage(), Stage::Settled);
    assert_eq!(
        table.community(),
        &[
            c(S::Hearts, R::Three),
            c(S::Spades, R::Eight),
            c(S::Diamonds, R::Nine),
            c(S::Spades, R::Jack),
            c(S::Clubs, R::Four),
        ],
        "board must come off the deck with no burns"
    );

    let result = table.showdown_result().unwrap();
    assert_eq!(
        result.payouts,
        vec![Payout {
            seat: SeatId(0),
            amount: 100,
        }]
    );
    let revealed = result.showdown.as_ref().unwrap();
    assert_eq!(revealed.len(), 2, "only the contenders show");
    assert_eq!(revealed[0].seat, SeatId(0));
    assert_eq!(
        revealed[0].hole,
        [c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace)]
    );
    assert!(revealed[0].rank > revealed[1].rank);

    assert_eq!(table.seats()[0].stack(), 1_050);
    assert_eq!(table.seats()[1].stack(), 950);
    assert_eq!(table.seats()[2].stack(), 1_000);
}

#[test]
fn tied_hands_split_the_pot_with_odd_chip_after_button() {
    // A royal flush on the board plays for everyone left in.
    let deck = stacked(&[
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Two),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Three),
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
    ]);
    let mut table = Table::new(three_seats(), None).unwrap();
    table.start_hand_with_deck(deck).unwrap();

    // Pot reaches 13: 3 + 3 + 3 preflop, 2 + 2 on the flop.
    table.apply_action(SeatId(0), A::Bet(3)).unwrap();
    table.apply_action(SeatId(1), A::Call).unwrap();
    table.apply_action(SeatId(2), A::Call).unwrap();
    table.apply_action(SeatId(0), A::Bet(2)).unwrap();
    table.apply_action(SeatId(1), A::Call).unwrap();
    table.apply_action(SeatId(2), A::Fold).unwrap();
    for _ in 0..2 {
        table.apply_action(SeatId(0), A::Check).unwrap();
        table.apply_action(SeatId(1), A::Check).unwrap();
    }

    let result = table.showdown_result().unwrap();
    let revealed = result.showdown.as_ref().unwrap();
    assert_eq!(revealed[0].rank, revealed[1].rank, "the board plays");

    // 13 / 2 = 6 each; the odd chip goes to the first winner after the
    // button, which is seat 0.
    assert_eq!(
        result.payouts,
        vec![
            Payout {
                seat: SeatId(0),
                amount: 7,
            },
            Payout {
                seat: SeatId(1),
                amount: 6,
            },
        ]
    );
    assert_eq!(table.seats()[0].stack(), 1_002);
    assert_eq!(table.seats()[1].stack(), 1_001);
    assert_eq!(table.seats()[2].stack(), 997);
}

#[test]
fn settlement_resets_wagers_and_statuses() {
    let mut table = Table::new(three_seats(), Some(5)).unwrap();
    table.start_hand().unwrap();

    table.apply_action(SeatId(0), A::Bet(50)).unwrap();
    table.apply_action(SeatId(1), A::Call).unwrap();
    table.apply_action(SeatId(2), A::Fold).unwrap();
    for _ in 0..3 {
        table.apply_action(SeatId(0), A::Check).unwrap();
        table.apply_action(SeatId(1), A::Check).unwrap();
    }
    assert_eq!(table.stage(), Stage::Settled);

    // The folded seat comes back Active and no river-street wagers
    // linger between hands.
    for seat in table.seats() {
        assert_eq!(seat.status(), SeatStatus::Active);
        assert_eq!(seat.bet_this_round(), 0, "seat {} bet_this_round", seat.id());
        assert_eq!(seat.bet_this_hand(), 0, "seat {} bet_this_hand", seat.id());
    }
    let st = table.public_state();
    assert!(st.seats.iter().all(|s| s.status == SeatStatus::Active));
    assert!(st.seats.iter().all(|s| s.bet_this_round == 0));
}

#[test]
fn all_in_runout_finishes_the_hand_in_one_call() {
    let deck = stacked(&[
        c(S::Clubs, R::Ace),  // seat 0
        c(S::Clubs, R::King), // seat 1
        c(S::Diamonds, R::Ace),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::Four),
    ]);
    let seats = vec![SeatConfig::new("a", 100), SeatConfig::new("b", 100)];
    let mut table = Table::new(seats, None).unwrap();
    table.start_hand_with_deck(deck).unwrap();

    table.apply_action(SeatId(0), A::Bet(100)).unwrap();
    let state = table.apply_action(SeatId(1), A::Call).unwrap();

    // Both all-in preflop: the board runs out inside that call.
    assert_eq!(state.stage, Stage::Settled);
    assert_eq!(table.community().len(), 5);
    assert_eq!(table.seats()[0].stack(), 200);
    assert_eq!(table.seats()[1].stack(), 0);
    assert_eq!(table.seats()[1].status(), SeatStatus::Eliminated);

    let err = table.start_hand().unwrap_err();
    assert_eq!(err, GameError::NotEnoughSeats { available: 1 });
}

#[test]
fn hand_lifecycle_errors() {
    let mut table = Table::new(three_seats(), Some(3)).unwrap();
    table.start_hand().unwrap();

    // Second deal while the hand is live.
    assert_eq!(table.start_hand().unwrap_err(), GameError::HandInProgress);

    // Finish it by folding around.
    table.apply_action(SeatId(0), A::Fold).unwrap();
    table.apply_action(SeatId(1), A::Fold).unwrap();
    assert_eq!(table.stage(), Stage::UncontestedEnd);

    // Terminal hands take no more actions.
    assert_eq!(
        table.apply_action(SeatId(2), A::Check).unwrap_err(),
        GameError::HandAlreadySettled
    );

    // A fresh deal works again.
    table.start_hand().unwrap();
}

#[test]
fn table_rejects_bad_seat_counts() {
    let one = vec![SeatConfig::new("only", 1_000)];
    assert_eq!(
        Table::new(one, None).unwrap_err(),
        GameError::InvalidSeatCount { count: 1 }
    );

    let ten: Vec<SeatConfig> = (0..10)
        .map(|i| SeatConfig::new(format!("p{}", i), 1_000))
        .collect();
    assert_eq!(
        Table::new(ten, None).unwrap_err(),
        GameError::InvalidSeatCount { count: 10 }
    );

    let nine: Vec<SeatConfig> = (0..9)
        .map(|i| SeatConfig::new(format!("p{}", i), 1_000))
        .collect();
    assert!(Table::new(nine, None).is_ok());
}

#[test]
fn table_rejects_bad_decks() {
    let mut table = Table::new(three_seats(), None).unwrap();

    let short = full_deck()[..51].to_vec();
    assert!(matches!(
        table.start_hand_with_deck(short).unwrap_err(),
        GameError::BadDeck { .. }
    ));

    let mut doubled = full_deck();
    doubled[0] = doubled[1];
    assert!(matches!(
        table.start_hand_with_deck(doubled).unwrap_err(),
        GameError::BadDeck { .. }
    ));

    // A valid deck still works afterwards.
    table.start_hand_with_deck(full_deck()).unwrap();
}

#[test]
fn button_rotates_between_hands() {
    let mut table = Table::new(three_seats(), Some(21)).unwrap();

    let state = table.start_hand().unwrap();
    assert_eq!(table.button(), SeatId(2));
    assert_eq!(state.seat_to_act, Some(SeatId(0)));
    assert_eq!(table.hand_no(), 1);

    table.apply_action(SeatId(0), A::Fold).unwrap();
    table.apply_action(SeatId(1), A::Fold).unwrap();

    let state = table.start_hand().unwrap();
    assert_eq!(table.button(), SeatId(0));
    assert_eq!(state.seat_to_act, Some(SeatId(1)));
    assert_eq!(table.hand_no(), 2);
}

#[test]
fn eliminated_seats_are_skipped_on_later_deals() {
    // Seat 0 shoves a short stack into aces and busts.
    let deck = stacked(&[
        c(S::Clubs, R::Two),  // seat 0
        c(S::Clubs, R::Ace),  // seat 1
        c(S::Spades, R::Queen), // seat 2
        c(S::Diamonds, R::Seven), // seat 0
        c(S::Diamonds, R::Ace), // seat 1
        c(S::Clubs, R::Queen), // seat 2
        c(S::Hearts, R::Three),
        c(S::Spades, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::Four),
    ]);
    let seats = vec![
        SeatConfig::new("short", 100),
        SeatConfig::new("covered", 1_000),
        SeatConfig::new("bystander", 1_000),
    ];
    let mut table = Table::new(seats, None).unwrap();
    table.start_hand_with_deck(deck).unwrap();

    table.apply_action(SeatId(0), A::Bet(100)).unwrap();
    table.apply_action(SeatId(1), A::Call).unwrap();
    let state = table.apply_action(SeatId(2), A::Fold).unwrap();

    assert_eq!(state.stage, Stage::Settled);
    assert_eq!(table.seats()[0].stack(), 0);
    assert_eq!(table.seats()[0].status(), SeatStatus::Eliminated);
    assert_eq!(table.seats()[1].stack(), 1_100);

    // Next hand deals around the busted seat.
    let state = table.start_hand().unwrap();
    assert_eq!(table.button(), SeatId(1), "button skips the busted seat");
    assert_eq!(state.seat_to_act, Some(SeatId(2)));
    assert_eq!(table.seats()[0].hole_cards(), [None, None]);
    assert_eq!(table.seats()[0].status(), SeatStatus::Eliminated);
}

#[test]
fn chips_are_conserved_across_many_hands() {
    let mut table = Table::new(three_seats(), Some(99)).unwrap();

    for _ in 0..5 {
        table.start_hand().unwrap();
        // Seat 0 opens every street for 25, everyone else calls.
        while let Some(seat) = table.public_state().seat_to_act {
            let st = table.public_state();
            let owed = st.highest_bet - st.seats[seat.0].bet_this_round;
            let action = if owed > 0 {
                A::Call
            } else if seat == SeatId(0) {
                A::Bet(25)
            } else {
                A::Check
            };
            table.apply_action(seat, action).unwrap();
        }
        assert!(table.stage().is_terminal());
        let total: u32 = table.seats().iter().map(|s| s.stack()).sum();
        assert_eq!(total, 3_000, "chips only move between stacks");
    }
    assert_eq!(table.hand_no(), 5);
}
