//! Five-card poker hand evaluation over 5 to 7 cards.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Total-order strength of a hand. Field order matters: the derived
/// ordering compares the category first, then the kicker tuple, which is
/// exactly the hand-ranking order. Two hands are equal only when category
/// and full kicker tuple match, which is what makes split pots possible.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    /// Rank values ordered by (count desc, rank desc), zero-padded.
    pub kickers: [u8; 5],
}

/// Best five-card hand from 5 to 7 cards (2 hole + up to 5 community):
/// every 5-card subset is scored independently and the maximum wins.
pub fn evaluate_best(cards: &[Card]) -> HandRank {
    let n = cards.len();
    assert!(
        (5..=7).contains(&n),
        "hand evaluation takes 5 to 7 cards, got {n}"
    );

    let mut best: Option<HandRank> = None;
    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = score_five(&five);
                        if best.is_none_or(|br| r > br) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }
    best.expect("n >= 5 yields at least one combination")
}

/// Score exactly five cards.
fn score_five(cards: &[Card; 5]) -> HandRank {
    let mut rank_counts = [0u8; 15]; // indices 2..=14 used
    let mut suit_counts = [0u8; 4];
    for &card in cards {
        rank_counts[card.rank.value() as usize] += 1;
        suit_counts[suit_index(card.suit)] += 1;
    }

    // (count, rank) groups in (count desc, rank desc) order: the kicker
    // tuple for every made-hand category reads straight off this list.
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for r in (2..=14u8).rev() {
        let c = rank_counts[r as usize];
        if c > 0 {
            groups.push((c, r));
        }
    }
    groups.sort_by(|a, b| b.cmp(a));

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let straight_high = straight_high(&groups);

    if let Some(high) = straight_high {
        let category = if is_flush {
            Category::StraightFlush
        } else {
            Category::Straight
        };
        return HandRank {
            category,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    let pattern: Vec<u8> = groups.iter().map(|g| g.0).collect();
    match pattern.as_slice() {
        [4, 1] => HandRank {
            category: Category::FourOfAKind,
            kickers: [groups[0].1, groups[1].1, 0, 0, 0],
        },
        [3, 2] => HandRank {
            category: Category::FullHouse,
            kickers: [groups[0].1, groups[1].1, 0, 0, 0],
        },
        [3, 1, 1] => HandRank {
            category: Category::ThreeOfAKind,
            kickers: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        },
        [2, 2, 1] => HandRank {
            category: Category::TwoPair,
            kickers: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        },
        [2, 1, 1, 1] => HandRank {
            category: Category::Pair,
            kickers: [groups[0].1, groups[1].1, groups[2].1, groups[3].1, 0],
        },
        _ => {
            // Five distinct ranks: flush or plain high card.
            let category = if is_flush {
                Category::Flush
            } else {
                Category::HighCard
            };
            HandRank {
                category,
                kickers: [
                    groups[0].1,
                    groups[1].1,
                    groups[2].1,
                    groups[3].1,
                    groups[4].1,
                ],
            }
        }
    }
}

/// High card of a straight if the five cards form one. The wheel
/// A-2-3-4-5 counts the Ace as 1, so its high card is 5, not Ace.
fn straight_high(groups: &[(u8, u8)]) -> Option<u8> {
    if groups.len() != 5 {
        return None;
    }
    let hi = groups[0].1;
    let lo = groups[4].1;
    if hi - lo == 4 {
        return Some(hi);
    }
    if groups.iter().map(|g| g.1).eq([14, 5, 4, 3, 2]) {
        return Some(5);
    }
    None
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}
