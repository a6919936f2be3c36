//! Ranks five-card poker hands and picks the best five cards out of up to
//! seven (two hole cards plus the board).

use super::card::{Card, Rank};
use enum_map::EnumMap;
use itertools::Itertools;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandClass {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

/// The strength of a five-card hand. Ordering is total: class first, then the
/// class-specific tiebreak ranks from most to least significant. Two hands of
/// equal strength compare equal even when their suits differ.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandValue {
    pub class: HandClass,
    tiebreak: [u8; 5],
}

/// Evaluate exactly five cards.
pub fn evaluate_five(cards: [Card; 5]) -> HandValue {
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_high(&cards);

    if let Some(high) = straight_high {
        let class = if flush {
            HandClass::StraightFlush
        } else {
            HandClass::Straight
        };
        return HandValue {
            class,
            tiebreak: [high, 0, 0, 0, 0],
        };
    }

    let mut counts: EnumMap<Rank, usize> = EnumMap::default();
    for c in &cards {
        counts[c.rank] += 1;
    }
    // Card values ordered by group size first, then rank, so e.g. the pair in
    // AAKQJ leads the tiebreak and the kickers follow.
    let grouped: Vec<u8> = counts
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .sorted_by_key(|(r, n)| (*n, r.value()))
        .rev()
        .flat_map(|(r, n)| std::iter::repeat(r.value()).take(n))
        .collect();
    let mut tiebreak = [0u8; 5];
    tiebreak.copy_from_slice(&grouped);

    let mut group_sizes: Vec<usize> = counts.values().copied().filter(|n| *n > 0).collect();
    group_sizes.sort_unstable_by(|a, b| b.cmp(a));

    let class = match group_sizes.as_slice() {
        [4, 1] => HandClass::FourOfAKind,
        [3, 2] => HandClass::FullHouse,
        _ if flush => HandClass::Flush,
        [3, 1, 1] => HandClass::ThreeOfAKind,
        [2, 2, 1] => HandClass::TwoPair,
        [2, 1, 1, 1] => HandClass::Pair,
        _ => HandClass::HighCard,
    };
    HandValue { class, tiebreak }
}

/// Best five-card hand from five, six, or seven cards.
///
/// # Panics
///
/// Panics if fewer than five cards are supplied; the caller only reaches
/// showdown with a full board.
pub fn best_of_seven(cards: &[Card]) -> HandValue {
    assert!(cards.len() >= 5, "showdown requires at least five cards");
    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|combo| {
            let mut five = [combo[0]; 5];
            five.copy_from_slice(&combo);
            evaluate_five(five)
        })
        .max()
        .expect("at least one five-card combination")
}

/// The high-card value of a straight, if the five cards form one. The wheel
/// (A-2-3-4-5) ranks as a five-high straight.
fn straight_high(cards: &[Card; 5]) -> Option<u8> {
    let values: Vec<u8> = cards
        .iter()
        .map(|c| c.rank.value())
        .sorted_unstable()
        .rev()
        .collect();
    if values.iter().unique().count() != 5 {
        return None;
    }
    if values[0] - values[4] == 4 {
        return Some(values[0]);
    }
    if values == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::cards_from_str;

    fn value(s: &str) -> HandValue {
        let cards = cards_from_str(s);
        best_of_seven(&cards)
    }

    fn class(s: &str) -> HandClass {
        value(s).class
    }

    #[test]
    fn classes() {
        assert_eq!(class("Th4s6d3d8cJhAc"), HandClass::HighCard);
        assert_eq!(class("AhAsJs5h7c2d3c"), HandClass::Pair);
        assert_eq!(class("AhAs5h5d6s2c9d"), HandClass::TwoPair);
        assert_eq!(class("AhAsAc5d6s2c9d"), HandClass::ThreeOfAKind);
        assert_eq!(class("9h8c7d6s5cKdKs"), HandClass::Straight);
        assert_eq!(class("9h2h5h6hQhAcAd"), HandClass::Flush);
        assert_eq!(class("AhAsAdKhKs2c3c"), HandClass::FullHouse);
        assert_eq!(class("AhAsAdAc5d2c3c"), HandClass::FourOfAKind);
        assert_eq!(class("9h8h7h6h5h2c3c"), HandClass::StraightFlush);
    }

    #[test]
    fn wheel_is_five_high() {
        assert_eq!(class("Ah2c3s4d5h9cJd"), HandClass::Straight);
        assert!(value("6h5d4c3s2h") > value("Ah2c3s4d5h"));
    }

    #[test]
    fn royal_is_top_straight_flush() {
        let royal = value("AhKhQhJhTh");
        assert_eq!(royal.class, HandClass::StraightFlush);
        assert!(royal > value("KhQhJhTh9h"));
    }

    fn win_lose(s1: &str, s2: &str, hc: HandClass) {
        let h1 = value(s1);
        let h2 = value(s2);
        assert_eq!(h1.class, hc);
        assert_eq!(h2.class, hc);
        assert!(h1 > h2, "{} should beat {}", s1, s2);
        assert!(h2 < h1);
    }

    fn tie(s1: &str, s2: &str, hc: HandClass) {
        let h1 = value(s1);
        let h2 = value(s2);
        assert_eq!(h1.class, hc);
        assert_eq!(h1, h2, "{} should tie {}", s1, s2);
    }

    #[test]
    fn straight_flush_compare() {
        win_lose("KcQcJcTc9c", "QdJdTd9d8d", HandClass::StraightFlush);
        win_lose("6c5c4c3c2c", "5d4d3d2dAd", HandClass::StraightFlush);
        tie("KcQcJcTc9c", "KdQdJdTd9d", HandClass::StraightFlush);
    }

    #[test]
    fn quads_compare() {
        win_lose("4c4d4h4s3c", "3c3d3h3s2d", HandClass::FourOfAKind);
        win_lose("4c4d4h4s5c", "4c4d4h4s3c", HandClass::FourOfAKind);
        tie("2c2d2h2s3c", "2c2d2h2s3d", HandClass::FourOfAKind);
    }

    #[test]
    fn full_house_compare() {
        win_lose("4c4d4h3s3c", "3c3d3h2s2d", HandClass::FullHouse);
        win_lose("4c4d4h5s5c", "4c4d4h3s3c", HandClass::FullHouse);
        tie("AcAdAhKcKd", "AdAhAsKhKs", HandClass::FullHouse);
    }

    #[test]
    fn flush_compare() {
        win_lose("AsKsQsJs3s", "AdKdQdJd2d", HandClass::Flush);
        win_lose("As6s5s4s3s", "Kd7d6d5d4d", HandClass::Flush);
        tie("AsKsQsJs2s", "AdKdQdJd2d", HandClass::Flush);
    }

    #[test]
    fn straight_compare() {
        win_lose("AsKsQsJsTd", "KcQcJcTc9s", HandClass::Straight);
        win_lose("6s5s4s3s2d", "Ac2c3c4c5s", HandClass::Straight);
        tie("AsKsQsJsTd", "AcKcQcJcTs", HandClass::Straight);
    }

    #[test]
    fn trips_compare() {
        win_lose("AcAdAh4s3d", "AsAcAd3c2s", HandClass::ThreeOfAKind);
        win_lose("9c9d9hTsJd", "9s9c9d2c3s", HandClass::ThreeOfAKind);
        tie("3c3d3hAsKd", "3s3c3dAcKs", HandClass::ThreeOfAKind);
    }

    #[test]
    fn two_pair_compare() {
        win_lose("AsAdKsKdJd", "AcAdKcKdTs", HandClass::TwoPair);
        win_lose("AsAdKsKdJd", "AcAdQcQdKs", HandClass::TwoPair);
        tie("AsAdKsKdTd", "AcAdKcKdTs", HandClass::TwoPair);
    }

    #[test]
    fn pair_compare() {
        win_lose("AcAdKh4s3d", "AcAd5h4s3d", HandClass::Pair);
        win_lose("AcAd5h4s3d", "AcAd5h4s2d", HandClass::Pair);
        tie("AcAd5h4s3d", "AcAd5s4c3h", HandClass::Pair);
    }

    #[test]
    fn high_card_compare() {
        win_lose("Ac7d6h5s4d", "Ac6d5h4s3d", HandClass::HighCard);
        win_lose("8c7d6h4s3d", "7c6d5h3s2d", HandClass::HighCard);
        tie("KcQdJhTs5c", "KdQhJsTc5d", HandClass::HighCard);
    }

    #[test]
    fn seven_cards_pick_best_five() {
        // The board pairs up; the best hand ignores the weak hole cards.
        let board_only = value("2c3dAdKdQdJdTd");
        assert_eq!(board_only.class, HandClass::StraightFlush);
        // Pocket fives plus one on the board make trips, not two pair.
        assert_eq!(class("5h5cAh5dKc2s9d"), HandClass::ThreeOfAKind);
    }
}
