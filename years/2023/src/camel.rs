//! Day 7: Camel Cards.

use lib::prelude::{trim, Input, Result};

use crate::error::{integer, Error};

const JACK: u8 = 11;
const JOKER: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

/// The strength of a card, where jacks are either `11` or jokers at `0`.
fn strength(n: usize, card: char, jokers: bool) -> Result<u8, Error> {
    let s = match card {
        '2'..='9' => card as u8 - b'0',
        'T' => 10,
        'J' if jokers => JOKER,
        'J' => JACK,
        'Q' => 12,
        'K' => 13,
        'A' => 14,
        _ => return Err(Error::BadCard(n, card)),
    };

    Ok(s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; 5],
    pub bid: u64,
}

impl Hand {
    /// Parse a line like `32T3K 765`.
    pub fn parse(n: usize, line: &str, jokers: bool) -> Result<Self, Error> {
        let Some((cards, bid)) = trim(line).split_once(' ') else {
            return Err(Error::Expected(n, "<cards> <bid>"));
        };

        let cards = cards
            .chars()
            .map(|c| strength(n, c, jokers))
            .collect::<Result<Vec<_>, _>>()?;

        let Ok(cards) = <[u8; 5]>::try_from(cards) else {
            return Err(Error::Expected(n, "five cards"));
        };

        Ok(Self {
            cards,
            bid: integer(n, trim(bid))?,
        })
    }

    pub fn kind(&self) -> Kind {
        let mut counts = [0u8; 15];
        let mut wild = 0;

        for &c in &self.cards {
            if c == JOKER {
                wild += 1;
            } else {
                counts[c as usize] += 1;
            }
        }

        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts[0] += wild;

        match (counts[0], counts[1]) {
            (5, _) => Kind::FiveOfAKind,
            (4, _) => Kind::FourOfAKind,
            (3, 2) => Kind::FullHouse,
            (3, _) => Kind::ThreeOfAKind,
            (2, 2) => Kind::TwoPair,
            (2, _) => Kind::OnePair,
            _ => Kind::HighCard,
        }
    }
}

/// Sum of bids weighted by the rank of each hand.
pub fn winnings(hands: &[Hand]) -> u64 {
    let mut hands = hands
        .iter()
        .map(|h| ((h.kind(), h.cards), h.bid))
        .collect::<Vec<_>>();

    hands.sort_unstable_by_key(|&(key, _)| key);

    hands
        .iter()
        .zip(1..)
        .map(|(&(_, bid), rank)| bid * rank)
        .sum()
}

fn parse(input: &Input, jokers: bool) -> Result<Vec<Hand>, Error> {
    input
        .numbered()
        .filter(|(_, line)| !trim(line).is_empty())
        .map(|(n, line)| Hand::parse(n, line, jokers))
        .collect()
}

/// Winnings with jacks, and winnings with jokers.
pub fn solve(input: &Input) -> Result<(u64, u64)> {
    let o1 = winnings(&parse(input, false)?);
    let o2 = winnings(&parse(input, true)?);
    Ok((o1, o2))
}
