//! Day 4: Scratchcards.

use lib::prelude::{split, trim, Input, Result};

use crate::error::{integers, Error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub winning: Vec<u32>,
    pub mine: Vec<u32>,
}

impl Card {
    /// Parse a line like `Card 1: 41 48 83 | 83 86  6`.
    pub fn parse(n: usize, line: &str) -> Result<Self, Error> {
        let [left, mine] = split(line, "|")[..] else {
            return Err(Error::Expected(n, "|"));
        };

        let [_, winning] = split(left, ":")[..] else {
            return Err(Error::Expected(n, ":"));
        };

        Ok(Self {
            winning: integers(n, winning)?,
            mine: integers(n, mine)?,
        })
    }

    /// Number of distinct numbers of mine which are winning.
    pub fn matches(&self) -> usize {
        let mut mine = self.mine.clone();
        mine.sort_unstable();
        mine.dedup();
        mine.iter().filter(|n| self.winning.contains(n)).count()
    }

    /// Points are doubled for every match after the first.
    pub fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            n => u32::try_from(n - 1)
                .ok()
                .and_then(|s| 1u64.checked_shl(s))
                .unwrap_or(u64::MAX),
        }
    }
}

/// Count every card once winning copies of the cards after it has been
/// accounted for.
pub fn copies(cards: &[Card]) -> u64 {
    let mut copies = vec![1u64; cards.len()];

    for (i, card) in cards.iter().enumerate() {
        let add = copies[i];

        for c in copies.iter_mut().skip(i + 1).take(card.matches()) {
            *c = c.saturating_add(add);
        }
    }

    copies.iter().copied().fold(0, u64::saturating_add)
}

/// Total points and total number of cards.
pub fn solve(input: &Input) -> Result<(u64, u64)> {
    let mut cards = Vec::with_capacity(input.len());

    for (n, line) in input.numbered() {
        if trim(line).is_empty() {
            continue;
        }

        cards.push(Card::parse(n, line)?);
    }

    let points = cards.iter().map(Card::points).sum();
    Ok((points, copies(&cards)))
}
