//! Day 6: Wait For It.

use lib::prelude::{ensure, is_digit, Input, Result};

use crate::error::{integer, integers, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub distance: u64,
}

impl Race {
    #[inline]
    fn wins(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.distance)
    }

    /// Number of hold times which beat the record distance.
    ///
    /// Distance travelled is symmetric around half the race time, so we
    /// search for the first winning hold time in the lower half.
    pub fn ways_to_win(&self) -> u64 {
        let mut hi = self.time / 2;

        if !self.wins(hi) {
            return 0;
        }

        let mut lo = 0;

        while lo < hi {
            let mid = lo + (hi - lo) / 2;

            if self.wins(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        self.time - 2 * lo + 1
    }
}

/// Find the line with the given label and return what follows it.
fn field<'a>(input: &'a Input, label: &'static str) -> Result<(usize, &'a str), Error> {
    input
        .numbered()
        .find_map(|(n, line)| Some((n, line.strip_prefix(label)?)))
        .ok_or(Error::Expected(input.len() + 1, label))
}

/// Read the digits of a line as one number, ignoring the spaces in between.
fn kerned(n: usize, line: &str) -> Result<u64, Error> {
    let digits = line
        .bytes()
        .filter(|&b| is_digit(b))
        .map(char::from)
        .collect::<String>();

    integer(n, &digits)
}

/// Product of ways to win each race, and ways to win the single long race.
pub fn solve(input: &Input) -> Result<(u64, u64)> {
    let (tn, times) = field(input, "Time:")?;
    let (dn, distances) = field(input, "Distance:")?;

    let race = Race {
        time: kerned(tn, times)?,
        distance: kerned(dn, distances)?,
    };

    let times = integers::<u64>(tn, times)?;
    let distances = integers::<u64>(dn, distances)?;

    ensure!(
        times.len() == distances.len(),
        "{} times but {} distances",
        times.len(),
        distances.len()
    );

    let o1 = times
        .iter()
        .zip(&distances)
        .map(|(&time, &distance)| Race { time, distance }.ways_to_win())
        .product();

    Ok((o1, race.ways_to_win()))
}
