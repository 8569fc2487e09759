//! Day 2: Cube Conundrum.

use lib::prelude::{split, trim, Input, Result};

use crate::error::{integer, Error};

/// Cubes available in the bag.
const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

/// A handful of cubes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cubes {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Cubes {
    /// Test if this handful could be drawn out of `bag`.
    #[inline]
    pub fn fits(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// Per-colour maximum of two handfuls.
    #[inline]
    pub fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    #[inline]
    pub fn power(&self) -> u64 {
        u64::from(self.red)
            .saturating_mul(u64::from(self.green))
            .saturating_mul(u64::from(self.blue))
    }
}

/// A game of draws out of the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<Cubes>,
}

impl Game {
    /// Parse a line like `Game 1: 3 blue, 4 red; 1 red, 2 green`.
    pub fn parse(n: usize, line: &str) -> Result<Self, Error> {
        let [head, rest] = split(line, ":")[..] else {
            return Err(Error::Expected(n, ":"));
        };

        let id = trim(head)
            .strip_prefix("Game ")
            .ok_or(Error::Expected(n, "Game"))?;
        let id = integer(n, trim(id))?;

        let mut draws = Vec::new();

        for set in split(rest, ";") {
            let mut cubes = Cubes::default();

            for pull in split(set, ",") {
                let [count, color] = split(trim(pull), " ")[..] else {
                    return Err(Error::Expected(n, "<count> <color>"));
                };

                let count: u32 = integer(n, count)?;

                match color {
                    "red" => cubes.red = cubes.red.saturating_add(count),
                    "green" => cubes.green = cubes.green.saturating_add(count),
                    "blue" => cubes.blue = cubes.blue.saturating_add(count),
                    other => log::warn!("{n}: unknown color `{other}`"),
                }
            }

            draws.push(cubes);
        }

        Ok(Self { id, draws })
    }

    /// The fewest cubes the bag must have held.
    pub fn minimum(&self) -> Cubes {
        self.draws.iter().fold(Cubes::default(), |a, b| a.max(*b))
    }
}

/// Sum of possible game ids and sum of minimum set powers.
pub fn solve(input: &Input) -> Result<(u64, u64)> {
    let mut o1 = 0u64;
    let mut o2 = 0u64;

    for (n, line) in input.numbered() {
        if trim(line).is_empty() {
            continue;
        }

        let game = Game::parse(n, line)?;

        if game.draws.iter().all(|d| d.fits(&BAG)) {
            o1 = o1.saturating_add(u64::from(game.id));
        }

        o2 = o2.saturating_add(game.minimum().power());
    }

    Ok((o1, o2))
}

#[cfg(test)]
mod tests {
    use lib::prelude::Input;

    use super::{solve, Cubes, Game};
    use crate::Error;

    #[test]
    fn test_parse() {
        let game = Game::parse(1, "Game 12: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();

        assert_eq!(game.id, 12);
        assert_eq!(
            game.draws,
            [
                Cubes {
                    red: 4,
                    green: 0,
                    blue: 3
                },
                Cubes {
                    red: 1,
                    green: 2,
                    blue: 6
                },
                Cubes {
                    red: 0,
                    green: 2,
                    blue: 0
                },
            ]
        );

        assert_eq!(game.minimum().power(), 48);
    }

    #[test]
    fn test_unknown_color_is_ignored() {
        let game = Game::parse(1, "Game 1: 3 purple, 1 red").unwrap();
        assert_eq!(
            game.draws,
            [Cubes {
                red: 1,
                green: 0,
                blue: 0
            }]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Game::parse(3, "Game 1 3 blue"),
            Err(Error::Expected(3, ":"))
        );
        assert_eq!(
            Game::parse(4, "Game x: 3 blue"),
            Err(Error::BadInteger(4, "x".into()))
        );
        assert_eq!(
            Game::parse(5, "Game 1: blue"),
            Err(Error::Expected(5, "<count> <color>"))
        );
    }

    #[test]
    fn test_impossible_game() {
        let input = Input::from_lines([
            "Game 1: 12 red, 13 green, 14 blue",
            "Game 2: 13 red",
            "",
        ]);
        assert_eq!(solve(&input).unwrap(), (1, 12 * 13 * 14));
    }

    #[test]
    fn test_large_counts() {
        let input = Input::from_lines(["Game 1: 2000 red, 2000 green, 2000 blue"]);
        assert_eq!(solve(&input).unwrap(), (0, 8_000_000_000));

        let game = Game::parse(1, "Game 1: 4294967295 red, 1 red").unwrap();
        assert_eq!(game.draws[0].red, u32::MAX);

        let cubes = Cubes {
            red: u32::MAX,
            green: u32::MAX,
            blue: u32::MAX,
        };
        assert_eq!(cubes.power(), u64::MAX);
    }
}
