//! Day 8: Haunted Wasteland.

use std::collections::HashMap;

use lib::prelude::{split, trim, Context, Input, Result};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    pub turns: Vec<Turn>,
    pub nodes: HashMap<String, (String, String)>,
}

impl Network {
    pub fn parse(input: &Input) -> Result<Self, Error> {
        let mut lines = input.numbered();

        let (n, first) = lines.next().ok_or(Error::UnexpectedEof)?;

        let turns = trim(first)
            .chars()
            .map(|c| match c {
                'L' => Ok(Turn::Left),
                'R' => Ok(Turn::Right),
                c => Err(Error::BadInstruction(n, c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if turns.is_empty() {
            return Err(Error::Expected(n, "<instructions>"));
        }

        let mut nodes = HashMap::new();

        for (n, line) in lines {
            let line = trim(line);

            if line.is_empty() {
                continue;
            }

            let [name, edges] = split(line, " = ")[..] else {
                return Err(Error::Expected(n, " = "));
            };

            let edges = edges
                .strip_prefix('(')
                .and_then(|e| e.strip_suffix(')'))
                .ok_or(Error::Expected(n, "(<left>, <right>)"))?;

            let [left, right] = split(edges, ", ")[..] else {
                return Err(Error::Expected(n, "(<left>, <right>)"));
            };

            nodes.insert(name.to_owned(), (left.to_owned(), right.to_owned()));
        }

        Ok(Self { turns, nodes })
    }

    /// Count steps from `start` until `done` holds for the node reached.
    ///
    /// Gives up once every combination of node and instruction has been
    /// visited, since the walk repeats from there on.
    pub fn steps<F>(&self, start: &str, done: F) -> Result<u64, Error>
    where
        F: Fn(&str) -> bool,
    {
        let limit = self.nodes.len() * self.turns.len();
        let mut node = start;

        for (step, turn) in self.turns.iter().cycle().take(limit).enumerate() {
            let (left, right) = self
                .nodes
                .get(node)
                .ok_or_else(|| Error::MissingNode(node.to_owned()))?;

            node = match turn {
                Turn::Left => left.as_str(),
                Turn::Right => right.as_str(),
            };

            if done(node) {
                return Ok(step as u64 + 1);
            }
        }

        Err(Error::NoPath(start.to_owned()))
    }

    /// Steps for every node ending in `A` to reach a node ending in `Z` at
    /// the same time.
    pub fn ghost_steps(&self) -> Result<u64> {
        let mut starts = self
            .nodes
            .keys()
            .filter(|name| name.ends_with('A'))
            .collect::<Vec<_>>();

        starts.sort();

        let mut total = None;

        for start in starts {
            let steps = self.steps(start, |node| node.ends_with('Z'))?;
            log::debug!("{start}: {steps} steps");
            total = Some(total.map_or(steps, |t| num::integer::lcm(t, steps)));
        }

        total.context("no nodes ending in `A`")
    }
}

/// Steps from `AAA` to `ZZZ`, and steps for all ghosts at once.
pub fn solve(input: &Input) -> Result<(u64, u64)> {
    let network = Network::parse(input)?;
    let o1 = network.steps("AAA", |node| node == "ZZZ")?;
    let o2 = network.ghost_steps()?;
    Ok((o1, o2))
}

#[cfg(test)]
mod tests {
    use lib::prelude::Input;

    use super::{Network, Turn};
    use crate::Error;

    #[test]
    fn test_repeat_instructions() {
        let input = Input::from_lines([
            "LLR",
            "",
            "AAA = (BBB, BBB)",
            "BBB = (AAA, ZZZ)",
            "ZZZ = (ZZZ, ZZZ)",
        ]);

        let network = Network::parse(&input).unwrap();
        assert_eq!(network.turns, [Turn::Left, Turn::Left, Turn::Right]);
        assert_eq!(network.steps("AAA", |n| n == "ZZZ"), Ok(6));
    }

    #[test]
    fn test_ghosts() {
        let input = Input::from_lines([
            "LR",
            "",
            "11A = (11B, XXX)",
            "11B = (XXX, 11Z)",
            "11Z = (11B, XXX)",
            "22A = (22B, XXX)",
            "22B = (22C, 22C)",
            "22C = (22Z, 22Z)",
            "22Z = (22B, 22B)",
            "XXX = (XXX, XXX)",
        ]);

        let network = Network::parse(&input).unwrap();
        assert_eq!(network.steps("11A", |n| n.ends_with('Z')), Ok(2));
        assert_eq!(network.steps("22A", |n| n.ends_with('Z')), Ok(3));
        assert_eq!(network.ghost_steps().unwrap(), 6);
    }

    #[test]
    fn test_missing_node() {
        let input = Input::from_lines(["L", "AAA = (BBB, BBB)", "CCC = (CCC, CCC)"]);
        let network = Network::parse(&input).unwrap();
        assert_eq!(
            network.steps("AAA", |n| n == "ZZZ"),
            Err(Error::MissingNode("BBB".into()))
        );
    }

    #[test]
    fn test_no_path() {
        let input = Input::from_lines(["LR", "AAA = (AAA, AAA)", "ZZZ = (ZZZ, ZZZ)"]);
        let network = Network::parse(&input).unwrap();
        assert_eq!(
            network.steps("AAA", |n| n == "ZZZ"),
            Err(Error::NoPath("AAA".into()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Network::parse(&Input::default()),
            Err(Error::UnexpectedEof)
        );
        assert_eq!(
            Network::parse(&Input::from_lines(["LXR"])),
            Err(Error::BadInstruction(1, 'X'))
        );
        assert_eq!(
            Network::parse(&Input::from_lines(["L", "AAA (BBB, CCC)"])),
            Err(Error::Expected(2, " = "))
        );
        assert_eq!(
            Network::parse(&Input::from_lines(["L", "AAA = BBB, CCC"])),
            Err(Error::Expected(2, "(<left>, <right>)"))
        );
    }
}
