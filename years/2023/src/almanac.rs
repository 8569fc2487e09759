//! Day 5: If You Give A Seed A Fertilizer.

use core::ops::Range;

use lib::prelude::{trim, Context, Input, Result};

use crate::error::{integers, Error};

/// Maps `len` values starting at `src` onto values starting at `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub dest: u64,
    pub src: u64,
    pub len: u64,
}

impl Mapping {
    #[inline]
    fn src_end(&self) -> u64 {
        self.src.saturating_add(self.len)
    }

    #[inline]
    fn get(&self, value: u64) -> Option<u64> {
        if value < self.src || value >= self.src_end() {
            return None;
        }

        Some(self.dest.saturating_add(value - self.src))
    }
}

/// A named section like `seed-to-soil`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub mappings: Vec<Mapping>,
}

impl Section {
    /// Map a value through the first matching range, or keep it as is.
    pub fn map(&self, value: u64) -> u64 {
        self.mappings
            .iter()
            .find_map(|m| m.get(value))
            .unwrap_or(value)
    }

    /// Map whole ranges, splitting them where mappings begin and end.
    pub fn map_ranges(&self, ranges: Vec<Range<u64>>) -> Vec<Range<u64>> {
        let mut pending = ranges;
        let mut output = Vec::new();

        for m in &self.mappings {
            let mut rest = Vec::new();

            for r in pending {
                let (start, end) = (m.src, m.src_end());

                let before = r.start..r.end.min(start);
                let inside = r.start.max(start)..r.end.min(end);
                let after = r.start.max(end)..r.end;

                if !before.is_empty() {
                    rest.push(before);
                }

                if !inside.is_empty() {
                    let dest = m.dest.saturating_add(inside.start - start);
                    output.push(dest..m.dest.saturating_add(inside.end - start));
                }

                if !after.is_empty() {
                    rest.push(after);
                }
            }

            pending = rest;
        }

        output.extend(pending);
        output
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    pub sections: Vec<Section>,
}

impl Almanac {
    /// Parse an almanac, whose sections are applied in the order they appear.
    pub fn parse(input: &Input) -> Result<Self, Error> {
        let mut almanac = Self::default();

        for (n, line) in input.numbered() {
            let line = trim(line);

            if line.is_empty() {
                continue;
            }

            if let Some(seeds) = line.strip_prefix("seeds:") {
                almanac.seeds = integers(n, seeds)?;
                continue;
            }

            if let Some(name) = line.strip_suffix(" map:") {
                almanac.sections.push(Section {
                    name: name.to_owned(),
                    mappings: Vec::new(),
                });
                continue;
            }

            let section = almanac
                .sections
                .last_mut()
                .ok_or(Error::Expected(n, "<name> map:"))?;

            let [dest, src, len] = integers::<u64>(n, line)?[..] else {
                return Err(Error::Expected(n, "<dest> <src> <len>"));
            };

            section.mappings.push(Mapping { dest, src, len });
        }

        Ok(almanac)
    }

    /// Follow a value through every section.
    pub fn location(&self, seed: u64) -> u64 {
        self.sections.iter().fold(seed, |value, s| s.map(value))
    }

    /// Follow ranges of values through every section.
    pub fn locations(&self, seeds: Vec<Range<u64>>) -> Vec<Range<u64>> {
        self.sections
            .iter()
            .fold(seeds, |ranges, s| s.map_ranges(ranges))
    }

    /// Seeds interpreted as pairs of start and length.
    pub fn seed_ranges(&self) -> Vec<Range<u64>> {
        self.seeds
            .chunks_exact(2)
            .map(|pair| pair[0]..pair[0].saturating_add(pair[1]))
            .collect()
    }
}

/// Lowest location of single seeds and of seed ranges.
pub fn solve(input: &Input) -> Result<(u64, u64)> {
    let almanac = Almanac::parse(input)?;

    let o1 = almanac
        .seeds
        .iter()
        .map(|&seed| almanac.location(seed))
        .min()
        .context("no seeds")?;

    let o2 = almanac
        .locations(almanac.seed_ranges())
        .iter()
        .map(|r| r.start)
        .min()
        .context("no seed ranges")?;

    log::debug!("{} sections", almanac.sections.len());
    Ok((o1, o2))
}
