//! Day 3: Gear Ratios.
//!
//! The engine schematic is scanned one window of three lines at a time. A
//! number in the middle line which touches a symbol, diagonals included, is a
//! part number. A `*` in the middle line touching exactly two numbers is a
//! gear whose ratio is the product of those numbers.

use core::ops::AddAssign;

use lib::prelude::{is_digit, ArrayVec, Input, Result, Span};

#[cfg(test)]
mod tests;

/// Marker of a potential gear.
const GEAR: u8 = b'*';

/// Most numbers which can surround a single column: two on each of the lines
/// above and below, and one on each side.
const MAX_NEIGHBOURS: usize = 6;

/// A number in one line of the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    /// Location of the digits.
    pub span: Span,
    /// Decoded value, saturating at `u64::MAX`.
    pub value: u64,
}

impl Number {
    fn decode(line: &str, span: Span) -> Self {
        let digits = line.as_bytes().get(span.start..span.end()).unwrap_or_default();

        let value = digits.iter().fold(0u64, |value, &d| {
            value
                .saturating_mul(10)
                .saturating_add(u64::from(d - b'0'))
        });

        Self { span, value }
    }
}

/// Extract every number in a line, left to right.
pub fn numbers(line: &str) -> Vec<Number> {
    lib::strings::numbers(line)
        .map(|span| Number::decode(line, span))
        .collect()
}

/// Test if the character at `column` is a symbol.
///
/// Digits and `.` are not symbols, and neither is anything outside of the
/// line.
#[inline]
pub fn is_symbol(line: &str, column: usize) -> bool {
    match line.as_bytes().get(column) {
        Some(&b) => !is_digit(b) && b != b'.',
        None => false,
    }
}

/// Test if any symbol on `line` is within one column of `span`.
#[inline]
pub fn touches_symbol(line: &str, span: Span) -> bool {
    (span.start.saturating_sub(1)..=span.end()).any(|column| is_symbol(line, column))
}

/// Running totals of a scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all part numbers.
    pub part_numbers: u64,
    /// Sum of all gear ratios.
    pub gear_ratios: u64,
}

impl AddAssign for Totals {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.part_numbers = self.part_numbers.saturating_add(rhs.part_numbers);
        self.gear_ratios = self.gear_ratios.saturating_add(rhs.gear_ratios);
    }
}

/// The line being scored together with its neighbours.
///
/// Lines outside of the schematic are empty.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    pub previous: &'a str,
    pub current: &'a str,
    pub next: &'a str,
}

impl<'a> Window<'a> {
    /// Construct a new window.
    #[inline]
    pub fn new(previous: &'a str, current: &'a str, next: &'a str) -> Self {
        Self {
            previous,
            current,
            next,
        }
    }

    /// Test if a span in the current line is a part number.
    pub fn is_part_number(&self, span: Span) -> bool {
        touches_symbol(self.previous, span)
            || span
                .start
                .checked_sub(1)
                .is_some_and(|column| is_symbol(self.current, column))
            || is_symbol(self.current, span.end())
            || touches_symbol(self.next, span)
    }

    /// Collect the numbers surrounding `column` in the current line.
    pub fn neighbours(&self, column: usize) -> ArrayVec<Number, MAX_NEIGHBOURS> {
        let previous = numbers(self.previous);
        let current = numbers(self.current);
        let next = numbers(self.next);
        neighbours(&previous, &current, &next, column)
    }

    /// Score the current line.
    pub fn score(&self) -> Totals {
        let mut totals = Totals::default();

        let current = numbers(self.current);

        for number in &current {
            if self.is_part_number(number.span) {
                totals.part_numbers = totals.part_numbers.saturating_add(number.value);
            }
        }

        let previous = numbers(self.previous);
        let next = numbers(self.next);

        for (column, c) in self.current.bytes().enumerate() {
            if c != GEAR {
                continue;
            }

            if let [a, b] = neighbours(&previous, &current, &next, column)[..] {
                let ratio = a.value.saturating_mul(b.value);
                totals.gear_ratios = totals.gear_ratios.saturating_add(ratio);
            }
        }

        totals
    }
}

fn neighbours(
    previous: &[Number],
    current: &[Number],
    next: &[Number],
    column: usize,
) -> ArrayVec<Number, MAX_NEIGHBOURS> {
    let start = column.saturating_sub(1);
    let end = column.saturating_add(1);

    let mut output = ArrayVec::new();

    for number in previous {
        if number.span.overlaps(start, end) {
            output.push(*number);
        }
    }

    // The column itself can't be covered since it holds a symbol.
    for number in current {
        let left = column
            .checked_sub(1)
            .is_some_and(|left| number.span.overlaps(left, left));

        if left || number.span.overlaps(end, end) {
            output.push(*number);
        }
    }

    for number in next {
        if number.span.overlaps(start, end) {
            output.push(*number);
        }
    }

    output
}

/// A scan over a whole schematic, fed one line at a time.
#[derive(Debug, Default)]
pub struct Scanner<'a> {
    previous: &'a str,
    current: Option<&'a str>,
    totals: Totals,
    windows: usize,
}

impl<'a> Scanner<'a> {
    /// Construct a new scanner.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line, scoring the line before it.
    pub fn push(&mut self, line: &'a str) {
        if let Some(current) = self.current {
            self.score(Window::new(self.previous, current, line));
            self.previous = current;
        }

        self.current = Some(line);
    }

    /// Number of windows scored so far.
    #[inline]
    pub fn windows(&self) -> usize {
        self.windows
    }

    /// Score the last line and return the totals.
    pub fn finish(mut self) -> Totals {
        if let Some(current) = self.current.take() {
            self.score(Window::new(self.previous, current, ""));
        }

        log::debug!("scored {} windows: {:?}", self.windows, self.totals);
        self.totals
    }

    fn score(&mut self, window: Window<'_>) {
        let totals = window.score();
        log::trace!("{:?}: {totals:?}", window.current);
        self.totals += totals;
        self.windows += 1;
    }
}

/// Scan every line of a schematic.
pub fn scan<'a, I>(lines: I) -> Totals
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = Scanner::new();

    for line in lines {
        scanner.push(line);
    }

    scanner.finish()
}

/// Sum of part numbers and sum of gear ratios.
pub fn solve(input: &Input) -> Result<(u64, u64)> {
    let totals = scan(input.lines());
    Ok((totals.part_numbers, totals.gear_ratios))
}
