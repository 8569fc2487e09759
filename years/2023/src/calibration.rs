//! Day 1: Trebuchet?!

use lib::prelude::{is_digit, Input, Result};

/// Get the digit starting at `at`, optionally accepting spelled out digits.
fn digit_at(line: &[u8], at: usize, words: bool) -> Option<u32> {
    let rest = line.get(at..)?;
    let &first = rest.first()?;

    if is_digit(first) {
        return Some(u32::from(first - b'0'));
    }

    if !words {
        return None;
    }

    let d = match rest {
        [b'o', b'n', b'e', ..] => 1,
        [b't', b'w', b'o', ..] => 2,
        [b't', b'h', b'r', b'e', b'e', ..] => 3,
        [b'f', b'o', b'u', b'r', ..] => 4,
        [b'f', b'i', b'v', b'e', ..] => 5,
        [b's', b'i', b'x', ..] => 6,
        [b's', b'e', b'v', b'e', b'n', ..] => 7,
        [b'e', b'i', b'g', b'h', b't', ..] => 8,
        [b'n', b'i', b'n', b'e', ..] => 9,
        _ => return None,
    };

    Some(d)
}

/// The calibration value of a line: its first and last digit as a two-digit
/// number, or `None` if it has no digits.
///
/// Spelled out digits may overlap, so `eightwo` has both an 8 and a 2.
pub fn value(line: &str, words: bool) -> Option<u32> {
    let bytes = line.as_bytes();
    let first = (0..bytes.len()).find_map(|at| digit_at(bytes, at, words))?;
    let last = (0..bytes.len())
        .rev()
        .find_map(|at| digit_at(bytes, at, words))?;
    Some(first * 10 + last)
}

/// Sum of calibration values using digits only, and using spelled out digits
/// as well.
pub fn solve(input: &Input) -> Result<(u32, u32)> {
    let mut o1 = 0;
    let mut o2 = 0;

    for (n, line) in input.numbered() {
        match value(line, false) {
            Some(v) => o1 += v,
            None => log::debug!("{n}: no digits in {line:?}"),
        }

        match value(line, true) {
            Some(v) => o2 += v,
            None => log::debug!("{n}: no digits or words in {line:?}"),
        }
    }

    Ok((o1, o2))
}
