//! Small string helpers shared by the puzzle solvers.


/// A maximal run of ASCII digits inside of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Column of the first digit.
    pub start: usize,
    /// Number of digits, always at least one.
    pub len: usize,
}

impl Span {
    /// Construct a new span.
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end column of the span.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::Span;
    ///
    /// assert_eq!(Span::new(2, 3).end(), 5);
    /// ```
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Inclusive last column of the span.
    #[inline]
    pub const fn last(&self) -> usize {
        self.end() - 1
    }

    /// Test if the span has a column in common with the inclusive range
    /// `start..=end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::Span;
    ///
    /// let span = Span::new(2, 3);
    /// assert!(span.overlaps(0, 2));
    /// assert!(span.overlaps(4, 9));
    /// assert!(!span.overlaps(0, 1));
    /// assert!(!span.overlaps(5, 5));
    /// ```
    #[inline]
    pub const fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start <= end && self.last() >= start
    }

    /// Get the text covered by this span.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.start..self.end())
    }
}

/// Test if the given byte is an ASCII digit.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Trim leading and trailing spaces.
///
/// Only the space character is trimmed, tabs and other whitespace are kept.
///
/// # Examples
///
/// ```
/// use lib::strings::trim;
///
/// assert_eq!(trim("  3 blue "), "3 blue");
/// assert_eq!(trim("   "), "");
/// assert_eq!(trim("\tx "), "\tx");
/// ```
#[inline]
pub fn trim(string: &str) -> &str {
    string.trim_matches(' ')
}

/// Split a string on a literal delimiter.
///
/// Empty pieces are kept, so splitting a string with `n` delimiters always
/// produces `n + 1` parts.
///
/// # Examples
///
/// ```
/// use lib::strings::split;
///
/// assert_eq!(split("3 blue, 4 red", ", "), ["3 blue", "4 red"]);
/// assert_eq!(split("a;;b", ";"), ["a", "", "b"]);
/// assert_eq!(split("abc", ";"), ["abc"]);
/// ```
pub fn split<'a>(string: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![string];
    }

    let mut parts = Vec::new();
    let mut last = 0;

    for at in memchr::memmem::find_iter(string.as_bytes(), delimiter) {
        parts.push(&string[last..at]);
        last = at + delimiter.len();
    }

    parts.push(&string[last..]);
    parts
}

/// Find the run of digits starting at or after `offset`.
///
/// The run extends as far right as digits continue. An `offset` inside of a
/// run gives the remainder of that run, so callers wanting maximal runs
/// start at `0` or right after the end of the previous one.
///
/// # Examples
///
/// ```
/// use lib::strings::next_number;
/// use lib::Span;
///
/// assert_eq!(next_number("467..114..", 0), Some(Span::new(0, 3)));
/// assert_eq!(next_number("467..114..", 3), Some(Span::new(5, 3)));
/// assert_eq!(next_number("467..114..", 8), None);
/// assert_eq!(next_number("467..114..", 1), Some(Span::new(1, 2)));
/// ```
pub fn next_number(line: &str, offset: usize) -> Option<Span> {
    let bytes = line.as_bytes();
    let rest = bytes.get(offset..)?;

    let start = offset + rest.iter().position(|&b| is_digit(b))?;

    let len = bytes[start..]
        .iter()
        .position(|&b| !is_digit(b))
        .unwrap_or(bytes.len() - start);

    Some(Span::new(start, len))
}

/// Iterate over every maximal run of digits in a line, left to right.
///
/// # Examples
///
/// ```
/// use lib::strings::numbers;
/// use lib::Span;
///
/// let spans = numbers("617*......").collect::<Vec<_>>();
/// assert_eq!(spans, [Span::new(0, 3)]);
/// assert_eq!(numbers("......").count(), 0);
/// ```
#[inline]
pub fn numbers(line: &str) -> impl Iterator<Item = Span> + '_ {
    let mut offset = 0;

    core::iter::from_fn(move || {
        let span = next_number(line, offset)?;
        offset = span.end();
        Some(span)
    })
}
