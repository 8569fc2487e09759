//! Input loading.

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use bstr::ByteSlice;

/// The lines of an input file.
#[derive(Debug, Clone, Default)]
pub struct Input {
    lines: Vec<String>,
}

impl Input {
    /// Load the input at the given path.
    ///
    /// An input which can't be opened or read is treated as having no lines
    /// at all, a warning is logged and processing carries on.
    pub fn load<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        match read(path) {
            Ok(data) => Self::from_bytes(&data),
            Err(error) => {
                log::warn!("{}: {error}", path.display());
                Self::default()
            }
        }
    }

    /// Construct an input from raw bytes.
    ///
    /// Both `\n` and `\r\n` terminate a line and invalid UTF-8 is replaced.
    pub fn from_bytes(data: &[u8]) -> Self {
        let lines = data
            .lines()
            .map(|line| line.to_str_lossy().into_owned())
            .collect();

        Self { lines }
    }

    /// Construct an input from text.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::Input;
    ///
    /// let input = Input::from_text("467..114..\n...*......\n");
    /// assert_eq!(input.len(), 2);
    /// assert_eq!(input.get(1), Some("...*......"));
    /// ```
    #[inline]
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Construct an input from already split lines.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines in the input.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Test if the input has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line at the given zero-based index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        Some(self.lines.get(index)?.as_str())
    }

    /// Iterate over lines.
    #[inline]
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Iterate over lines together with their 1-based line number.
    #[inline]
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.lines().enumerate().map(|(n, line)| (n + 1, line))
    }
}

fn read(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buf = Vec::with_capacity(4096);
    file.read_to_end(&mut buf)?;
    Ok(buf)
}
