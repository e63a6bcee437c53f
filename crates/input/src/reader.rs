//! Token reader over a buffered input stream.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of typed characters, one per prompt.
pub trait InputSource {
    /// First character of the next whitespace-delimited token, or `None` once
    /// the input is exhausted.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

/// Reads lines and hands out their tokens one at a time.
///
/// Several tokens typed on one line are consumed by successive prompts;
/// blank lines are skipped.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<char>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }
}

impl TokenReader<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for TokenReader<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                self.line
                    .split_whitespace()
                    .filter_map(|token| token.chars().next()),
            );
        }
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> TokenReader<&[u8]> {
        TokenReader::new(text.as_bytes())
    }

    #[test]
    fn test_first_char_of_each_token() {
        let mut r = reader("apple\n  b\n");
        assert_eq!(r.next_char().unwrap(), Some('a'));
        assert_eq!(r.next_char().unwrap(), Some('b'));
        assert_eq!(r.next_char().unwrap(), None);
    }

    #[test]
    fn test_several_tokens_on_one_line() {
        let mut r = reader("x y\tz\n");
        let chars: Vec<char> = std::iter::from_fn(|| r.next_char().unwrap()).collect();
        assert_eq!(chars, vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut r = reader("\n   \n\nq");
        assert_eq!(r.next_char().unwrap(), Some('q'));
        assert_eq!(r.next_char().unwrap(), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(reader("").next_char().unwrap(), None);
    }
}
