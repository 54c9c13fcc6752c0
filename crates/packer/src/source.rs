//! Numbered input lines.

use std::collections::VecDeque;
use std::io::{self, BufRead, Lines};

/// One raw input line and its 0-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: u64,
    pub text: String,
}

impl RawLine {
    fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Iterates the lines of a reader, numbering them from zero.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Whitespace-only lines at
/// the very end of the input are dropped; whitespace-only lines followed by
/// more content are yielded like any other line.
///
/// # Examples
///
/// ```
/// use packer::LineSource;
///
/// let input = "8 : (1,15.3,€34)\n\n9 : (1,1,€1)\n \n\n";
/// let lines: Vec<_> = LineSource::new(input.as_bytes())
///     .map(|line| line.unwrap())
///     .map(|line| (line.number, line.text))
///     .collect();
///
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[1], (1, String::new()));
/// assert_eq!(lines[2], (2, "9 : (1,1,€1)".to_string()));
/// ```
#[derive(Debug)]
pub struct LineSource<R> {
    lines: Lines<R>,
    next_number: u64,
    pending: VecDeque<RawLine>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource {
            lines: reader.lines(),
            next_number: 0,
            pending: VecDeque::new(),
        }
    }

    fn read(&mut self) -> Option<io::Result<RawLine>> {
        let text = match self.lines.next()? {
            Ok(text) => text,
            Err(err) => return Some(Err(err)),
        };
        let number = self.next_number;
        self.next_number += 1;
        Some(Ok(RawLine { number, text }))
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }

        let line = match self.read()? {
            Ok(line) => line,
            Err(err) => return Some(Err(err)),
        };
        if !line.is_blank() {
            return Some(Ok(line));
        }

        // Hold blank lines back until something other than blank follows.
        self.pending.push_back(line);
        loop {
            match self.read() {
                None => {
                    self.pending.clear();
                    return None;
                }
                Some(Err(err)) => return Some(Err(err)),
                Some(Ok(line)) => {
                    let blank = line.is_blank();
                    self.pending.push_back(line);
                    if !blank {
                        break;
                    }
                }
            }
        }
        self.pending.pop_front().map(Ok)
    }
}
