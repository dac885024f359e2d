//! A position-tracking view over the remaining input.
//!
//! Adapted from the teacher's `CharsIterator` (single-slot rollback over
//! `std::str::Chars`): fragment and escape detection here need to look
//! ahead by two or three characters at once (`<%%`, `<%#`, `%>`), which a
//! one-slot rollback can't express directly, so this cursor instead holds
//! the remaining `&str` directly and answers lookahead with `starts_with`.

#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str, starting_line: usize) -> Self {
        Self {
            rest: input,
            line: starting_line,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        self.rest.starts_with(pattern)
    }

    pub fn first(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past one character, tracking the line counter.
    pub fn bump(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Advances past exactly `pattern`, which must be a prefix of the
    /// remaining input. Panics (a programmer error, not an input error) if
    /// it isn't — callers always check `starts_with` first.
    pub fn advance_past(&mut self, pattern: &str) {
        for _ in pattern.chars() {
            self.bump().expect("advance_past: pattern is not a prefix of the remaining input");
        }
    }
}

#[cfg(test)]
mod tests;
