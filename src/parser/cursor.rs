use crate::util::{is_insignificant_whitespace, Location, Stack};

use super::result::ParseErr;

/// A read position over some text with a stack of saved positions.
///
/// Speculative matching works like this:
///
/// - `push_checkpoint()` saves the current position.
/// - On success, `commit_checkpoint()` forgets the saved position and
///   keeps the current one.
/// - On failure, `rollback_checkpoint()` moves back to the saved
///   position and forgets it.
///
/// Every push must be matched by exactly one commit or rollback.
/// These are the only ways to move backward.
///
/// Positions are byte offsets into the text and always fall on char
/// boundaries.
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    checkpoints: Stack<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0, checkpoints: Stack::with_capacity(8) }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Text from the current position to the end.
    pub fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Line and column of the current position. This scans the text up
    /// to the position, so it's meant for diagnostics.
    pub fn loc(&self) -> Location {
        self.loc_at(self.pos)
    }

    pub fn loc_at(&self, pos: usize) -> Location {
        Location::from_offset(self.text, pos)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Peek at the current char. `None` means end of input.
    pub fn observe(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Move forward one char. Does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.observe() {
            self.pos += c.len_utf8();
        }
    }

    /// Get the current char and move past it.
    pub fn read(&mut self) -> Option<char> {
        let c = self.observe()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip insignificant whitespace. Returns true if any was skipped.
    pub fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.observe(), Some(c) if is_insignificant_whitespace(c)) {
            self.advance();
        }
        self.pos > start
    }

    // Checkpoints -----------------------------------------------------

    pub fn push_checkpoint(&mut self) {
        self.checkpoints.push(self.pos);
    }

    pub fn commit_checkpoint(&mut self) -> Result<(), ParseErr> {
        match self.checkpoints.pop() {
            Some(_) => Ok(()),
            None => Err(self.unbalanced("commit")),
        }
    }

    pub fn rollback_checkpoint(&mut self) -> Result<(), ParseErr> {
        match self.checkpoints.pop() {
            Some(pos) => {
                log::trace!("ROLLBACK: {} -> {pos} {}", self.pos, self.checkpoints);
                self.pos = pos;
                Ok(())
            }
            None => Err(self.unbalanced("rollback")),
        }
    }

    /// Text from the most recent checkpoint (inclusive) to the current
    /// position (exclusive). The checkpoint is kept.
    pub fn text_since_checkpoint(&self) -> Result<&'a str, ParseErr> {
        match self.checkpoints.peek() {
            Some(&start) if start <= self.pos => Ok(&self.text[start..self.pos]),
            Some(&start) => Err(ParseErr::inconsistency(
                format!("checkpoint {start} is ahead of position {}", self.pos),
                self.loc(),
            )),
            None => Err(self.unbalanced("read text since")),
        }
    }

    /// Number of saved positions, which is the current speculative
    /// nesting depth.
    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }

    fn unbalanced(&self, action: &str) -> ParseErr {
        ParseErr::inconsistency(
            format!("attempted to {action} checkpoint with no checkpoint saved"),
            self.loc(),
        )
    }
}
