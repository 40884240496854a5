use std::fmt;

/// Represents a line and column in the source. Both are 1-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Compute the location of the byte offset `pos` in `text`.
    /// Columns count chars, not bytes. `\r\n` counts as one line break.
    pub fn from_offset(text: &str, pos: usize) -> Self {
        let mut line = 1;
        let mut col = 1;
        let mut previous = None;
        for (i, c) in text.char_indices() {
            if i >= pos {
                break;
            }
            match c {
                '\n' => {
                    if previous != Some('\r') {
                        line += 1;
                    }
                    col = 1;
                }
                '\r' => {
                    line += 1;
                    col = 1;
                }
                _ => col += 1,
            }
            previous = Some(c);
        }
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
