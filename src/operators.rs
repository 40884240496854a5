//! Operator definitions and the precedence-ordered table the parser
//! consults when it looks for an infix operator.
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::ast::OperatorToken;
use crate::parser::{Cursor, ParseErr};

/// Table used when no operators are configured explicitly.
///
/// | precedence | associativity | lexemes |
/// |------------|---------------|---------|
/// | 0          | right-to-left | `=`     |
/// | 1          | left-to-right | `+`     |
/// | 1          | left-to-right | `-`     |
/// | 2          | left-to-right | `*`     |
/// | 2          | left-to-right | `/`     |
/// | 3          | right-to-left | `^`     |
pub static DEFAULT_OPERATORS: Lazy<OperatorTable> = Lazy::new(|| {
    use Associativity::*;
    let mut table = OperatorTable::new();
    for (precedence, associativity, lexeme) in [
        (0, RightToLeft, "="),
        (1, LeftToRight, "+"),
        (1, LeftToRight, "-"),
        (2, LeftToRight, "*"),
        (2, LeftToRight, "/"),
        (3, RightToLeft, "^"),
    ] {
        table.add_operator(Operator {
            precedence,
            associativity,
            lexemes: vec![lexeme.to_owned()],
        });
    }
    table
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

impl Associativity {
    pub fn from_name(name: &str) -> Result<Self, String> {
        let assoc = match name.to_ascii_lowercase().as_str() {
            "left" | "ltr" | "l" => Self::LeftToRight,
            "right" | "rtl" | "r" => Self::RightToLeft,
            _ => return Err(format!("Unknown associativity: {name}")),
        };
        Ok(assoc)
    }

    /// Added to an operator's precedence to get the minimum precedence
    /// its right operand may bind at. Left-to-right operators push any
    /// following operator of the same precedence back to the caller.
    pub fn rhs_offset(&self) -> u64 {
        match self {
            Self::LeftToRight => 1,
            Self::RightToLeft => 0,
        }
    }

    /// Short arrow form: `>>>` for left-to-right, `<<<` otherwise.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::LeftToRight => ">>>",
            Self::RightToLeft => "<<<",
        }
    }
}

impl fmt::Display for Associativity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
        };
        write!(f, "{string}")
    }
}

// Operator ------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperatorErr {
    NoLexemes,
    /// Index of the empty lexeme.
    EmptyLexeme(usize),
}

impl fmt::Display for OperatorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLexemes => write!(f, "Operator must have at least one lexeme"),
            Self::EmptyLexeme(index) => write!(f, "Operator lexeme {index} is empty"),
        }
    }
}

impl std::error::Error for OperatorErr {}

/// An infix operator. Lower precedence binds looser. Lexemes are
/// alternate spellings and are tried in the order given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operator {
    precedence: u32,
    associativity: Associativity,
    lexemes: Vec<String>,
}

impl Operator {
    pub fn new<I, S>(
        precedence: u32,
        associativity: Associativity,
        lexemes: I,
    ) -> Result<Self, OperatorErr>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lexemes: Vec<String> = lexemes.into_iter().map(Into::into).collect();
        if lexemes.is_empty() {
            return Err(OperatorErr::NoLexemes);
        }
        if let Some(index) = lexemes.iter().position(|lexeme| lexeme.is_empty()) {
            return Err(OperatorErr::EmptyLexeme(index));
        }
        Ok(Self { precedence, associativity, lexemes })
    }

    pub fn precedence(&self) -> u32 {
        self.precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn lexemes(&self) -> &[String] {
        self.lexemes.as_slice()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "operator ({}) with precedence {} and {}",
            self.lexemes.join(", "),
            self.precedence,
            self.associativity.arrow()
        )
    }
}

// Table ---------------------------------------------------------------

/// Operators sorted by ascending precedence. Operators with equal
/// precedence stay in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    operators: Vec<Arc<Operator>>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self { operators: Vec::new() }
    }

    pub fn add(
        &mut self,
        precedence: u32,
        associativity: Associativity,
        lexemes: &[&str],
    ) -> Result<Arc<Operator>, OperatorErr> {
        let op = Operator::new(precedence, associativity, lexemes.iter().copied())?;
        Ok(self.add_operator(op))
    }

    pub fn add_operator(&mut self, op: Operator) -> Arc<Operator> {
        let op = Arc::new(op);
        // Insert after every operator with the same or lower precedence
        // so that ties keep insertion order.
        let index =
            self.operators.partition_point(|other| other.precedence <= op.precedence);
        self.operators.insert(index, op.clone());
        op
    }

    pub fn clear(&mut self) {
        self.operators.clear();
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Operator>> {
        self.operators.iter()
    }

    /// Try to match an operator at the cursor's position.
    ///
    /// Operators are tried in ascending precedence order and, within an
    /// operator, lexemes in the order they were declared. The *first*
    /// lexeme that matches wins, even if a later one is longer (e.g.,
    /// with `=` at precedence 0 and `==` at precedence 4, `==` will
    /// never match).
    ///
    /// On a match, the lexeme and any whitespace after it are consumed.
    /// Otherwise, the cursor is left where it was.
    pub fn match_operator(
        &self,
        cursor: &mut Cursor,
    ) -> Result<Option<OperatorToken>, ParseErr> {
        for op in self.operators.iter() {
            for lexeme in op.lexemes.iter() {
                cursor.push_checkpoint();
                if lexeme.chars().all(|c| cursor.read() == Some(c)) {
                    cursor.commit_checkpoint()?;
                    cursor.skip_whitespace();
                    log::trace!("PARSED: operator {lexeme}");
                    return Ok(Some(OperatorToken::new(op.clone(), lexeme.as_str())));
                }
                cursor.rollback_checkpoint()?;
            }
        }
        Ok(None)
    }
}

impl fmt::Display for OperatorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in self.operators.iter() {
            writeln!(f, "{op}")?;
        }
        Ok(())
    }
}
