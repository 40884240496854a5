use std::marker::PhantomData;
use std::sync::Arc;

use num_traits::NumCast;

use crate::ast::{Expr, IntLiteral, Literal};
use crate::operators::{
    Associativity, Operator, OperatorErr, OperatorTable, DEFAULT_OPERATORS,
};
use crate::util::{digit_value, Location};

use super::cursor::Cursor;
use super::result::{ParseErr, ParseErrKind, ParseResult};

/// Default maximum operator nesting depth. Each level of nesting is a
/// level of recursion, so an unbounded parse of a long right-associative
/// chain can overflow the stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How operators are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// Respect precedence and associativity.
    Climbing,
    /// Combine strictly left to right, one literal at a time, ignoring
    /// precedence: `1 + 2 * 3` becomes `((1 + 2) * 3)`.
    Flat,
}

/// The outcome of parsing a prefix of some text.
///
/// Parsing stops at the first thing that can't continue the expression
/// (an unknown character, a parenthesis, ...). That's *not* an error;
/// the expression built so far is returned and the rest of the text is
/// left unconsumed.
///
/// An operator with no right operand is consumed but left out of the
/// tree, so `1 +` is complete but its `+` is dropped. Callers that
/// require the whole text to be an expression should check `is_exact()`,
/// which accounts for both.
#[derive(Debug)]
pub struct Parsed<'a, T> {
    pub expr: Option<Expr<T>>,
    text: &'a str,
    pos: usize,
    dropped_operator: Option<usize>,
}

impl<'a, T> Parsed<'a, T> {
    /// Byte offset where parsing stopped.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn loc(&self) -> Location {
        Location::from_offset(self.text, self.pos)
    }

    pub fn remainder(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// All of the text was consumed.
    pub fn is_complete(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Byte offset of the first operator that was consumed without a
    /// right operand.
    pub fn dropped_operator(&self) -> Option<usize> {
        self.dropped_operator
    }

    pub fn dropped_operator_loc(&self) -> Option<Location> {
        self.dropped_operator.map(|pos| Location::from_offset(self.text, pos))
    }

    /// All of the text was consumed and every operator is in the tree.
    pub fn is_exact(&self) -> bool {
        self.is_complete() && self.dropped_operator.is_none()
    }
}

/// Precedence-climbing parser for integer literals combined with
/// configurable infix operators.
///
/// The parser owns its operator table. Registering operators needs
/// `&mut self` while parsing only needs `&self`, so the table can't
/// change while a parse is in progress. Each parse gets its own
/// cursor, so a single parser may be shared across threads.
///
/// `T` is the literal type. A literal that doesn't fit in `T` aborts
/// the parse with an overflow error.
pub struct Parser<T = i32> {
    operators: OperatorTable,
    /// Maximum operator nesting depth; 0 means unbounded.
    max_depth: usize,
    literal_type: PhantomData<fn() -> T>,
}

impl<T: IntLiteral> Default for Parser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IntLiteral> Parser<T> {
    /// Create a parser with no operators. Such a parser parses a single
    /// literal.
    pub fn new() -> Self {
        Self::with_operators(OperatorTable::new())
    }

    pub fn with_operators(operators: OperatorTable) -> Self {
        Self { operators, max_depth: DEFAULT_MAX_DEPTH, literal_type: PhantomData }
    }

    pub fn with_default_operators() -> Self {
        Self::with_operators((*DEFAULT_OPERATORS).clone())
    }

    /// Set the maximum operator nesting depth (`DEFAULT_MAX_DEPTH` by
    /// default). 0 removes the limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn register(
        &mut self,
        precedence: u32,
        associativity: Associativity,
        lexemes: &[&str],
    ) -> Result<Arc<Operator>, OperatorErr> {
        self.operators.add(precedence, associativity, lexemes)
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    pub fn operators_mut(&mut self) -> &mut OperatorTable {
        &mut self.operators
    }

    /// Parse text into an expression tree. Returns `Ok(None)` when the
    /// text doesn't start with a literal (after leading whitespace).
    ///
    /// NOTE: Trailing text that can't be parsed is ignored. Use
    ///       `parse_prefix()` to find out where parsing stopped.
    pub fn parse(&self, text: &str) -> ParseResult<T> {
        Ok(self.parse_prefix(text)?.expr)
    }

    pub fn parse_prefix<'a>(&self, text: &'a str) -> Result<Parsed<'a, T>, ParseErr> {
        self.parse_with_mode(text, ParseMode::Climbing)
    }

    /// Parse text, combining operators strictly left to right.
    pub fn parse_flat(&self, text: &str) -> ParseResult<T> {
        Ok(self.parse_flat_prefix(text)?.expr)
    }

    pub fn parse_flat_prefix<'a>(
        &self,
        text: &'a str,
    ) -> Result<Parsed<'a, T>, ParseErr> {
        self.parse_with_mode(text, ParseMode::Flat)
    }

    pub fn parse_with_mode<'a>(
        &self,
        text: &'a str,
        mode: ParseMode,
    ) -> Result<Parsed<'a, T>, ParseErr> {
        log::trace!("BEGIN: parse ({mode:?}) {text:?}");
        let mut cursor = Cursor::new(text);
        cursor.skip_whitespace();

        let climbing = mode == ParseMode::Climbing;
        let mut dropped_operator = None;
        let expr =
            self.expression(&mut cursor, climbing, 0, 1, &mut dropped_operator)?;

        let depth = cursor.checkpoint_depth();
        if depth != 0 {
            return Err(ParseErr::inconsistency(
                format!("{depth} checkpoint(s) left after parse"),
                cursor.loc(),
            ));
        }

        log::trace!("END: parse; stopped @ {}", cursor.loc());
        Ok(Parsed { expr, text, pos: cursor.position(), dropped_operator })
    }

    // Grammar ---------------------------------------------------------

    /// Parse a literal followed by any number of `<operator> <operand>`
    /// pairs.
    ///
    /// When climbing, operators with a precedence lower than
    /// `min_precedence` are left for the caller, and each right operand
    /// is itself parsed with this method. When *not* climbing, right
    /// operands are single literals and precedence is ignored.
    ///
    /// The position of the first operator that turns out to have no
    /// right operand is recorded in `dropped`.
    fn expression(
        &self,
        cursor: &mut Cursor,
        climbing: bool,
        min_precedence: u64,
        depth: usize,
        dropped: &mut Option<usize>,
    ) -> ParseResult<T> {
        if self.max_depth > 0 && depth > self.max_depth {
            return Err(ParseErr::new(
                ParseErrKind::MaxDepthExceeded(self.max_depth),
                cursor.loc(),
            ));
        }

        let mut lhs = match self.terminal(cursor)? {
            Some(expr) => expr,
            None => return Ok(None),
        };

        loop {
            let op_pos = cursor.position();
            cursor.push_checkpoint();

            let op = match self.operators.match_operator(cursor)? {
                Some(op) => op,
                None => {
                    cursor.commit_checkpoint()?;
                    return Ok(Some(lhs));
                }
            };

            let precedence: u64 = op.precedence().into();

            if climbing && precedence < min_precedence {
                cursor.rollback_checkpoint()?;
                return Ok(Some(lhs));
            }

            let rhs = if climbing {
                let next_min = precedence + op.associativity().rhs_offset();
                let climbing = precedence >= min_precedence;
                self.expression(cursor, climbing, next_min, depth + 1, dropped)?
            } else {
                self.terminal(cursor)?
            };

            // The operator stays consumed even when there's no RHS.
            cursor.commit_checkpoint()?;

            match rhs {
                Some(rhs) => lhs = Expr::new_binary_op(lhs, op, rhs),
                None => {
                    log::debug!(
                        "DROPPED: operator {op} has no right operand @ {}",
                        cursor.loc()
                    );
                    dropped.get_or_insert(op_pos);
                    return Ok(Some(lhs));
                }
            }
        }
    }

    /// Parse an integer literal: a maximal run of ASCII digits.
    fn terminal(&self, cursor: &mut Cursor) -> ParseResult<T> {
        let mut digit = match cursor.observe().and_then(digit_value) {
            Some(digit) => digit,
            None => return Ok(None),
        };

        // Converted to a line and column only on error; doing it for
        // every literal makes parsing quadratic.
        let start = cursor.position();
        let ten = Self::int_from(10, cursor, start)?;
        let mut value = T::zero();

        cursor.push_checkpoint();

        loop {
            let digit_int = Self::int_from(digit, cursor, start)?;
            cursor.advance();
            let next = value.checked_mul(&ten).and_then(|v| v.checked_add(&digit_int));
            value = match next {
                Some(value) => value,
                None => {
                    let digits = cursor.text_since_checkpoint()?;
                    let err = ParseErr::overflow(digits, cursor.loc_at(start));
                    cursor.commit_checkpoint()?;
                    return Err(err);
                }
            };
            digit = match cursor.observe().and_then(digit_value) {
                Some(digit) => digit,
                None => break,
            };
        }

        let lexeme = cursor.text_since_checkpoint()?;
        let literal = Literal::new(value, lexeme)
            .map_err(|msg| ParseErr::inconsistency(msg, cursor.loc_at(start)))?;
        cursor.commit_checkpoint()?;
        cursor.skip_whitespace();

        log::trace!("PARSED: literal {literal}");
        Ok(Some(Expr::new_literal(literal)))
    }

    fn int_from(n: u32, cursor: &Cursor, start: usize) -> Result<T, ParseErr> {
        <T as NumCast>::from(n).ok_or_else(|| {
            let msg = format!("{n} is not representable as a literal");
            ParseErr::inconsistency(msg, cursor.loc_at(start))
        })
    }
}
