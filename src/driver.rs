//! Top level driver: choose the literal type, read input, parse it, and
//! print the canonical rendering of the resulting tree.
use std::fs;
use std::io::{self, Read};

use crate::ast::IntLiteral;
use crate::config::{Config, IntWidth};
use crate::parser::{ParseMode, Parser};
use crate::repl;
use crate::result::{DriverErr, DriverErrKind, DriverResult};

/// Where input comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Code(String),
    File(String),
    Stdin,
    Repl,
}

/// Run the driver on some input with the literal type selected by the
/// configured integer width.
pub fn run(config: &Config, input: Input) -> DriverResult {
    match config.int_width {
        IntWidth::I8 => run_with::<i8>(config, input),
        IntWidth::I16 => run_with::<i16>(config, input),
        IntWidth::I32 => run_with::<i32>(config, input),
        IntWidth::I64 => run_with::<i64>(config, input),
        IntWidth::I128 => run_with::<i128>(config, input),
    }
}

fn run_with<T: IntLiteral>(config: &Config, input: Input) -> DriverResult {
    let driver = Driver::<T>::new(config);
    match input {
        Input::Code(code) => driver.execute_text(code.as_str()),
        Input::File(path) => driver.execute_file(path.as_str()),
        Input::Stdin => driver.execute_stdin(),
        Input::Repl => repl::run(config.history_path.clone(), driver),
    }
}

pub struct Driver<T = i32> {
    parser: Parser<T>,
    mode: ParseMode,
    strict: bool,
}

impl<T: IntLiteral> Driver<T> {
    pub fn new(config: &Config) -> Self {
        let parser = Parser::with_operators(config.operators.clone())
            .with_max_depth(config.max_depth);
        Self { parser, mode: config.mode, strict: config.strict }
    }

    pub fn parser(&self) -> &Parser<T> {
        &self.parser
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ParseMode) {
        self.mode = mode;
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Parse text and return the rendering of its expression tree, if
    /// there is one.
    ///
    /// Input left after the expression and operators dropped for lack of
    /// a right operand are reported as warnings, or as errors in strict
    /// mode. In strict mode, text that doesn't start with an expression
    /// is also an error.
    pub fn render(&self, text: &str) -> Result<Option<String>, DriverErr> {
        log::debug!("INPUT: {text:?}");
        let parsed = self.parser.parse_with_mode(text, self.mode)?;

        if !parsed.is_complete() {
            let loc = parsed.loc();
            let rest = parsed.remainder();
            if self.strict {
                let kind = DriverErrKind::UnconsumedInput(loc, rest.to_owned());
                return Err(DriverErr::new(kind));
            }
            eprintln!("WARNING: Input not parsed @ {loc}: {rest:?}");
        }

        if let Some(loc) = parsed.dropped_operator_loc() {
            if self.strict {
                return Err(DriverErr::new(DriverErrKind::DroppedOperator(loc)));
            }
            eprintln!("WARNING: Operator has no right operand @ {loc}");
        }

        match parsed.expr {
            Some(expr) => Ok(Some(expr.to_string())),
            None if self.strict => Err(DriverErr::new(DriverErrKind::NoExpression)),
            None => Ok(None),
        }
    }

    pub fn execute_text(&self, text: &str) -> DriverResult {
        if let Some(rendering) = self.render(text)? {
            println!("{rendering}");
        }
        Ok(())
    }

    pub fn execute_file(&self, file_path: &str) -> DriverResult {
        match fs::read_to_string(file_path) {
            Ok(text) => self.execute_text(text.as_str()),
            Err(err) => Err(DriverErr::new(DriverErrKind::CouldNotReadSourceFile(
                file_path.to_owned(),
                err.to_string(),
            ))),
        }
    }

    pub fn execute_stdin(&self) -> DriverResult {
        let mut text = String::new();
        match io::stdin().read_to_string(&mut text) {
            Ok(_) => self.execute_text(text.as_str()),
            Err(err) => Err(DriverErr::new(DriverErrKind::CouldNotReadSourceFile(
                "<stdin>".to_owned(),
                err.to_string(),
            ))),
        }
    }
}
