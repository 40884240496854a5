//! # Climb REPL
use std::path::PathBuf;

use rustyline::error::ReadlineError;

use crate::ast::IntLiteral;
use crate::driver::Driver;
use crate::parser::ParseMode;
use crate::result::{DriverErr, DriverErrKind, DriverResult};

/// Run the REPL until the user exits.
pub fn run<T: IntLiteral>(
    history_path: Option<PathBuf>,
    driver: Driver<T>,
) -> DriverResult {
    let mut repl = Repl::new(history_path, driver)?;
    repl.run()
}

pub struct Repl<T> {
    reader: rustyline::Editor<()>,
    history_path: Option<PathBuf>,
    session: Session<T>,
}

impl<T: IntLiteral> Repl<T> {
    pub fn new(
        history_path: Option<PathBuf>,
        driver: Driver<T>,
    ) -> Result<Self, DriverErr> {
        let reader = rustyline::Editor::<()>::new().map_err(|err| {
            let msg = format!("Could not initialize readline: {err}");
            DriverErr::new(DriverErrKind::ReplErr(msg))
        })?;
        Ok(Repl { reader, history_path, session: Session::new(driver) })
    }

    pub fn run(&mut self) -> DriverResult {
        println!("Welcome to the Climb REPL (read/parse/print loop)");
        println!("Type an expression, then hit Enter to see how it's grouped");
        self.load_history();
        println!("Type .help for commands or .exit to exit");

        loop {
            match self.read_line("→ ") {
                Ok(None) => {
                    // Blank or all-whitespace line.
                }
                Ok(Some(input)) => {
                    self.add_history_entry(input.as_str());
                    if let Some(result) = self.session.eval(input.as_str()) {
                        break result;
                    }
                }
                // User hit Ctrl-C
                Err(ReadlineError::Interrupted) => {
                    println!("Use Ctrl-D or .exit to exit");
                }
                // User hit Ctrl-D
                Err(ReadlineError::Eof) => {
                    break Ok(());
                }
                Err(err) => {
                    let msg = format!("Could not read line: {err}");
                    break Err(DriverErr::new(DriverErrKind::ReplErr(msg)));
                }
            }
        }
    }

    /// Get a line of input from the user. Lines comprising only
    /// whitespace are returned as `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ReadlineError> {
        match self.reader.readline(prompt) {
            Ok(input) if input.trim().is_empty() => Ok(None),
            Ok(input) => Ok(Some(input)),
            Err(err) => Err(err),
        }
    }

    fn load_history(&mut self) {
        if let Some(path) = &self.history_path {
            println!("REPL history will be saved to {}", path.to_string_lossy());
            if let Err(err) = self.reader.load_history(path.as_path()) {
                log::debug!("Could not load REPL history: {err}");
            }
        }
    }

    fn add_history_entry(&mut self, input: &str) {
        if let Some(path) = &self.history_path {
            self.reader.add_history_entry(input);
            if let Err(err) = self.reader.save_history(path.as_path()) {
                eprintln!("WARNING: Could not save REPL history: {err}");
            }
        }
    }
}

/// REPL state that doesn't depend on the terminal.
pub struct Session<T> {
    driver: Driver<T>,
}

impl<T: IntLiteral> Session<T> {
    pub fn new(driver: Driver<T>) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &Driver<T> {
        &self.driver
    }

    /// Evaluate a line of input. Returns `None` to indicate to the main
    /// loop to keep reading input. Returns a result to indicate to the
    /// main loop to exit.
    ///
    /// Parse errors are reported and don't end the session.
    pub fn eval(&mut self, text: &str) -> Option<DriverResult> {
        if matches!(text.trim(), ".exit" | ".quit") {
            return Some(Ok(()));
        } else if self.handle_command(text) {
            return None;
        }

        if let Err(err) = self.driver.execute_text(text) {
            eprintln!("{err}");
        }
        None
    }

    fn handle_command(&mut self, text: &str) -> bool {
        match text.trim() {
            "?" | ".help" => {
                eprintln!("{:=>72}", "");
                eprintln!("Climb Help");
                eprintln!("{:->72}", "");
                eprintln!(".help    -> show this help");
                eprintln!(".exit    -> exit");
                eprintln!(".ops     -> show operator table");
                eprintln!(".climb   -> respect precedence (default)");
                eprintln!(".flat    -> combine operators left to right");
                eprintln!(".strict  -> toggle strict mode");
                eprintln!("{:=>72}", "");
            }
            ".ops" => {
                let operators = self.driver.parser().operators();
                if operators.is_empty() {
                    eprintln!("No operators defined");
                } else {
                    print!("{operators}");
                }
            }
            ".climb" => {
                self.driver.set_mode(ParseMode::Climbing);
                eprintln!("Mode: climbing");
            }
            ".flat" => {
                self.driver.set_mode(ParseMode::Flat);
                eprintln!("Mode: flat");
            }
            ".strict" => {
                let strict = !self.driver.strict();
                self.driver.set_strict(strict);
                eprintln!("Strict: {strict}");
            }
            _ => return false,
        }
        true
    }
}
