mod cursor;
mod driver;
mod repl;
mod stack;
