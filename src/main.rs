use std::path::Path;
use std::process::exit;

use clap::ArgMatches;

use climb::cli::build_cli;
use climb::config::{self, Config, IntWidth};
use climb::driver::{self, Input};
use climb::parser::ParseMode;
use climb::result::{DriverErr, DriverResult};

fn main() {
    let app = build_cli();
    let matches = app.get_matches();

    let debug = matches.get_flag("debug");
    let default_filter = if debug { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    env_logger::Builder::from_env(env).format_timestamp(None).init();

    let result = match matches.subcommand() {
        Some(("parse", matches)) => handle_parse(matches, debug),
        Some(("operators", matches)) => handle_operators(matches),
        Some((name, _)) => unreachable!("Subcommand not defined: {}", name),
        None => handle_parse(&matches, debug),
    };

    match result {
        Ok(()) => exit(0),
        Err(err) => {
            eprintln!("{err}");
            exit(err.exit_code());
        }
    }
}

/// Subcommand: parse (default)
fn handle_parse(matches: &ArgMatches, debug: bool) -> DriverResult {
    let config = build_config(matches, debug)?;

    let input = if let Some(code) = matches.get_one::<String>("code") {
        Input::Code(code.to_owned())
    } else if let Some(file_name) = matches.get_one::<String>("FILE_NAME") {
        if file_name == "-" {
            Input::Stdin
        } else {
            Input::File(file_name.to_owned())
        }
    } else {
        Input::Repl
    };

    driver::run(&config, input)
}

/// Subcommand: operators
fn handle_operators(matches: &ArgMatches) -> DriverResult {
    let operators = match matches.get_one::<String>("operator_file") {
        Some(path) => config::load_operators(Path::new(path))?,
        None => Config::default().operators,
    };
    print!("{operators}");
    Ok(())
}

fn build_config(matches: &ArgMatches, debug: bool) -> Result<Config, DriverErr> {
    let mut config = Config { debug, ..Config::default() };

    if let Some(path) = matches.get_one::<String>("operator_file") {
        config.operators = config::load_operators(Path::new(path))?;
    }

    if matches.get_flag("flat") {
        config.mode = ParseMode::Flat;
    }

    config.strict = matches.get_flag("strict");

    if let Some(bits) = matches.get_one::<u32>("int_width") {
        config.int_width = IntWidth::from_bits(*bits)?;
    }

    if let Some(max_depth) = matches.get_one::<usize>("max_depth") {
        config.max_depth = *max_depth;
    }

    config.history_path = if matches.get_flag("no_history") {
        None
    } else if let Some(path) = matches.get_one::<String>("history_path") {
        Some(config::expand_home(path))
    } else {
        config::default_history_path()
    };

    Ok(config)
}
