use clap::builder::FalseyValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let file_name_help = concat!(
        "File containing an expression to parse. Can be:\n\n",
        "1. a path to a file\n",
        "2. a single dash to read from stdin\n\n",
        "If neither a file nor --code is given, the REPL is started.",
    );
    let file_name_arg =
        Arg::new("FILE_NAME").index(1).required(false).help(file_name_help);

    let code_arg = Arg::new("code")
        .short('c')
        .long("code")
        .required(false)
        .num_args(1)
        .help("Parse this expression");

    let operator_file_arg = Arg::new("operator_file")
        .short('o')
        .long("operators")
        .required(false)
        .num_args(1)
        .env("CLIMB_OPERATORS")
        .help(concat!(
            "Operator definition file; one operator per line:\n",
            "<precedence> <left|right> <lexeme> [<lexeme> ...]\n",
            "[default: = (0, right), + - (1, left), * / (2, left), ^ (3, right)]"
        ));

    let flat_arg = Arg::new("flat")
        .long("flat")
        .action(ArgAction::SetTrue)
        .help("Combine operators left to right, ignoring precedence");

    let strict_arg = Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail when input is left unparsed or there's no expression");

    let int_width_arg = Arg::new("int_width")
        .short('w')
        .long("int-width")
        .default_value("32")
        .value_parser(value_parser!(u32))
        .env("CLIMB_INT_WIDTH")
        .help("Bit width of integer literals (8, 16, 32, 64, or 128)");

    let max_depth_arg = Arg::new("max_depth")
        .short('x')
        .long("max-depth")
        .default_value("512")
        .value_parser(value_parser!(usize))
        .env("CLIMB_MAX_DEPTH")
        .help("Maximum operator nesting depth (0 for no limit)");

    let history_path_arg = Arg::new("history_path")
        .long("history-path")
        .required(false)
        .num_args(1)
        .default_value("~/.climb_history")
        .help("Path to REPL history file");

    let no_history_arg = Arg::new("no_history")
        .long("no-history")
        .action(ArgAction::SetTrue)
        .help("Disable REPL history? [default: history enabled]");

    Command::new("Climb")
        .version("0.0.0")
        .about("Parse integer expressions using precedence climbing")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("CLIMB_DEBUG")
                .global(true)
                .help("Enable debug logging?"),
        )
        // Subcommand: parse (when no subcommand is specified)
        .arg(&file_name_arg)
        .arg(&code_arg)
        .arg(&operator_file_arg)
        .arg(&flat_arg)
        .arg(&strict_arg)
        .arg(&int_width_arg)
        .arg(&max_depth_arg)
        .arg(&history_path_arg)
        .arg(&no_history_arg)
        .subcommands([
            // Subcommand: parse
            Command::new("parse")
                .about("Parse an expression or start the REPL")
                .arg(&file_name_arg)
                .arg(&code_arg)
                .arg(&operator_file_arg)
                .arg(&flat_arg)
                .arg(&strict_arg)
                .arg(&int_width_arg)
                .arg(&max_depth_arg)
                .arg(&history_path_arg)
                .arg(&no_history_arg),
            // Subcommand: operators
            Command::new("operators")
                .about("Show the operator table, lowest precedence first")
                .arg(&operator_file_arg),
        ])
}
