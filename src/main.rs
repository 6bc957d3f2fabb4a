//! Letter-wise line sorter.
//!
//! Sorts the lines of a text file twice: left-to-right by letters only, and
//! right-to-left under the same rule (rhyming order). Non-letter characters
//! never influence the ordering.

use std::process;

use clap::{Arg, Command};

use rhyme_sort::{
    config::{Config, DirectionMode},
    error::{SortError, SortResult},
    run,
};

fn main() {
    let result = execute();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("rhymesort: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn execute() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    run(&config)
}

fn build_cli() -> Command {
    Command::new("rhymesort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("rhymesort [OPTION]... FILE")
        .about("Sort lines of a text file by letters only, forward and backward")
        .long_about(
            "Sort the lines of a text file by comparing letters only: digits, \
             punctuation and whitespace are skipped. The forward ordering compares \
             left-to-right; the backward ordering compares right-to-left, which \
             groups lines by their endings like a rhyming dictionary. Lines without \
             any letters are dropped from the output.",
        )
        .arg(
            Arg::new("file")
                .help("Input text file")
                .required(true)
                .value_name("FILE"),
        )
        .arg(
            Arg::new("forward-output")
                .short('f')
                .long("forward-output")
                .help("Write the forward ordering to FILE")
                .value_name("FILE")
                .default_value(Config::DEFAULT_FORWARD_OUTPUT),
        )
        .arg(
            Arg::new("backward-output")
                .short('b')
                .long("backward-output")
                .help("Write the backward (rhyming) ordering to FILE")
                .value_name("FILE")
                .default_value(Config::DEFAULT_BACKWARD_OUTPUT),
        )
        .arg(
            Arg::new("original-output")
                .short('O')
                .long("original-output")
                .help("Also write a verbatim copy of the input to FILE")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("direction")
                .short('d')
                .long("direction")
                .help("Which passes to run")
                .value_name("DIR")
                .value_parser(["forward", "backward", "both"])
                .default_value("both"),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<Config> {
    let input = matches
        .get_one::<String>("file")
        .ok_or_else(|| SortError::internal("missing required input file"))?;

    let direction = matches
        .get_one::<String>("direction")
        .map(|s| s.parse::<DirectionMode>())
        .transpose()?
        .unwrap_or_default();

    let mut config = Config::new(input).with_direction(direction);

    if let Some(path) = matches.get_one::<String>("forward-output") {
        config = config.with_forward_output(path);
    }
    if let Some(path) = matches.get_one::<String>("backward-output") {
        config = config.with_backward_output(path);
    }
    config = config.with_original_output(matches.get_one::<String>("original-output").cloned());

    config.validate()?;
    Ok(config)
}
