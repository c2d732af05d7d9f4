use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process;
use tracing::debug;

use framed::error::ArgumentError;
use framed::output::annotate;
use framed::rendering::{render, CharRenderer, Render, StringRenderer};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("framed")
        .version(VERSION)
        .propagate_version(true)
        .about("Print a value five times between an opening and a closing frame.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to standard error."),
        )
        .subcommand(
            Command::new("char")
                .about("Repeat a single character between angle brackets")
                .arg(
                    Arg::new("annotate")
                        .long("annotate")
                        .action(ArgAction::SetTrue)
                        .help("Precede the display with a line describing the hook calls."),
                )
                .arg(
                    Arg::new("character")
                        .required(true)
                        .help("The character to repeat. Must be exactly one character."),
                ),
        )
        .subcommand(
            Command::new("string")
                .about("Repeat a line of text inside a drawn box")
                .arg(
                    Arg::new("annotate")
                        .long("annotate")
                        .action(ArgAction::SetTrue)
                        .help("Precede the display with a line describing the hook calls."),
                )
                .arg(
                    Arg::new("text")
                        .required(true)
                        .help("The text to place inside the box. May be empty."),
                ),
        )
        .get_matches();

    if matches.get_flag("debug") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match matches.subcommand() {
        Some(("char", submatches)) => {
            let character = submatches
                .get_one::<String>("character")
                .map(String::as_str)
                .unwrap_or_default();

            match character.parse::<CharRenderer>() {
                Ok(renderer) => emit(&renderer, submatches),
                Err(error) => fail(&error),
            }
        }
        Some(("string", submatches)) => {
            let text = submatches
                .get_one::<String>("text")
                .map(String::as_str)
                .unwrap_or_default();

            emit(&StringRenderer::new(text), submatches);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: framed [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn emit(renderer: &impl Render, submatches: &ArgMatches) {
    debug!(renderer = renderer.name(), "Selected renderer");

    let result = if submatches.get_flag("annotate") {
        match annotate(renderer) {
            Ok(result) => result,
            Err(error) => {
                eprintln!("error: {}", error);
                process::exit(1);
            }
        }
    } else {
        render(renderer)
    };

    print!("{}", result);
    if !result.ends_with('\n') {
        println!();
    }
}

fn fail(error: &ArgumentError) -> ! {
    eprintln!("error: {}", error);
    process::exit(1);
}
