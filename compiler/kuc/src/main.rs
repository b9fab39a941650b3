//! ku front end CLI.

use ku_diagnostic::ErrorCode;
use kuc::commands::{lex_file, parse_file, run_fixtures};
use kuc::CliOptions;

fn main() {
    kuc::init_tracing();

    let options = match CliOptions::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let Some(command) = options.command() else {
        print_usage();
        std::process::exit(1);
    };
    let operands = options.operands();

    let status = match command {
        "parse" => {
            let [path] = operands else {
                eprintln!("Usage: ku parse <file.ku>");
                std::process::exit(1);
            };
            parse_file(path, options.color)
        }
        "lex" => {
            let [path] = operands else {
                eprintln!("Usage: ku lex <file.ku>");
                std::process::exit(1);
            };
            lex_file(path)
        }
        "test-lex" => {
            if operands.is_empty() {
                eprintln!("Usage: ku test-lex <fixture>...");
                std::process::exit(1);
            }
            run_fixtures(operands)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("ku {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // A bare source path is shorthand for `ku parse`.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ku"))
            {
                parse_file(command, options.color)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                1
            }
        }
    };

    std::process::exit(status);
}

fn print_usage() {
    println!("ku front end");
    println!();
    println!("Usage: ku <command> [options]");
    println!();
    println!("Commands:");
    println!("  <file.ku>               Same as `parse <file.ku>`");
    println!("  parse <file.ku>         Parse a file and print its tree");
    println!("  lex <file.ku>           Print the token dump of a file");
    println!("  test-lex <fixture>...   Run split-test scanner fixtures");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Options:");
    println!("  --color=<when>          Color diagnostics: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                Enable logging (e.g. RUST_LOG=ku_parse=trace)");
    println!("  KU_LOG_TREE             Render logging spans as a tree");
    println!("  NO_COLOR                Disable automatic color");
    println!();
    println!("Error codes:");
    for code in ErrorCode::ALL {
        println!("  {code}                   {}", code.description());
    }
}
