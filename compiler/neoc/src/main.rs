//! Neo front-end CLI.

use neoc::commands::{check_file, explain_error, lex_file, parse_file, run_repl};
use neoc::tracing_setup::init_tracing;
use neoc::{parse_color_mode, DriverConfig};

fn main() {
    init_tracing();

    // Global flags may appear anywhere; everything else is positional.
    let mut config = DriverConfig::from_env();
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = parse_color_mode(value) else {
                eprintln!("error: invalid value '{value}' for --color");
                eprintln!("Valid values: auto, always, never");
                std::process::exit(1);
            };
            config.color = mode;
        } else if arg == "--quiet" || arg == "-q" {
            config.quiet = true;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        run_repl(&config);
        return;
    };

    match command.as_str() {
        "lex" => {
            if args.len() < 2 {
                eprintln!("Usage: neo lex <file.neo>");
                std::process::exit(1);
            }
            lex_file(&args[1], &config);
        }
        "parse" => {
            if args.len() < 2 {
                eprintln!("Usage: neo parse <file.neo>");
                std::process::exit(1);
            }
            parse_file(&args[1], &config);
        }
        "check" => {
            if args.len() < 2 {
                eprintln!("Usage: neo check <file.neo>");
                std::process::exit(1);
            }
            check_file(&args[1], &config);
        }
        "repl" => run_repl(&config),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("Neo front end {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 2 {
                eprintln!("Usage: neo explain <ERROR_CODE>");
                eprintln!("Example: neo explain E2002");
                std::process::exit(1);
            }
            explain_error(&args[1]);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Neo front end");
    println!();
    println!("Usage: neo [options] <command> [args]");
    println!();
    println!("Commands:");
    println!("  lex <file.neo>       Tokenize and print one JSON line per token");
    println!("  parse <file.neo>     Parse and print one JSON line per AST node");
    println!("  check <file.neo>     Type check a file and print its type");
    println!("  repl                 Read expressions from stdin, one per line (default)");
    println!("  explain <code>       Explain an error code (e.g., E2002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!("  -q, --quiet          Do not render diagnostics");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=neo_parse=trace");
    println!("  NEO_LOG_TREE         Print logs as an indented tree");
    println!("  NO_COLOR             Disable colors unless --color says otherwise");
}
