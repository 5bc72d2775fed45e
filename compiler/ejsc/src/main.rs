//! Ejscript CLI
//!
//! Runs scripts against a host interpreter with a few native functions.

use ejsc::commands::{eval_inline, explain_error, lex_file, run_file, RunOptions};

fn main() {
    ejsc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: ejs run <file> [-D name=value]... [--globals]");
                std::process::exit(1);
            }
            let options = parse_options(&args[3..]);
            run_file(&args[2], &options);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: ejs eval '<script>' [-D name=value]... [--globals]");
                std::process::exit(1);
            }
            let options = parse_options(&args[3..]);
            eval_inline(&args[2], &options);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: ejs lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Ejscript {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: ejs explain <ERROR_CODE>");
                eprintln!("Example: ejs explain E6001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // If it looks like a script, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("ejs"))
            {
                run_file(command, &parse_options(&args[2..]));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn parse_options(args: &[String]) -> RunOptions {
    match RunOptions::parse(args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Ejscript embedded scripting engine");
    println!();
    println!("Usage: ejs <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Evaluate a script file and print its result");
    println!("  eval '<script>'      Evaluate a script given inline");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E6001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  -D name=value        Define a global variable (repeatable)");
    println!("  --globals            Print global variables afterwards");
    println!();
    println!("Natives available to scripts:");
    println!("  write(args...)       Print the arguments followed by a newline");
    println!("  strlen(s)            Length of s in characters");
    println!("  concat(args...)      Join the arguments");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=ejs_eval=debug ejs run script.ejs");
    println!();
    println!("Examples:");
    println!("  ejs run page.ejs -D user=admin");
    println!("  ejs eval 'for (var i = 0; i < 3; i++) write(i)'");
    println!("  ejs lex page.ejs");
    println!("  ejs explain E1004");
}
