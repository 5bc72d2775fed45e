//! The `run` and `eval` commands.

use ejs_eval::{EjsError, FunctionTable, Interpreter, Scope, SharedFunctionTable};
use tracing::debug;

use super::{read_file, report_error};
use crate::natives;

/// Options for `ejs run` and `ejs eval`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `-D name=value` definitions, seeded as globals.
    pub defines: Vec<(String, String)>,
    /// Print the global variables after evaluation.
    pub dump_globals: bool,
}

impl RunOptions {
    /// Parse the arguments that follow the script operand.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = RunOptions::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "-D" {
                let Some(define) = iter.next() else {
                    return Err("missing definition after -D".to_string());
                };
                options.defines.push(parse_define(define)?);
            } else if let Some(define) = arg.strip_prefix("-D") {
                options.defines.push(parse_define(define)?);
            } else if arg == "--globals" {
                options.dump_globals = true;
            } else {
                return Err(format!("unexpected argument '{arg}'"));
            }
        }
        Ok(options)
    }
}

/// Split `name=value`. The value may be empty; the name may not.
pub fn parse_define(text: &str) -> Result<(String, String), String> {
    match text.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("invalid definition '{text}', expected name=value")),
    }
}

/// Build an interpreter with the host natives and `defines` as globals.
fn host_interpreter(options: &RunOptions) -> Interpreter {
    let mut globals = Scope::new();
    for (name, value) in &options.defines {
        globals.set(name, value.as_str());
    }
    let mut table = FunctionTable::new();
    natives::install(&mut table);

    Interpreter::builder()
        .globals(globals)
        .functions(SharedFunctionTable::new(table))
        .build()
}

/// Evaluate `script` in a scoped block on a fresh host interpreter.
///
/// Returns the script's result and the interpreter, so callers can
/// inspect what the script left behind.
pub fn run_source(script: &str, options: &RunOptions) -> (Result<String, EjsError>, Interpreter) {
    let mut interp = host_interpreter(options);
    let outcome = interp.eval_block(script);
    debug!(ok = outcome.is_ok(), line = interp.line_number(), "script finished");
    (outcome, interp)
}

fn finish(name: &str, script: &str, options: &RunOptions) {
    let (outcome, interp) = run_source(script, options);
    match outcome {
        Ok(value) => {
            if !value.is_empty() {
                println!("{value}");
            }
            if options.dump_globals {
                let mut globals: Vec<_> = interp
                    .globals()
                    .iter()
                    .map(|(name, value)| (name.to_string(), value.to_script_string()))
                    .collect();
                globals.sort();
                for (name, value) in globals {
                    println!("{name} = {value:?}");
                }
            }
        }
        Err(err) => {
            report_error(name, script, &err);
            std::process::exit(1);
        }
    }
}

/// Run a script file.
pub fn run_file(path: &str, options: &RunOptions) {
    let script = read_file(path);
    finish(path, &script, options);
}

/// Run a script given on the command line.
pub fn eval_inline(script: &str, options: &RunOptions) {
    finish("<inline>", script, options);
}
