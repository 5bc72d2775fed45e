//! Native functions the command-line host exposes to scripts.

use std::any::Any;
use std::io::Write;

use ejs_eval::errors::native_function_failed;
use ejs_eval::{EjsError, FunctionTable, Interpreter};
use parking_lot::Mutex;

type Host<'a> = Option<&'a (dyn Any + Send + Sync)>;

/// Captures `write` output when installed as the host context. Without
/// one, `write` goes to stdout.
#[derive(Debug, Default)]
pub struct Output(Mutex<String>);

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.0.lock().clone()
    }
}

/// Register every host native in `table`.
pub fn install(table: &mut FunctionTable) {
    table.register("write", write);
    table.register("strlen", strlen);
    table.register("concat", concat);
}

/// `write(args...)`: emit the arguments back to back, followed by a
/// newline.
fn write(_: &mut Interpreter, host: Host<'_>, args: &[String]) -> Result<String, EjsError> {
    let line = args.concat();
    if let Some(output) = host.and_then(|h| h.downcast_ref::<Output>()) {
        let mut buf = output.0.lock();
        buf.push_str(&line);
        buf.push('\n');
        return Ok(String::new());
    }

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").map_err(|e| native_function_failed("write", &e.to_string()))?;
    Ok(String::new())
}

/// `strlen(s)`: length of `s` in characters.
fn strlen(_: &mut Interpreter, _: Host<'_>, args: &[String]) -> Result<String, EjsError> {
    match args {
        [s] => Ok(s.chars().count().to_string()),
        _ => Err(native_function_failed(
            "strlen",
            &format!("expected 1 argument, got {}", args.len()),
        )),
    }
}

/// `concat(args...)`: the arguments joined with no separator.
fn concat(_: &mut Interpreter, _: Host<'_>, args: &[String]) -> Result<String, EjsError> {
    Ok(args.concat())
}
