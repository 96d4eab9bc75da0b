use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::evaluate;

/// Inputs that end an interactive session, compared case-insensitively.
pub const EXIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

const PROMPT: &str = ">>> ";
const FAREWELL: &str = "Bye.";
const RULE: &str = "==================================================";

/// Returns `true` if `line` asks the shell to stop.
///
/// # Examples
/// ```
/// use yardcalc::shell::is_exit_command;
///
/// assert!(is_exit_command("QUIT"));
/// assert!(is_exit_command("q"));
/// assert!(!is_exit_command("quit now"));
/// ```
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    EXIT_COMMANDS.iter().any(|command| line.eq_ignore_ascii_case(command))
}

/// Formats a result the way the shell prints it.
///
/// Integral values keep a trailing `.0`; everything else uses the shortest
/// text that reads back to the same `f64`.
///
/// # Examples
/// ```
/// use yardcalc::shell::format_number;
///
/// assert_eq!(format_number(14.0), "14.0");
/// assert_eq!(format_number(1e16), "10000000000000000.0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-2.5), "-2.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value:?}")
    }
}

fn write_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{RULE}")?;
    writeln!(output, "yardcalc {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(output, "{RULE}")?;
    writeln!(output, "Usage: type an expression and press enter (e.g. 2 + 3).")?;
    writeln!(output, "Operators: + (add), - (subtract, negate), * (multiply), / (divide), ( )")?;
    writeln!(output, "Type {} to leave.", EXIT_COMMANDS.map(|c| format!("'{c}'")).join(", "))?;
    writeln!(output, "{RULE}")?;
    writeln!(output)
}

/// Runs the interactive read-evaluate-print loop.
///
/// Each line is trimmed. Blank lines are skipped, exit commands and the end of
/// input stop the loop, and anything else is evaluated and answered with a
/// `result:` or `error:` line followed by an empty line. Evaluation errors
/// never stop the loop.
///
/// # Errors
/// Returns an error only if reading the input or writing the output fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use yardcalc::shell::run;
///
/// let mut output = Vec::new();
/// run(Cursor::new("1 + 1\nq\n"), &mut output, false).unwrap();
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("result: 2.0"));
/// ```
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, banner: bool) -> io::Result<()> {
    if banner {
        write_banner(output)?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let line = line.trim();

        if is_exit_command(line) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match evaluate(line) {
            Ok(value) => writeln!(output, "result: {}", format_number(value))?,
            Err(e) => {
                if e.is_internal() {
                    warn!("internal error while evaluating {line:?}: {e:?}");
                }
                writeln!(output, "error: {e}")?;
            },
        }
        writeln!(output)?;
    }

    writeln!(output, "{FAREWELL}")?;
    Ok(())
}

/// Evaluates every non-blank line of `input` without prompting.
///
/// Results are written to `output`, one per line. Failures are written to
/// `errors` as `line N: message`, where `N` counts from one.
///
/// # Errors
/// Returns an error only if reading or writing fails.
///
/// # Returns
/// The number of lines that failed to evaluate.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use yardcalc::shell::run_batch;
///
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let failures = run_batch(Cursor::new("2 * 3\n\n1 / 0\n"), &mut out, &mut err).unwrap();
///
/// assert_eq!(failures, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "6.0\n");
/// assert_eq!(String::from_utf8(err).unwrap(), "line 3: Division by zero.\n");
/// ```
pub fn run_batch<R, W, E>(input: R, output: &mut W, errors: &mut E) -> io::Result<usize>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut failures = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match evaluate(line) {
            Ok(value) => writeln!(output, "{}", format_number(value))?,
            Err(e) => {
                failures += 1;
                writeln!(errors, "line {}: {e}", index + 1)?;
            },
        }
    }

    info!("batch finished with {failures} failed lines");
    Ok(failures)
}
