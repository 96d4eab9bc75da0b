use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::info;
use yardcalc::{evaluate, logging, shell};

/// yardcalc evaluates arithmetic expressions with `+ - * /`, parentheses and
/// unary minus.
///
/// With no expression and no file, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of the given file instead of starting a session.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Skips the greeting banner of the interactive session.
    #[arg(short, long)]
    quiet: bool,

    /// Logs to stderr. Repeat for more detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Several words are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Some(path) = &args.file {
        info!("evaluating lines of {}", path.display());
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };
        return match shell::run_batch(BufReader::new(file), &mut io::stdout(), &mut io::stderr()) {
            Ok(0) => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if !args.expression.is_empty() {
        return match evaluate(&args.expression.join(" ")) {
            Ok(value) => {
                println!("{}", shell::format_number(value));
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    info!("starting interactive session");
    match shell::run(io::stdin().lock(), &mut io::stdout(), !args.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
