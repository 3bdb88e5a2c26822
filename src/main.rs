use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use kirlang::{
    error::Error,
    interpreter::{
        console::StdConsole, program::Program, source::TerminalSource, value::Value,
    },
    run_file, run_source,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// kirlang runs programs written in a small scripting language with Cyrillic
/// keywords. Without a file or inline source it starts an interactive
/// session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the program stored in this file.
    #[arg(short, long, conflicts_with = "source")]
    file: Option<PathBuf>,

    /// Program text to run directly.
    source: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let mut console = StdConsole::new();

    let result = match (&args.file, &args.source) {
        (Some(path), _) => run_file(path, &mut console),
        (None, Some(source)) => run_source(source, &mut console),
        (None, None) => interactive(&mut console),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match (&e, &args.file) {
                (Error::Source(_), Some(path)) => {
                    eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                              path.display());
                },
                _ => eprintln!("{e}"),
            }
            ExitCode::FAILURE
        },
    }
}

/// Reads statements from the terminal, echoing the value of each one.
fn interactive(console: &mut StdConsole) -> Result<(), Error> {
    let mut program = Program::new(TerminalSource::new(Some("> ".to_string())), console);

    while let Some(value) = program.step()? {
        if value != Value::Unit {
            println!("=> {value}");
        }
    }

    Ok(())
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();
}
