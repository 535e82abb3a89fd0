use std::{fs, process::ExitCode};

use brainrot::{
    interpreter::{host::StdHost, settings::Settings},
    run_source,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// brainrot runs programs written in the brainrot scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells brainrot to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of distinct variables a program may create.
    #[arg(long)]
    symbol_capacity: Option<usize>,

    /// Subtracted from the line number of every reported error.
    #[arg(long, default_value_t = 0)]
    line_offset: usize,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(EnvFilter::from_default_env())
                                  .init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let mut settings = Settings::default().with_line_offset(args.line_offset);
    if let Some(capacity) = args.symbol_capacity {
        settings = settings.with_symbol_capacity(capacity);
    }

    match run_source(&script, &mut StdHost, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(code) = e.exit_code() {
                std::process::exit(code);
            }
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
