use std::{
    fs,
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use loxide::{error::InterpretError, Session};

/// loxide is a tree-walking interpreter for the Lox scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run. Omit it to start an interactive prompt.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

/// Runs a script file to completion.
///
/// Exits with code 65 for syntax errors and 70 for runtime errors, so shells
/// and test harnesses can tell the two failure modes apart.
fn run_file(path: &PathBuf) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     std::process::exit(1);
                 });

    if let Err(e) = Session::new().run(&source) {
        eprintln!("{e}");
        match e {
            InterpretError::Syntax(_) => std::process::exit(65),
            InterpretError::Runtime(_) => std::process::exit(70),
        }
    }
}

/// Runs an interactive prompt, one source line at a time.
///
/// The session persists for the whole prompt, so definitions entered on one
/// line stay visible on later lines. Errors are printed and the prompt
/// continues; a failed line never ends the session.
fn run_prompt() {
    let stdin = std::io::stdin();
    let mut session = Session::new();

    loop {
        print!(">>>");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        if let Err(e) = session.run(&line) {
            eprintln!("{e}");
        }
    }
}
