//! Demo CLI: tokenizes a template file and prints the token stream,
//! colored by kind. Not part of the library's public contract — a
//! reworking of the teacher's hardcoded `main.ion` reader into an actual
//! small tool, in the same vein as `crates/cli`.

use std::fs;
use std::io::{self, Stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::{queue, QueueableCommand};

use tplex::{tokenize, MarkerSet, Options, Token};

#[derive(Parser)]
#[command(name = "tplex", about = "Tokenize a template file")]
struct Args {
    /// Path to the template file.
    path: String,

    /// Elide the blank line left behind by a fragment on its own line.
    #[arg(long)]
    trim: bool,

    /// Line number to report for the first line of the file.
    #[arg(long, default_value_t = 1)]
    starting_line: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}: {error}", args.path);
            return ExitCode::FAILURE;
        }
    };

    let options = Options { trim: args.trim, markers: MarkerSet::default() };

    match tokenize(&source, args.starting_line, &options) {
        Ok(tokens) => {
            let mut stdout = io::stdout();
            for token in &tokens {
                print_token(&mut stdout, token).expect("writing to stdout");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            print_error(&mut io::stdout(), &args.path, &error).expect("writing to stdout");
            ExitCode::FAILURE
        }
    }
}

fn print_token(stdout: &mut Stdout, token: &Token) -> io::Result<()> {
    match token {
        Token::Text(text) => {
            stdout.queue(Print(text))?;
        }
        Token::Expr(f) => {
            queue!(stdout, PrintStyledContent(f.contents.as_str().cyan()))?;
        }
        Token::StartExpr(f) => {
            queue!(stdout, PrintStyledContent(f.contents.as_str().green().bold()))?;
        }
        Token::MiddleExpr(f) => {
            queue!(stdout, PrintStyledContent(f.contents.as_str().yellow()))?;
        }
        Token::EndExpr(f) => {
            queue!(stdout, PrintStyledContent(f.contents.as_str().green().bold()))?;
        }
    }
    stdout.flush()
}

fn print_error(stdout: &mut Stdout, path: &str, error: &tplex::Error) -> io::Result<()> {
    queue!(
        stdout,
        PrintStyledContent("error".red().bold()),
        PrintStyledContent(format!(" ({path}:{}): ", error.line()).grey()),
        PrintStyledContent(error.to_string().white()),
        Print("\n"),
    );
    stdout.flush()
}
