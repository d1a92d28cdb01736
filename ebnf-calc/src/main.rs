//! Command-line interface (CLI) for ebnf-calc.
//!
//! Reads one arithmetic expression, either from the command line or as a
//! single line of standard input, evaluates it with [`ExprParser`] and prints
//! the value or the diagnostics. Set `RUST_LOG=trace` to watch the lexer
//! transitions and the grammar procedures.

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use ebnf_calc::{CalcError, ExprParser, Span, Token, tokenize};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const PROMPT: &str = "Enter an arithmetic expression";

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluates an expression
    Eval {
        /// Expression; one line is read from standard input when omitted
        expr: Option<String>,
        /// Print a prompt before reading standard input
        #[arg(short, long)]
        prompt: bool,
        /// Mark the offending columns under the input line
        #[arg(short, long)]
        caret: bool,
    },
    /// Prints the token stream, one `text kind` pair per line
    Tokens {
        /// Expression; one line is read from standard input when omitted
        expr: Option<String>,
    },
}

/// Reads one line from standard input without its line terminator.
fn read_line(prompt: bool) -> Result<String> {
    if prompt {
        println!("{PROMPT}");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("can't read expression from stdin")?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}

/// Renders `line` with `^` under every column covered by `spans`.
fn caret_line(line: &str, spans: &[Span]) -> String {
    let width = line.chars().count() + 1;
    (0..width)
        .map(|col| {
            // the end marker has an empty span; it still gets one caret
            let covers = |s: &Span| col >= s.start && col - s.start < s.len().max(1);
            if spans.iter().any(covers) {
                '^'
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Source spans of everything `err` points at.
fn error_spans(err: &CalcError, tokens: &[Token]) -> Vec<Span> {
    match err {
        CalcError::Lexical(errors) => errors
            .iter()
            .map(|e| Span::new(e.position - e.text.chars().count(), e.position))
            .collect(),
        CalcError::Syntax(e) => tokens.get(e.position).map(Token::span).into_iter().collect(),
    }
}

fn eval(line: &str, caret: bool) -> ExitCode {
    let lexed = tokenize(line);
    log::info!("Stats: {:?}", lexed.stats);
    let tokens = lexed.tokens.clone();
    let result = lexed
        .into_result()
        .map_err(CalcError::from)
        .and_then(|tokens| {
            ExprParser::new(&tokens)
                .and_then(ExprParser::parse)
                .map_err(CalcError::from)
        });
    match result {
        Ok(value) => {
            println!("Value of expression = {value:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if caret {
                println!("{line}");
                println!("{}", caret_line(line, &error_spans(&err, &tokens)));
            }
            for msg in err.messages() {
                println!("{msg}");
            }
            ExitCode::FAILURE
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();

    let code = match args.command {
        Commands::Eval {
            expr,
            prompt,
            caret,
        } => {
            let line = match expr {
                Some(expr) => expr,
                None => read_line(prompt)?,
            };
            eval(&line, caret)
        }
        Commands::Tokens { expr } => {
            let line = match expr {
                Some(expr) => expr,
                None => read_line(false)?,
            };
            let lexed = tokenize(&line);
            for tok in &lexed.tokens {
                println!("{tok}");
            }
            for err in &lexed.errors {
                println!("{err}");
            }
            if lexed.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };

    Ok(code)
}
