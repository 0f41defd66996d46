use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use lumen::{display_error, lexer::lexer::tokenize, parser::parser::parse};

/// Tokenizes and parses a lumen source file, printing the result.
#[derive(Parser)]
#[command(name = "lumen")]
#[command(version = "0.1.0")]
#[command(about = "Lumen language front end", long_about = None)]
struct Cli {
    /// Source file to parse
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Don't print the syntax tree, only report errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let cli = Cli::parse();
    let file_name = cli.file.to_string_lossy().into_owned();

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read {}: {}", file_name, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    if cli.tokens {
        for token in &tokens {
            token.debug();
        }
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &source, &file_name);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(statements = ast.len(), elapsed = ?parse_start.elapsed(), "parsed");

    if !cli.quiet {
        println!("{:#?}", ast);
    }

    tracing::info!(elapsed = ?start.elapsed(), "done");

    ExitCode::SUCCESS
}
