mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, init, CompileArgs, InitArgs};

/// Mailsmith CLI - turn visual email templates into deliverable HTML
#[derive(Parser, Debug)]
#[command(name = "mailsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a starter template JSON file
    Init(InitArgs),

    /// Compile a template JSON file to email-client-safe HTML
    Compile(CompileArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Init(args) => init(args),
        Command::Compile(args) => compile(args),
    };

    if let Err(error) = result {
        eprintln!("{} {}", "✗".red(), error.to_string().red());
        std::process::exit(1);
    }
}
