use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mailsmith_codegen::{generate_html_with_options, GenerateOptions};
use mailsmith_model::Document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Template JSON file
    pub path: PathBuf,

    /// Output file (defaults to the input path with an .html extension)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit compact HTML without indentation
    #[arg(long)]
    pub compact: bool,
}

pub fn compile(args: CompileArgs) -> Result<()> {
    let json = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let document = Document::from_json(&json)
        .with_context(|| format!("{} is not a valid template", args.path.display()))?;

    let options = GenerateOptions {
        pretty: !args.compact,
        ..Default::default()
    };
    let html = generate_html_with_options(&document, options);

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_path = args
        .out
        .unwrap_or_else(|| args.path.with_extension("html"));
    fs::write(&out_path, &html)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        args.path.display(),
        out_path.display()
    );

    Ok(())
}
