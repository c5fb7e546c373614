use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailsmith_editor::{EditSession, ElementKind, Mutation};
use mailsmith_model::{Document, TextContent, TextStyle};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Template name
    #[arg(short, long, default_value = "My template")]
    pub name: String,

    /// Output file
    #[arg(short, long, default_value = "template.json")]
    pub out: PathBuf,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs) -> Result<()> {
    if args.out.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            args.out.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Creating starter template...".bright_blue().bold());

    let mut session = EditSession::new(Document::new(&args.name));
    let section_id = session.document().sections[0].id.clone();

    let heading_id = session
        .apply(Mutation::InsertElement {
            section_id: section_id.clone(),
            kind: "heading".to_string(),
        })?
        .expect("section exists in a fresh document");
    session.apply(Mutation::UpdateElement {
        element_id: heading_id,
        patch: ElementKind::Heading {
            content: TextContent {
                text: Some(format!("Welcome to {}", args.name)),
            },
            style: TextStyle::default(),
        },
    })?;

    for kind in ["paragraph", "divider", "button"] {
        session.apply(Mutation::InsertElement {
            section_id: section_id.clone(),
            kind: kind.to_string(),
        })?;
    }

    fs::write(&args.out, session.document().to_json()?)?;
    println!("  {} Created {}", "✓".green(), args.out.display());

    Ok(())
}
