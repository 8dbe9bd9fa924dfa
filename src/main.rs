use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

/// Generate the SHM documentation content tree.
#[derive(Parser)]
struct Cli {
    /// output root for generated content, default "content"
    #[arg(short, long)]
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(hugo::CONTENT_DIR));

    if let Err(e) = hugo::generate(root, structure::SECTIONS) {
        println!("failed: {:?}", e);
        return ExitCode::FAILURE;
    }

    println!("\n🎉 All documentation pages created successfully!\n");

    ExitCode::SUCCESS
}

mod hugo;
mod structure;
