mod converter;
mod error;
mod reader;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PGN file
    file: String,

    /// Path of the PDF file (if not specified, the TeX document is printed
    /// to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pgn_path = PathBuf::from(cli.file);

    let pgn = reader::parse_pgn_file(&pgn_path).context("Unable to parse PGN file")?;
    let document = converter::render(&pgn).context("Cannot render TeX document")?;

    match cli.output {
        Some(output) => {
            let output = PathBuf::from(output);
            println!("Writing PDF file to {}", output.to_string_lossy());
            write_pdf(&pgn_path, &document, &output)?;
        }
        None => print!("{}", document),
    }

    Ok(())
}

/// Run pdflatex over the rendered document in a temporary directory and
/// move the resulting PDF to `output`. The directory and every
/// intermediate file are removed when the guard drops, also on failure.
fn write_pdf(pgn_path: &Path, document: &str, output: &Path) -> Result<()> {
    let tempdir = tempfile::tempdir().context("Could not create a working directory")?;
    let tex_path = tempdir.path().join(tex_file_name(pgn_path)?);

    std::fs::write(&tex_path, document).with_context(|| {
        format!(
            "Could not write TeX document to {}",
            tex_path.to_string_lossy()
        )
    })?;

    let status = Command::new("pdflatex")
        .arg("-output-directory")
        .arg(tempdir.path())
        .arg(&tex_path)
        .status()
        .context("Could not run pdflatex")?;
    if !status.success() {
        bail!("pdflatex failed: {}", status);
    }

    let pattern = tempdir.path().join("*.pdf");
    let pdf_path = glob::glob(&pattern.to_string_lossy())
        .context("Invalid PDF glob pattern")?
        .next()
        .context("pdflatex did not produce a PDF")?
        .context("Could not read the produced PDF path")?;

    // a plain rename can fail across filesystems
    std::fs::copy(&pdf_path, output)
        .with_context(|| format!("Could not write PDF to {}", output.to_string_lossy()))?;

    Ok(())
}

fn tex_file_name(pgn_path: &Path) -> Result<PathBuf> {
    let mut name = PathBuf::from(pgn_path.file_name().context("PGN path has no file name")?);
    name.set_extension("tex");
    Ok(name)
}
