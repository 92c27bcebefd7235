use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the request TOML file
    pub request: PathBuf,
    /// Directory to write cover.html, content.html, and book.html into
    #[clap(short, long, default_value = ".")]
    pub outdir: PathBuf,
    /// Also render book.pdf through the external renderer
    #[clap(long)]
    pub pdf: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// HTML document to render
    pub input: PathBuf,
    /// Output PDF path
    #[clap(short, long, default_value = "ebook.pdf")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Renderer executable used for PDF output
    #[clap(long, global = true, default_value = "weasyprint", env = "BOOKFORGE_RENDERER")]
    pub renderer: String,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assembles a book from a request file and writes the HTML documents
    Generate(GenerateArgs),
    /// Renders an assembled HTML document to PDF via the external renderer
    Render(RenderArgs),
    /// Reports data-store diagnostics as JSON
    Check,
}
