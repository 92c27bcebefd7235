use anyhow::{Context, Result};
use bookforge::render::{RenderBackend, WeasyPrint};
use bookforge::{diagnostics, generate, logger, GenerationRequest};
use cli::Cli;
use log::LevelFilter;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::ConsoleLogger::init(level).with_context(|| "Failed to install logger")?;

    match &cli.command {
        cli::Commands::Generate(args) => {
            let contents = std::fs::read_to_string(&args.request).with_context(|| {
                format!("Failed to read request file: {}", args.request.display())
            })?;
            let request: GenerationRequest =
                toml::from_str(&contents).with_context(|| "Failed to parse request TOML")?;

            let book = generate(&request).with_context(|| "Failed to generate book")?;

            std::fs::create_dir_all(&args.outdir).with_context(|| {
                format!("Failed to create output directory: {}", args.outdir.display())
            })?;
            for (name, document) in [
                ("cover.html", &book.cover),
                ("content.html", &book.content),
                ("book.html", &book.full),
            ] {
                let path = args.outdir.join(name);
                std::fs::write(&path, document.to_html())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("  {}", path.display());
            }

            if args.pdf {
                let backend = WeasyPrint {
                    command: cli.renderer.clone(),
                };
                let pdf = backend
                    .render_pdf(&book.full.to_html())
                    .with_context(|| "Failed to render PDF")?;
                let path = args.outdir.join("book.pdf");
                std::fs::write(&path, pdf)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("  {}", path.display());
            }

            Ok(())
        }
        cli::Commands::Render(args) => {
            let html = std::fs::read_to_string(&args.input)
                .with_context(|| format!("Failed to read {}", args.input.display()))?;
            let backend = WeasyPrint {
                command: cli.renderer.clone(),
            };
            let pdf = backend
                .render_pdf(&html)
                .with_context(|| "Failed to render PDF")?;
            std::fs::write(&args.output, pdf)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
            println!("  {}", args.output.display());
            Ok(())
        }
        cli::Commands::Check => {
            let report = diagnostics::probe();
            let json = serde_json::to_string_pretty(&report)
                .with_context(|| "Failed to serialize diagnostics")?;
            println!("{json}");
            Ok(())
        }
    }
}
