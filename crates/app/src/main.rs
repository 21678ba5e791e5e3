use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gstinvoice_app::{AppConfig, InvoiceForm, Session};
use gstinvoice_parties::JsonFileBuyerRepository;
use gstinvoice_render::{HtmlRenderer, Renderer, TextRenderer};

/// Fill, validate and print a GST tax invoice from a JSON form.
#[derive(Debug, Parser)]
#[command(name = "gstinvoice", version)]
struct Cli {
    /// Invoice form as JSON.
    form: PathBuf,

    /// Plain text instead of printable HTML.
    #[arg(long)]
    text: bool,

    /// Write the invoice here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() {
    if let Err(error) = run() {
        tracing::error!(error = %format!("{error:#}"), "invoice generation failed");
        eprintln!("gstinvoice error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    gstinvoice_observability::init_with(config.log_format);
    tracing::info!(data_dir = %config.data_dir.display(), "configuration loaded");

    let seller = config.load_seller_profile()?;
    let repository = JsonFileBuyerRepository::new(config.store_path());
    let mut session = Session::open(repository, seller).context("failed to open buyer store")?;

    let bytes = std::fs::read(&cli.form)
        .with_context(|| format!("failed to read form {}", cli.form.display()))?;
    let form = InvoiceForm::from_json(&bytes)
        .with_context(|| format!("failed to parse form {}", cli.form.display()))?;

    session.fill(&form)?;
    let document = session.submit()?;

    let renderer: Box<dyn Renderer> = if cli.text {
        Box::new(TextRenderer::new())
    } else {
        Box::new(HtmlRenderer::new())
    };
    let output = session.render(renderer.as_ref())?;

    match &cli.out {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                title = %document.document_title,
                "invoice written"
            );
        }
        None => print!("{output}"),
    }
    Ok(())
}
