//! Print the OpenAPI document as JSON or YAML.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use accounts::doc::ApiDoc;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the accounts OpenAPI document")]
struct Cli {
    /// Emit YAML instead of pretty-printed JSON.
    #[arg(long)]
    yaml: bool,
    /// Write to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn render(yaml: bool) -> Result<String> {
    let doc = ApiDoc::openapi();
    if yaml {
        doc.to_yaml().wrap_err("serialise OpenAPI document as YAML")
    } else {
        doc.to_pretty_json()
            .wrap_err("serialise OpenAPI document as JSON")
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let rendered = render(cli.yaml)?;

    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).wrap_err_with(|| format!("create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(sink, "{rendered}").wrap_err("write OpenAPI document")?;
    sink.flush().wrap_err("flush OpenAPI document")?;
    Ok(())
}
