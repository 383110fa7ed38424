//! transparency - Render the Bob Emploi transparency page

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use transparency::export::{Exporter, Format, HtmlConfig, HtmlExporter, JsonExporter};
use transparency::{ConfigKey, Configuration, Error, LayoutContext, compose};

#[derive(Parser)]
#[command(name = "transparency")]
#[command(version, about = "Render the transparency page", long_about = None)]
#[command(after_help = "EXAMPLES:
    transparency -o transparence.html         Render for wide surfaces
    transparency --compact --format json      Print the compact JSON tree
    transparency --config demo.toml --keys    Show the effective configuration")]
struct Cli {
    /// Render for a compact (mobile) surface
    #[arg(long)]
    compact: bool,

    /// TOML or JSON file overlaid on the embedded configuration
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (defaults to the output file extension, then html)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Base URL prepended to image paths
    #[arg(long, value_name = "URL")]
    asset_base: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// List the effective configuration and exit
    #[arg(long)]
    keys: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Html => Format::Html,
            OutputFormat::Json => Format::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = load_config(cli.config.as_deref())?;

    if cli.keys {
        show_keys(&config);
        return Ok(());
    }

    let layout = if cli.compact {
        LayoutContext::compact()
    } else {
        LayoutContext::wide()
    };
    let doc = compose(&config, layout)?;

    let format = cli
        .format
        .map(Format::from)
        .or_else(|| {
            cli.output
                .as_deref()
                .and_then(|p| p.extension())
                .and_then(|e| e.to_str())
                .and_then(Format::from_extension)
        })
        .unwrap_or_default();

    let mut buf = Vec::new();
    match format {
        Format::Html => HtmlExporter::new()
            .with_config(HtmlConfig {
                asset_base: cli.asset_base.clone(),
                ..HtmlConfig::default()
            })
            .export(&doc, &mut buf)?,
        Format::Json => JsonExporter::new().pretty(true).export(&doc, &mut buf)?,
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &buf)?;
            info!(path = %path.display(), bytes = buf.len(), "wrote {}", format.extension());
        }
        None => io::stdout().lock().write_all(&buf)?,
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Configuration, Error> {
    let base = Configuration::embedded().clone();
    let Some(path) = path else {
        return Ok(base);
    };

    let text = fs::read_to_string(path)?;
    let overlay = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Configuration::from_json_str(&text)?,
        _ => Configuration::from_toml_str(&text)?,
    };
    info!(path = %path.display(), keys = overlay.len(), "loaded configuration overlay");
    Ok(base.overlay(overlay))
}

fn show_keys(config: &Configuration) {
    for key in ConfigKey::ALL {
        match config.get(*key) {
            Ok(value) => println!("{key} = {value}"),
            Err(_) => println!("{key} (unset)"),
        }
    }
}
