use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use reportdoc::{Config, Result};

#[derive(Parser)]
#[command(name = "reportdoc")]
#[command(about = "Render structured summary reports")]
struct Cli {
    /// Input report file, or `-` for stdin
    input: PathBuf,

    /// Output file (PDF defaults to input name with .pdf extension, other formats to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Pdf)]
    format: Format,

    /// Config file
    #[arg(short, long, default_value = "reportdoc.toml")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Outline,
    Typst,
    Pdf,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reportdoc={level}")));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config);
    let text = read_input(&cli.input)?;

    let rendered: Vec<u8> = match cli.format {
        Format::Json => {
            let report = reportdoc::render_report(&text, &config);
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json.into_bytes()
        }
        Format::Outline => {
            reportdoc::render_report(&text, &config)
                .outline_with_stats()
                .into_bytes()
        }
        Format::Typst => reportdoc::report_to_typst(&text, &config).into_bytes(),
        Format::Pdf => reportdoc::report_to_pdf(&text, &config)?,
    };

    let output = match (cli.output, cli.format) {
        (Some(path), _) => Some(path),
        (None, Format::Pdf) if cli.input != Path::new("-") => {
            Some(cli.input.with_extension("pdf"))
        }
        (None, Format::Pdf) => Some(PathBuf::from("report.pdf")),
        (None, _) => None,
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)?;
            info!(path = %path.display(), "wrote output");
            println!("Created {}", path.display());
        }
        None => io::stdout().write_all(&rendered)?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
