use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

mod config;
mod dialect;
mod document;
mod error;
mod input;
mod parser;
mod stats;
#[cfg(test)]
mod test_utils;

use config::OutputFormat;
use dialect::{DelimiterChar, Dialect, QuoteChar};
use error::CsvInfoError;
use stats::Summary;

/// CSV dialect inspector
#[derive(Parser, Debug)]
#[command(
    version,
    about = "CSV dialect inspector with byte-exact parsing and structural statistics"
)]
struct Args {
    /// Input CSV file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Delimiter character between cells
    #[arg(short, long, value_enum)]
    delimiter: Option<DelimiterChar>,

    /// Quote character around quoted cells
    #[arg(short, long, value_enum)]
    quote: Option<QuoteChar>,

    /// Emit the summary as JSON instead of a text table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/csvinfo-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/csvinfo-debug.log")
            .expect("Failed to open /tmp/csvinfo-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== CSVINFO DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early so CLI flags only have to override its defaults
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {}", warning);
    }

    let dialect = resolve_dialect(&args, &config_result.config);

    let bytes = match &args.input {
        Some(path) => input::load_file(path)?,
        None => input::load_stdin()?,
    };
    if bytes.is_empty() {
        return Err(CsvInfoError::EmptyInput(describe_input(&args)).into());
    }

    let document = parser::Parser::new(dialect)
        .parse(&bytes)
        .map_err(CsvInfoError::from)?;

    #[cfg(debug_assertions)]
    log::debug!(
        "parsed {} rows from {} input bytes",
        document.len(),
        bytes.len()
    );

    let summary = stats::summarize(&document);
    render(&summary, output_format(&args, &config_result.config))?;

    #[cfg(debug_assertions)]
    log::debug!("=== CSVINFO DEBUG SESSION ENDED ===");

    Ok(())
}

/// Dialect from CLI flags, falling back to the config file's defaults
fn resolve_dialect(args: &Args, config: &config::Config) -> Dialect {
    let defaults = config.dialect.dialect();
    Dialect::new(
        args.quote.unwrap_or(defaults.quote),
        args.delimiter.unwrap_or(defaults.delimiter),
    )
}

/// Output format from CLI flags, falling back to the config file
fn output_format(args: &Args, config: &config::Config) -> OutputFormat {
    if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    }
}

fn describe_input(args: &Args) -> String {
    match &args.input {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    }
}

/// Print the summary in the selected format
fn render(summary: &Summary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}
