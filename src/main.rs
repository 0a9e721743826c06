use anyhow::{Context, Result};
use awsjet_config::aws;
use awsjet_config::config::{OutputFormat, Settings};
use awsjet_config::{Provider, Resource};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Print the Crossplane resource configuration derived from the Terraform AWS schema
#[derive(Parser, Debug)]
#[command(name = "awsjet-config", version, about, long_about = None)]
struct Args {
    /// Provider schema document to use instead of the embedded one
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Additional resource name pattern to include (repeatable)
    #[arg(short, long)]
    include: Vec<String>,

    /// Additional resource name pattern to skip (repeatable)
    #[arg(short, long)]
    skip: Vec<String>,

    /// Only print this resource
    #[arg(short, long)]
    resource: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Persist include/skip patterns and output format as defaults
    #[arg(long)]
    save: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("awsjet-config started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("awsjet-config").join("awsjet-config.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".awsjet-config").join("awsjet-config.log");
    }
    PathBuf::from("awsjet-config.log")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    // CLI patterns extend the persisted ones
    let mut settings = Settings::load();
    settings.include.extend(args.include.iter().cloned());
    settings.skip.extend(args.skip.iter().cloned());
    let format = settings.effective_format(args.format);

    if args.save {
        settings.output_format = Some(format);
        settings.save().context("Failed to save settings")?;
        tracing::info!("Saved settings to {:?}", Settings::config_path());
    }

    let provider = match &args.schema {
        Some(path) => {
            let schema = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read schema {}", path.display()))?;
            aws::get_provider_with_schema(&schema, &settings)
        }
        None => aws::get_provider(&settings),
    }
    .context("Failed to configure provider")?;

    tracing::info!(
        "Configured {} resources for {}",
        provider.len(),
        provider.root_group
    );

    let selected = select(&provider, args.resource.as_deref())?;
    let rendered = render(&selected, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

fn select<'a>(provider: &'a Provider, name: Option<&str>) -> Result<Vec<&'a Resource>> {
    match name {
        Some(name) => provider
            .resource(name)
            .map(|r| vec![r])
            .ok_or_else(|| anyhow::anyhow!("Unknown or unselected resource: {}", name)),
        None => Ok(provider.resources().collect()),
    }
}

fn render(resources: &[&Resource], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(resources)?,
        OutputFormat::Yaml => serde_yaml::to_string(resources)?,
    };
    Ok(out)
}
