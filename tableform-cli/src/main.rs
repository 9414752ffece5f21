mod page;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use tableform_lib::catalog::inquiry_form;
use tableform_lib::{
    Attachment, FieldDescriptor, RenderConfig, loader, render_and_attach, validate,
};

#[derive(Parser, Debug)]
#[command(name = "tableform")]
#[command(about = "Render a declarative field list into an HTML form page.", long_about = None)]
struct Cli {
    /// JSON descriptor list. Defaults to the built-in inquiry form.
    #[arg(long, value_name = "PATH")]
    fields: Option<PathBuf>,

    /// Write the page here instead of stdout.
    #[arg(long, short, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Id of the element to render into. The page only provides `form`.
    #[arg(long, value_name = "ID")]
    container: Option<String>,

    /// Insert labels and placeholders without HTML escaping.
    #[arg(long)]
    verbatim: bool,

    /// Fail when the descriptor list has lint findings.
    #[arg(long)]
    strict: bool,

    /// Render config file. Defaults to `config.json` in the config directory.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, default_value = "お問い合わせ")]
    title: String,

    #[arg(long, default_value = "ja")]
    lang: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Print the descriptor list as JSON and exit.
    #[arg(long)]
    dump_fields: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let (Some(dir), Some(log_path)) = (paths::cache_dir(), paths::log_file()) else {
        return Ok(());
    };
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    paths::rotate_logs(&dir);
    let log_file =
        File::create(&log_path).with_context(|| format!("create {}", log_path.display()))?;
    WriteLogger::init(level, Config::default(), log_file).context("initialize logger")?;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => paths::config_file().filter(|p| p.exists()),
    };

    let config = match path {
        Some(path) => {
            log::info!("Using render config {}", path.display());
            RenderConfig::from_file(&path)?
        }
        None => RenderConfig::default(),
    };
    Ok(apply_overrides(config, cli))
}

/// Command-line flags win over the config file.
fn apply_overrides(mut config: RenderConfig, cli: &Cli) -> RenderConfig {
    if let Some(id) = &cli.container {
        config = config.with_container_id(id.clone());
    }
    if cli.verbatim {
        config = config.with_escape(false);
    }
    config
}

fn load_fields(cli: &Cli) -> Result<Vec<FieldDescriptor>> {
    match &cli.fields {
        Some(path) => Ok(loader::from_file(path)?),
        None => Ok(inquiry_form().to_vec()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let level = LevelFilter::from(cli.log_level);
    if level != LevelFilter::Off {
        // The form is still written without a log file.
        if let Err(e) = init_logging(level) {
            eprintln!("Warning: logging disabled: {:#}", e);
        }
    }

    let config = load_config(&cli)?;
    let fields = load_fields(&cli)?;

    if cli.dump_fields {
        println!("{}", loader::to_json(&fields)?);
        return Ok(());
    }

    if let Err(problems) = validate::validate(&fields) {
        for problem in &problems {
            log::warn!("{}", problem);
        }
        if cli.strict {
            bail!(
                "{} lint finding(s), first: {}",
                problems.len(),
                problems[0]
            );
        }
    }

    let mut doc = page::inquiry_page(&cli.title, &cli.lang);
    match render_and_attach(&mut doc, &fields, &config) {
        Attachment::Attached { rows, bytes } => {
            log::info!("Rendered {} rows ({} bytes)", rows, bytes);
        }
        Attachment::ContainerMissing => {
            log::info!("No #{} on the page, writing it unchanged", config.container_id);
        }
    }

    let html = htmldom::render_document(&doc);
    match &cli.out {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("write {}", path.display()))?
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
