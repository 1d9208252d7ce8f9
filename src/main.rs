use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use json_diagram::common;
use json_diagram::config::Config;
use json_diagram::export::{self, ExportFormat, ExportOptions};
use json_diagram::{DiagramParser, ThemeMode, ThemeService, ThemeSettings};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON document into a diagram
    Convert {
        /// Input file, `-` reads from stdin
        #[clap(short, long, default_value = "-")]
        input: String,
        /// Output file, stdout when omitted
        #[clap(short, long)]
        output: Option<String>,
        /// json, dot, mermaid, csv-nodes or csv-connectors
        #[clap(short, long)]
        format: Option<String>,
        /// Seed for reproducible leaf ids
        #[clap(short, long)]
        seed: Option<u64>,
        #[clap(short, long)]
        config: Option<String>,
        #[clap(long)]
        pretty: bool,
        #[clap(long)]
        theme: Option<String>,
    },
    /// Print the color palette of a theme as JSON
    Theme {
        #[clap(short, long, default_value = "light")]
        mode: String,
    },
    /// Write a default configuration file
    Init {
        #[clap(short, long, default_value = "json-diagram.yaml")]
        config: String,
    },
    /// Print the template used by a template based export format
    Template { format: String },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Convert {
            input,
            output,
            format,
            seed,
            config,
            pretty,
            theme,
        } => {
            let mut cfg = match config {
                Some(path) => Config::load(Path::new(&path))?,
                None => Config::default(),
            };
            if let Some(format) = format {
                cfg.format = format.parse()?;
            }
            if let Some(theme) = theme {
                cfg.theme = theme.parse()?;
            }
            if seed.is_some() {
                cfg.seed = seed;
            }
            if pretty {
                cfg.pretty = true;
            }
            if output.is_some() {
                cfg.output = output;
            }
            convert(&input, &cfg)?;
        }
        Commands::Theme { mode } => {
            let mode: ThemeMode = mode.parse()?;
            let mut service = ThemeService::default();
            service.set_mode(mode);
            println!(
                "{}",
                serde_json::to_string_pretty(service.current_settings())?
            );
        }
        Commands::Init { config } => {
            info!("Writing default configuration: {}", config);
            let serialized = Config::default().to_yaml()?;
            common::write_string_to_file(&config, &serialized)?;
        }
        Commands::Template { format } => {
            let format: ExportFormat = format.parse()?;
            match export::get_template(format) {
                Some(template) => println!("{}", template),
                None => warn!("Format {} is not template based", format),
            }
        }
    }

    Ok(())
}

fn convert(input: &str, cfg: &Config) -> Result<()> {
    let content = if input == "-" {
        info!("Reading JSON from stdin");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        info!("Reading JSON from {}", input);
        std::fs::read_to_string(input)?
    };

    let diagram = match cfg.seed {
        Some(seed) => DiagramParser::seeded(seed).process_str(&content)?,
        None => DiagramParser::new().process_str(&content)?,
    };
    if diagram.is_empty() {
        warn!("Input is not a non-empty JSON object, diagram is empty");
    }
    if let Err(errors) = diagram.verify_integrity() {
        for err in errors {
            warn!("{}", err);
        }
    }

    let options = ExportOptions {
        pretty: cfg.pretty,
        theme: ThemeSettings::for_mode(cfg.theme),
    };
    let rendered = export::render(&diagram, cfg.format, &options)?;

    match &cfg.output {
        Some(path) => {
            info!("Writing {} to {}", cfg.format, path);
            common::write_string_to_file(path, &rendered)?;
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .with_writer(std::io::stderr)
        .init();
}
