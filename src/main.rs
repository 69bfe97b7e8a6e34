// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::Path;

use crate::app_config::{Config, TranslationProvider};
use crate::translation::{TranslationRequest, TranslationService};

mod app_config;
mod dialects;
mod errors;
mod providers;
mod substitution;
mod translation;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Gemini,
    Mock,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Gemini => TranslationProvider::Gemini,
            CliTranslationProvider::Mock => TranslationProvider::Mock,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate Marathi text into a regional dialect
    Translate(TranslateArgs),

    /// List the recognized dialect identifiers
    Dialects,

    /// Generate shell completions for dialectai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Target dialect identifier (see `dialectai dialects`)
    #[arg(short, long, default_value = "standard")]
    dialect: String,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// DialectAI - Marathi dialect translation
///
/// Converts Standard Marathi text into one of seventeen regional dialect
/// forms using rule-based substitution refined by an AI provider.
#[derive(Parser, Debug)]
#[command(name = "dialectai")]
#[command(version = "1.0.0")]
#[command(about = "AI-assisted Marathi dialect translation tool")]
#[command(long_about = "DialectAI rewrites Standard Marathi into regional dialects by combining a
deterministic substitution pass with AI refinement.

EXAMPLES:
    dialectai translate \"मला आहे\" -d nagpur    # Translate into Nagpur Marathi
    dialectai translate \"मला आहे\" -p mock      # Use the offline mock provider
    dialectai dialects                          # List recognized dialects
    dialectai completions bash > dialectai.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SUPPORTED PROVIDERS:
    gemini - Google Gemini API (requires API key)
    mock   - Deterministic offline provider")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info).map_err(|e| anyhow!("Failed to set logger: {}", e))?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "dialectai", &mut std::io::stdout());
            Ok(())
        }
        Commands::Dialects => {
            for dialect in dialects::Dialect::ALL {
                println!("{:<12} {}", dialect.as_str(), dialect.label());
            }
            Ok(())
        }
        Commands::Translate(args) => run_translate(args).await,
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(to_level_filter(&cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)?;
        std::fs::write(config_path, config_json)
            .map_err(|e| anyhow!("Failed to write default config to {}: {}", config_path, e))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = options.provider {
        config.provider = provider.into();
    }
    if let Some(model) = &options.model {
        let provider_str = config.provider.to_lowercase_string();
        if let Some(provider_config) = config
            .available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
        {
            provider_config.model = model.clone();
        }
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    } else {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    config.validate()?;

    let service = TranslationService::new(&config).map_err(|e| anyhow!(e.to_string()))?;
    let request = TranslationRequest {
        text: options.text,
        dialect: options.dialect,
    };

    match service.translate_request(&request).await {
        Ok(result) => {
            println!("{}", result.translated_text);
            eprintln!("confidence: {:.2}", result.confidence);
            for rule in &result.applied_rules {
                eprintln!("rule: {}", rule);
            }
            Ok(())
        }
        Err(validation) => {
            for (field, message) in &validation.errors {
                eprintln!("{}: {}", field, message);
            }
            Err(anyhow!("Invalid translation request"))
        }
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
