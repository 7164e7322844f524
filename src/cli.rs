use std::fs;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use roastulator::{
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN, Limits},
    engine::core::Engine,
    roast::{BROKEN_CALCULATOR_ROAST, CannedRoaster},
    util::num::format_number,
};

/// Log level for the application
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn to_log_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// roastulator evaluates an arithmetic expression, scores how hard it is, and
/// is not impressed either way.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Tells roastulator to read the expression from a file instead.
    #[arg(short, long)]
    pub file: bool,

    /// Print only the result.
    #[arg(short, long)]
    pub quiet: bool,

    /// Longest accepted expression, in characters.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    pub max_length: usize,

    /// Deepest accepted nesting of parentheses, negations, exponents and
    /// operator chains.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// The expression, or a path when `--file` is given.
    pub contents: String,
}

impl CliArgs {
    pub const fn limits(&self) -> Limits {
        Limits::new(self.max_length, self.max_depth)
    }

    /// Returns the expression text, reading it from disk in file mode.
    ///
    /// A trailing newline from the file is dropped; everything else is kept
    /// so the complexity score sees the text as written.
    pub fn expression(&self) -> Result<String> {
        if !self.file {
            return Ok(self.contents.clone());
        }
        let text = fs::read_to_string(&self.contents).with_context(|| {
                       format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               self.contents)
                   })?;
        Ok(text.strip_suffix('\n')
               .map(|t| t.strip_suffix('\r').unwrap_or(t))
               .unwrap_or(text.as_str())
               .to_string())
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: LogLevel) {
    env_logger::Builder::from_default_env().filter_level(log_level.to_log_level_filter())
                                           .init();
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level);

    let expression = args.expression()?;
    let engine = Engine::new(args.limits());
    debug!("Running with {:?}", engine.limits());

    match engine.report(&expression, &CannedRoaster) {
        Ok(report) => {
            info!("Evaluated '{expression}' as {}", report.complexity);
            if args.quiet {
                println!("{}", format_number(report.result));
            } else {
                println!("{report}");
            }
            Ok(())
        },
        Err(e) => {
            if !args.quiet {
                println!("Roast:      {BROKEN_CALCULATOR_ROAST}");
            }
            bail!("Cannot evaluate '{expression}': {e}")
        },
    }
}
