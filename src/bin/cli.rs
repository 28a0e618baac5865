use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use logging::{Flags, Logger, LoggerConfig, Priority, Spaced};

use crate::error::{CliError, USAGE_EXIT_CODE};

/// Write one prioritised log line.
#[derive(Debug, Parser)]
#[command(name = "prilog")]
#[command(about = "Write a syslog-style prioritised log line")]
#[command(version)]
struct Cli {
    /// Least severe priority that is written (name or integer).
    #[arg(long, short = 't', value_name = "PRIORITY", allow_negative_numbers = true)]
    threshold: Option<Priority>,

    /// Text placed at the start of the line.
    #[arg(long, short = 'p', value_name = "TEXT")]
    prefix: Option<String>,

    /// Header fields, e.g. `date,time,shortfile` or `none`.
    #[arg(long, short = 'f', value_name = "LIST")]
    flags: Option<Flags>,

    /// TOML file with `prefix`, `threshold`, and `flags` keys.
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write to standard error instead of standard output.
    #[arg(long)]
    stderr: bool,

    /// Priority of the message, or `fatal` / `panic`.
    #[arg(value_name = "LEVEL")]
    level: Level,

    /// Message words, joined with single spaces.
    #[arg(value_name = "MESSAGE", required = true, num_args = 1.., allow_hyphen_values = true)]
    message: Vec<String>,
}

/// What to do with the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    /// Gate the message at a named priority.
    At(Priority),
    /// Write unconditionally, then exit with status 1.
    Fatal,
    /// Write unconditionally, then panic.
    Panic,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => return Ok(Self::Fatal),
            "panic" => return Ok(Self::Panic),
            _ => {}
        }
        let priority = s.parse::<Priority>().map_err(|error| error.to_string())?;
        if priority.is_named() {
            Ok(Self::At(priority))
        } else {
            Err(format!("no log level for priority {priority}"))
        }
    }
}

/// Parses `args`, writes the message, and maps the outcome to an exit code.
///
/// `fatal` never returns and `panic` unwinds out of this function.
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let rendered = error.render().to_string();
            let _ = if error.use_stderr() {
                stderr.write_all(rendered.as_bytes())
            } else {
                stdout.write_all(rendered.as_bytes())
            };
            return u8::try_from(error.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from);
        }
    };

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            let _ = writeln!(stderr, "prilog: {error}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    let words: Vec<&dyn fmt::Display> = cli
        .message
        .iter()
        .map(|word| word as &dyn fmt::Display)
        .collect();
    let message = Spaced(&words);

    if cli.stderr {
        emit(&config.build(stderr), cli.level, &message);
    } else {
        emit(&config.build(stdout), cli.level, &message);
    }
    ExitCode::SUCCESS
}

/// Layers explicit flags over the optional configuration file.
fn resolve_config(cli: &Cli) -> Result<LoggerConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    if let Some(prefix) = &cli.prefix {
        config.prefix.clone_from(prefix);
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if let Some(flags) = cli.flags {
        config.flags = flags;
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<LoggerConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn emit<W: Write>(logger: &Logger<W>, level: Level, message: &Spaced<'_>) {
    match level {
        Level::At(priority) => {
            match priority {
                Priority::EMERG => logger.emerg(message),
                Priority::ALERT => logger.alert(message),
                Priority::CRIT => logger.crit(message),
                Priority::ERROR => logger.error(message),
                Priority::WARN => logger.warn(message),
                Priority::NOTICE => logger.notice(message),
                Priority::INFO => logger.info(message),
                _ => logger.debug(message),
            }
            let _ = logger.writer().flush();
        }
        Level::Fatal => logger.fatal(message),
        Level::Panic => logger.panic(message),
    }
}
