//! Shared plumbing for the `generate-schematic` and `generate-midi-map` binaries.

use organ_matrix::MatrixConfig;
use serde::Serialize;
use std::io::Write as _;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Matrix(organ_matrix::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Matrix(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<organ_matrix::Error> for CliError {
    fn from(value: organ_matrix::Error) -> Self {
        Self::Matrix(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Logs go to stderr; stdout carries the tool's actual output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

pub fn load_config(path: Option<&str>) -> Result<MatrixConfig, CliError> {
    match path {
        None => Ok(MatrixConfig::default()),
        Some(path) => Ok(MatrixConfig::from_path(path)?),
    }
}

/// Pulls the value following a flag, or fails with `usage`.
pub fn flag_value<'a>(
    it: &mut impl Iterator<Item = &'a String>,
    usage: &'static str,
) -> Result<&'a str, CliError> {
    it.next().map(String::as_str).ok_or(CliError::Usage(usage))
}

pub fn parse_number<T: std::str::FromStr>(text: &str, usage: &'static str) -> Result<T, CliError> {
    text.trim().parse::<T>().map_err(|_| CliError::Usage(usage))
}

pub fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

/// Prints the error and exits: 2 for usage errors, 1 otherwise.
pub fn exit_with(err: CliError) -> ! {
    eprintln!("{err}");
    match err {
        CliError::Usage(_) => std::process::exit(2),
        _ => std::process::exit(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGE: &str = "usage";

    #[test]
    fn flag_value_requires_a_value() {
        let argv = vec!["--keys".to_string()];
        let mut it = argv.iter().skip(1);
        assert!(matches!(
            flag_value(&mut it, USAGE),
            Err(CliError::Usage(USAGE))
        ));
    }

    #[test]
    fn numbers_parse_or_report_usage() {
        assert_eq!(parse_number::<usize>(" 49 ", USAGE).unwrap(), 49);
        assert!(matches!(
            parse_number::<u8>("300", USAGE),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), MatrixConfig::default());
    }
}
