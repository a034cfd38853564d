//! Command-line arguments.

use std::fmt;
use std::path::PathBuf;

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: mmsplain [OPTIONS] <input-file>

Convert a binary MMS message to plain text.

Options:
  -h, --help              Print this help
  -V, --version           Print the version
      --encode            Plain text to MMS (not supported)
  -o, --output <path>     Write to a file (or directory with --with-dir)
      --with-dir          Write header.txt and one file per part into --output
      --no-body           Leave part payloads out of the plain text
      --metadata <dir>    Load code tables from JSON files in <dir>";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage.
    Help,
    /// Print the version.
    Version,
    /// Convert a file.
    Convert(Options),
    /// Re-encode plain text into a binary PDU.
    Encode,
}

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The binary MMS file.
    pub input: PathBuf,
    /// Output file or directory; stdout if absent.
    pub output: Option<PathBuf>,
    /// Write directory output instead of a single file.
    pub with_dir: bool,
    /// Include part payloads in the plain text.
    pub include_body: bool,
    /// Metadata directory for code tables.
    pub metadata: Option<PathBuf>,
}

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// An option that needs a value came last.
    MissingValue(String),
    /// An option nobody knows.
    UnknownOption(String),
    /// More than one input file.
    ExtraArgument(String),
    /// No input file.
    MissingInput,
    /// `--with-dir` without `--output`.
    DirectoryWithoutOutput,
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(opt) => write!(f, "option {opt} requires a value"),
            Self::UnknownOption(opt) => write!(f, "unknown option {opt}"),
            Self::ExtraArgument(arg) => write!(f, "unexpected argument {arg}"),
            Self::MissingInput => write!(f, "no input file given"),
            Self::DirectoryWithoutOutput => write!(f, "--with-dir requires --output"),
        }
    }
}

impl std::error::Error for ArgError {}

/// Parses arguments, excluding the program name.
///
/// # Errors
///
/// Returns an error for unknown options, missing values, or a missing or
/// repeated input file.
pub fn parse<I>(args: I) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input = None;
    let mut output = None;
    let mut with_dir = false;
    let mut include_body = true;
    let mut metadata = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--encode" => return Ok(Command::Encode),
            "-o" | "--output" => {
                output = Some(PathBuf::from(args.next().ok_or(ArgError::MissingValue(arg))?));
            }
            "--metadata" => {
                metadata = Some(PathBuf::from(args.next().ok_or(ArgError::MissingValue(arg))?));
            }
            "--with-dir" => with_dir = true,
            "--no-body" => include_body = false,
            opt if opt.starts_with('-') => {
                return Err(ArgError::UnknownOption(arg));
            }
            _ if input.is_some() => return Err(ArgError::ExtraArgument(arg)),
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let input = input.ok_or(ArgError::MissingInput)?;
    if with_dir && output.is_none() {
        return Err(ArgError::DirectoryWithoutOutput);
    }

    Ok(Command::Convert(Options {
        input,
        output,
        with_dir,
        include_body,
        metadata,
    }))
}
